use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::entity_store::{
    domain::model::{
        entities::entity_record::EntityRecord,
        enums::entity_store_error::EntityStoreError,
        queries::scan_query::ScanQuery,
        value_objects::{resource_name::ResourceName, row_key::RowKey},
    },
    infrastructure::persistence::repositories::resource_administration_repository::ResourceAdministrationRepository,
};

type InMemoryTable = BTreeMap<RowKey, Value>;

pub struct InMemoryEntityStore {
    tables: RwLock<HashMap<ResourceName, InMemoryTable>>,
    auto_provision_scoped: bool,
}

impl InMemoryEntityStore {
    /// Creates tables on scoped-credential setup, like a backend that issues
    /// per-resource access.
    pub fn new() -> Self {
        Self::with_auto_provisioning(true)
    }

    pub fn with_auto_provisioning(auto_provision_scoped: bool) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            auto_provision_scoped,
        }
    }

    pub fn auto_provisions_scoped(&self) -> bool {
        self.auto_provision_scoped
    }

    pub async fn create_resource(&self, resource_name: &ResourceName) -> bool {
        let mut guard = self.tables.write().await;
        if guard.contains_key(resource_name) {
            return false;
        }

        guard.insert(resource_name.clone(), InMemoryTable::new());
        true
    }

    pub async fn has_resource(&self, resource_name: &ResourceName) -> bool {
        self.tables.read().await.contains_key(resource_name)
    }

    pub async fn insert_row(
        &self,
        resource_name: &ResourceName,
        record: EntityRecord,
    ) -> Result<(), EntityStoreError> {
        let mut guard = self.tables.write().await;
        let table = guard
            .get_mut(resource_name)
            .ok_or_else(|| EntityStoreError::ResourceNotFound(resource_name.to_string()))?;

        let (row_key, properties) = record.into_parts();
        table.insert(row_key, properties);
        Ok(())
    }

    pub async fn load_row(
        &self,
        resource_name: &ResourceName,
        row_key: &RowKey,
    ) -> Result<Option<Value>, EntityStoreError> {
        let guard = self.tables.read().await;
        let table = guard
            .get(resource_name)
            .ok_or_else(|| EntityStoreError::ResourceNotFound(resource_name.to_string()))?;

        Ok(table.get(row_key).cloned())
    }

    pub async fn count_rows(&self, resource_name: &ResourceName) -> Result<usize, EntityStoreError> {
        let guard = self.tables.read().await;
        guard
            .get(resource_name)
            .map(|table| table.len())
            .ok_or_else(|| EntityStoreError::ResourceNotFound(resource_name.to_string()))
    }

    pub async fn matching_rows(
        &self,
        resource_name: &ResourceName,
        query: &ScanQuery,
    ) -> Result<Vec<(RowKey, Value)>, EntityStoreError> {
        let guard = self.tables.read().await;
        let table = guard
            .get(resource_name)
            .ok_or_else(|| EntityStoreError::ResourceNotFound(resource_name.to_string()))?;

        Ok(table
            .iter()
            .filter(|(_, properties)| query.matches(properties))
            .map(|(row_key, properties)| (row_key.clone(), properties.clone()))
            .collect())
    }

    pub async fn delete_row(
        &self,
        resource_name: &ResourceName,
        row_key: &RowKey,
    ) -> Result<(), EntityStoreError> {
        let mut guard = self.tables.write().await;
        let table = guard
            .get_mut(resource_name)
            .ok_or_else(|| EntityStoreError::ResourceNotFound(resource_name.to_string()))?;

        table
            .remove(row_key)
            .map(|_| ())
            .ok_or_else(|| EntityStoreError::RowNotFound {
                resource_name: resource_name.to_string(),
                row_key: row_key.value().to_string(),
            })
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceAdministrationRepository for InMemoryEntityStore {
    async fn list_resources(&self) -> Result<Vec<ResourceName>, EntityStoreError> {
        let guard = self.tables.read().await;
        let mut names = guard.keys().cloned().collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }

    async fn delete_resource(&self, resource_name: &ResourceName) -> Result<(), EntityStoreError> {
        self.tables
            .write()
            .await
            .remove(resource_name)
            .map(|_| ())
            .ok_or_else(|| EntityStoreError::ResourceNotFound(resource_name.to_string()))
    }
}
