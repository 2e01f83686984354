use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::entity_store::{
    domain::{
        model::{
            entities::entity_record::EntityRecord,
            enums::entity_store_error::EntityStoreError,
            queries::scan_query::ScanQuery,
            value_objects::{credential::Credential, resource_name::ResourceName, row_key::RowKey},
        },
        services::entity_component::{EntityComponent, EntityRow, ScanHandler},
    },
    infrastructure::persistence::repositories::in_memory::in_memory_entity_store::InMemoryEntityStore,
};

pub struct InMemoryEntityComponentImpl {
    store: Arc<InMemoryEntityStore>,
    resource_name: ResourceName,
    credentials: Credential,
}

impl InMemoryEntityComponentImpl {
    pub fn new(
        store: Arc<InMemoryEntityStore>,
        resource_name: ResourceName,
        credentials: Credential,
    ) -> Self {
        Self {
            store,
            resource_name,
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credential {
        &self.credentials
    }

    pub async fn insert(&self, row_key: &str, properties: Value) -> Result<(), EntityStoreError> {
        let record = EntityRecord::new(row_key.to_string(), properties)?;
        self.store.insert_row(&self.resource_name, record).await
    }

    pub async fn load(&self, row_key: &str) -> Result<Option<Value>, EntityStoreError> {
        let row_key = RowKey::new(row_key.to_string())?;
        self.store.load_row(&self.resource_name, &row_key).await
    }

    pub async fn count(&self) -> Result<usize, EntityStoreError> {
        self.store.count_rows(&self.resource_name).await
    }
}

#[async_trait]
impl EntityComponent for InMemoryEntityComponentImpl {
    fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    async fn ensure_resource_exists(&self) -> Result<(), EntityStoreError> {
        self.store.create_resource(&self.resource_name).await;
        Ok(())
    }

    async fn scan(
        &self,
        query: &ScanQuery,
        handler: &mut dyn ScanHandler,
    ) -> Result<(), EntityStoreError> {
        let rows = self
            .store
            .matching_rows(&self.resource_name, query)
            .await?;

        for (row_key, properties) in rows {
            handler
                .handle(Box::new(InMemoryEntityRow {
                    store: self.store.clone(),
                    resource_name: self.resource_name.clone(),
                    row_key,
                    properties,
                }))
                .await?;
        }

        Ok(())
    }
}

struct InMemoryEntityRow {
    store: Arc<InMemoryEntityStore>,
    resource_name: ResourceName,
    row_key: RowKey,
    properties: Value,
}

#[async_trait]
impl EntityRow for InMemoryEntityRow {
    fn row_key(&self) -> &RowKey {
        &self.row_key
    }

    fn properties(&self) -> &Value {
        &self.properties
    }

    async fn remove(self: Box<Self>) -> Result<(), EntityStoreError> {
        self.store
            .delete_row(&self.resource_name, &self.row_key)
            .await
    }
}
