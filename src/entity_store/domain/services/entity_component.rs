use async_trait::async_trait;
use serde_json::Value;

use crate::entity_store::domain::model::{
    enums::entity_store_error::EntityStoreError,
    queries::scan_query::ScanQuery,
    value_objects::{resource_name::ResourceName, row_key::RowKey},
};

#[async_trait]
pub trait EntityRow: Send + Sync {
    fn row_key(&self) -> &RowKey;

    fn properties(&self) -> &Value;

    async fn remove(self: Box<Self>) -> Result<(), EntityStoreError>;
}

#[async_trait]
pub trait ScanHandler: Send {
    async fn handle(&mut self, row: Box<dyn EntityRow>) -> Result<(), EntityStoreError>;
}

#[async_trait]
pub trait EntityComponent: Send + Sync {
    fn resource_name(&self) -> &ResourceName;

    async fn ensure_resource_exists(&self) -> Result<(), EntityStoreError>;

    async fn scan(
        &self,
        query: &ScanQuery,
        handler: &mut dyn ScanHandler,
    ) -> Result<(), EntityStoreError>;
}
