use async_trait::async_trait;

use crate::entity_store::domain::model::{
    enums::entity_store_error::EntityStoreError, value_objects::resource_name::ResourceName,
};

#[async_trait]
pub trait ResourceAdministrationRepository: Send + Sync {
    async fn list_resources(&self) -> Result<Vec<ResourceName>, EntityStoreError>;

    async fn delete_resource(&self, resource_name: &ResourceName) -> Result<(), EntityStoreError>;
}
