use async_trait::async_trait;

use crate::entity_store::domain::{
    model::enums::entity_store_error::EntityStoreError,
    services::entity_component::EntityComponent,
};

#[async_trait]
pub trait CleanupAction<T: EntityComponent>: Send + Sync {
    async fn cleanup(&self, component: &T) -> Result<(), EntityStoreError>;
}
