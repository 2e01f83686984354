use std::sync::Arc;

use async_trait::async_trait;

use crate::entity_store::domain::{
    model::{
        commands::entity_setup_options::EntitySetupOptions,
        enums::entity_store_error::EntityStoreError,
        value_objects::entity_class_key::EntityClassKey,
    },
    services::entity_component::EntityComponent,
};

#[async_trait]
pub trait EntityClass: Send + Sync + 'static {
    type Component: EntityComponent + 'static;

    fn class_key(&self) -> EntityClassKey;

    async fn setup(
        &self,
        options: EntitySetupOptions,
    ) -> Result<Arc<Self::Component>, EntityStoreError>;
}
