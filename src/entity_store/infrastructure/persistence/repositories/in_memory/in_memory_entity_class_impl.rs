use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::entity_store::{
    domain::{
        model::{
            commands::entity_setup_options::EntitySetupOptions,
            enums::entity_store_error::EntityStoreError,
            value_objects::{credential::Credential, entity_class_key::EntityClassKey},
        },
        services::entity_class::EntityClass,
    },
    infrastructure::persistence::repositories::in_memory::{
        in_memory_entity_component_impl::InMemoryEntityComponentImpl,
        in_memory_entity_store::InMemoryEntityStore,
    },
};

pub struct InMemoryEntityClassImpl {
    class_key: EntityClassKey,
    store: Arc<InMemoryEntityStore>,
}

impl InMemoryEntityClassImpl {
    pub fn new(
        class_name: impl Into<String>,
        store: Arc<InMemoryEntityStore>,
    ) -> Result<Self, EntityStoreError> {
        Ok(Self {
            class_key: EntityClassKey::new(class_name)?,
            store,
        })
    }

    pub fn store(&self) -> &Arc<InMemoryEntityStore> {
        &self.store
    }
}

#[async_trait]
impl EntityClass for InMemoryEntityClassImpl {
    type Component = InMemoryEntityComponentImpl;

    fn class_key(&self) -> EntityClassKey {
        self.class_key.clone()
    }

    async fn setup(
        &self,
        options: EntitySetupOptions,
    ) -> Result<Arc<Self::Component>, EntityStoreError> {
        if let Credential::Scoped(credential) = options.credentials() {
            if !credential.authorizes(options.resource_name(), Utc::now()) {
                return Err(EntityStoreError::Unauthorized(
                    options.resource_name().to_string(),
                ));
            }

            if self.store.auto_provisions_scoped() {
                self.store.create_resource(options.resource_name()).await;
            }
        }

        Ok(Arc::new(InMemoryEntityComponentImpl::new(
            self.store.clone(),
            options.resource_name().clone(),
            options.credentials().clone(),
        )))
    }
}
