use std::sync::Arc;

use tracing::info;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::{
        application::command_services::setup_override_registry::SetupOverrideRegistry,
        domain::{
            model::{
                entities::setup_override::SetupOverride,
                enums::{
                    credential_injection::CredentialInjection,
                    entity_fixture_error::EntityFixtureError, storage_mode::StorageMode,
                },
                value_objects::run_suffix::RunSuffix,
            },
            services::credential_resolver::CredentialResolver,
        },
    },
    entity_store::domain::{
        model::commands::entity_setup_options::EntitySetupOptions,
        services::{entity_class::EntityClass, entity_component::EntityComponent},
    },
};

pub struct ResourceBinder {
    registry: Arc<SetupOverrideRegistry>,
    credential_resolver: Arc<dyn CredentialResolver>,
    run_suffix: RunSuffix,
}

impl ResourceBinder {
    pub fn new(
        registry: Arc<SetupOverrideRegistry>,
        credential_resolver: Arc<dyn CredentialResolver>,
        run_suffix: RunSuffix,
    ) -> Self {
        Self {
            registry,
            credential_resolver,
            run_suffix,
        }
    }

    pub fn registry(&self) -> &Arc<SetupOverrideRegistry> {
        &self.registry
    }

    pub fn run_suffix(&self) -> &RunSuffix {
        &self.run_suffix
    }

    pub async fn bind_once<C: EntityClass>(
        &self,
        entity_class: &C,
        storage_mode: StorageMode,
        credential_injection: CredentialInjection,
        base_options: EntitySetupOptions,
        runtime_config: &RuntimeConfig,
    ) -> Result<Arc<C::Component>, EntityFixtureError> {
        let class_key = entity_class.class_key();

        self.registry
            .install(
                class_key.clone(),
                SetupOverride::new(
                    storage_mode,
                    credential_injection,
                    self.run_suffix.clone(),
                    runtime_config.clone(),
                    self.credential_resolver.clone(),
                ),
            )
            .await;

        let component = self
            .registry
            .dispatch_setup(entity_class, base_options)
            .await?;

        info!(
            entity_class = %class_key,
            resource_name = %component.resource_name(),
            storage_mode = storage_mode.as_str(),
            "entity class bound"
        );

        Ok(component)
    }
}
