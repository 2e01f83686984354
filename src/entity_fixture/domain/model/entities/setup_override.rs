use std::sync::Arc;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::domain::{
        model::{
            enums::{
                credential_injection::CredentialInjection,
                entity_fixture_error::EntityFixtureError, storage_mode::StorageMode,
            },
            value_objects::run_suffix::RunSuffix,
        },
        services::credential_resolver::CredentialResolver,
    },
    entity_store::domain::model::commands::entity_setup_options::EntitySetupOptions,
};

pub struct SetupOverride {
    storage_mode: StorageMode,
    credential_injection: CredentialInjection,
    run_suffix: RunSuffix,
    runtime_config: RuntimeConfig,
    credential_resolver: Arc<dyn CredentialResolver>,
}

impl SetupOverride {
    pub fn new(
        storage_mode: StorageMode,
        credential_injection: CredentialInjection,
        run_suffix: RunSuffix,
        runtime_config: RuntimeConfig,
        credential_resolver: Arc<dyn CredentialResolver>,
    ) -> Self {
        Self {
            storage_mode,
            credential_injection,
            run_suffix,
            runtime_config,
            credential_resolver,
        }
    }

    pub fn storage_mode(&self) -> StorageMode {
        self.storage_mode
    }

    pub async fn apply(
        self,
        options: EntitySetupOptions,
    ) -> Result<EntitySetupOptions, EntityFixtureError> {
        let options = match self.storage_mode {
            StorageMode::Shared => {
                let resource_name = options
                    .resource_name()
                    .with_suffix(self.run_suffix.value())
                    .map_err(EntityFixtureError::InvalidEntityOptions)?;
                options.with_resource_name(resource_name)
            }
            StorageMode::Isolated => options,
        };

        let credentials = self
            .credential_resolver
            .resolve_credentials(
                self.storage_mode,
                self.credential_injection,
                options.resource_name(),
                &self.runtime_config,
            )
            .await?;

        Ok(match credentials {
            Some(credentials) => options.with_credentials(credentials),
            None => options,
        })
    }
}
