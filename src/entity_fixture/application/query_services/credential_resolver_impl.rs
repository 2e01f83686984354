use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::{
        domain::{
            model::enums::{
                credential_injection::CredentialInjection,
                entity_fixture_error::EntityFixtureError, storage_mode::StorageMode,
            },
            services::credential_resolver::CredentialResolver,
        },
        infrastructure::persistence::repositories::scoped_credential_issuer_repository::{
            ScopedCredentialIssuerRepository, ScopedCredentialRequest,
        },
    },
    entity_store::domain::model::value_objects::{
        credential::Credential, resource_name::ResourceName,
    },
};

pub struct CredentialResolverImpl {
    issuer: Arc<dyn ScopedCredentialIssuerRepository>,
}

impl CredentialResolverImpl {
    pub fn new(issuer: Arc<dyn ScopedCredentialIssuerRepository>) -> Self {
        Self { issuer }
    }
}

#[async_trait]
impl CredentialResolver for CredentialResolverImpl {
    async fn resolve_credentials(
        &self,
        storage_mode: StorageMode,
        credential_injection: CredentialInjection,
        resource_name: &ResourceName,
        runtime_config: &RuntimeConfig,
    ) -> Result<Option<Credential>, EntityFixtureError> {
        match (storage_mode, credential_injection) {
            (StorageMode::Isolated, _) => Ok(Some(Credential::InMemory)),
            (StorageMode::Shared, CredentialInjection::Skipped) => Ok(None),
            (StorageMode::Shared, CredentialInjection::Scoped) => {
                let request = ScopedCredentialRequest::new(
                    runtime_config.require_account_id()?,
                    resource_name.clone(),
                    runtime_config.require_root_url()?,
                    runtime_config.require_client_credentials()?.clone(),
                );

                let credential = self.issuer.issue(&request).await?;
                Ok(Some(Credential::Scoped(credential)))
            }
        }
    }
}
