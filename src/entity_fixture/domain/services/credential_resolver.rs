use async_trait::async_trait;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::domain::model::enums::{
        credential_injection::CredentialInjection, entity_fixture_error::EntityFixtureError,
        storage_mode::StorageMode,
    },
    entity_store::domain::model::value_objects::{
        credential::Credential, resource_name::ResourceName,
    },
};

#[async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve_credentials(
        &self,
        storage_mode: StorageMode,
        credential_injection: CredentialInjection,
        resource_name: &ResourceName,
        runtime_config: &RuntimeConfig,
    ) -> Result<Option<Credential>, EntityFixtureError>;
}
