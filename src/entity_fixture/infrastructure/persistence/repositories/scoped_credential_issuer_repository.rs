use async_trait::async_trait;

use crate::{
    config::runtime_config::ClientCredentials,
    entity_fixture::domain::model::enums::entity_fixture_error::EntityFixtureError,
    entity_store::domain::model::value_objects::{
        credential::ScopedCredential, resource_name::ResourceName,
    },
};

#[derive(Clone, Debug)]
pub struct ScopedCredentialRequest {
    account_id: String,
    resource_name: ResourceName,
    root_url: String,
    credentials: ClientCredentials,
}

impl ScopedCredentialRequest {
    pub fn new(
        account_id: impl Into<String>,
        resource_name: ResourceName,
        root_url: impl Into<String>,
        credentials: ClientCredentials,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            resource_name,
            root_url: root_url.into(),
            credentials,
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }
}

#[async_trait]
pub trait ScopedCredentialIssuerRepository: Send + Sync {
    async fn issue(
        &self,
        request: &ScopedCredentialRequest,
    ) -> Result<ScopedCredential, EntityFixtureError>;
}
