use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::{
    entity_fixture::{
        domain::model::enums::entity_fixture_error::EntityFixtureError,
        infrastructure::persistence::repositories::scoped_credential_issuer_repository::{
            ScopedCredentialIssuerRepository, ScopedCredentialRequest,
        },
    },
    entity_store::domain::model::value_objects::credential::ScopedCredential,
};

pub struct Sha256ScopedCredentialIssuerRepositoryImpl {
    ttl: Duration,
}

impl Sha256ScopedCredentialIssuerRepositoryImpl {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    fn signature(request: &ScopedCredentialRequest, expires_at: DateTime<Utc>) -> String {
        let mut hasher = Sha256::new();
        hasher.update(request.credentials().client_id.as_bytes());
        hasher.update(b"\n");
        hasher.update(request.credentials().access_token.as_bytes());
        hasher.update(b"\n");
        hasher.update(request.account_id().as_bytes());
        hasher.update(b"\n");
        hasher.update(request.resource_name().value().as_bytes());
        hasher.update(b"\n");
        hasher.update(request.root_url().as_bytes());
        hasher.update(b"\n");
        hasher.update(expires_at.timestamp().to_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl ScopedCredentialIssuerRepository for Sha256ScopedCredentialIssuerRepositoryImpl {
    async fn issue(
        &self,
        request: &ScopedCredentialRequest,
    ) -> Result<ScopedCredential, EntityFixtureError> {
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| EntityFixtureError::CredentialIssuance(e.to_string()))?;
        let expires_at = Utc::now() + ttl;

        Ok(ScopedCredential::new(
            request.account_id(),
            request.resource_name().clone(),
            request.root_url(),
            Self::signature(request, expires_at),
            expires_at,
        ))
    }
}
