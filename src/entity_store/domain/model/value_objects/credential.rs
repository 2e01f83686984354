use chrono::{DateTime, Utc};

use crate::entity_store::domain::model::value_objects::resource_name::ResourceName;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Credential {
    Ambient,
    InMemory,
    Scoped(ScopedCredential),
}

impl Credential {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ambient => "ambient",
            Self::InMemory => "inMemory",
            Self::Scoped(_) => "scoped",
        }
    }

    pub fn scoped(&self) -> Option<&ScopedCredential> {
        match self {
            Self::Scoped(credential) => Some(credential),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScopedCredential {
    account_id: String,
    resource_name: ResourceName,
    root_url: String,
    signature: String,
    expires_at: DateTime<Utc>,
}

impl ScopedCredential {
    pub fn new(
        account_id: impl Into<String>,
        resource_name: ResourceName,
        root_url: impl Into<String>,
        signature: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            resource_name,
            root_url: root_url.into(),
            signature: signature.into(),
            expires_at,
        }
    }

    pub fn authorizes(&self, resource_name: &ResourceName, at: DateTime<Utc>) -> bool {
        self.resource_name == *resource_name && self.expires_at > at
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

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
