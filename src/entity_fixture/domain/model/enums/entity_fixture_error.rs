use thiserror::Error;

use crate::{
    config::config_error::ConfigError,
    entity_store::domain::model::enums::entity_store_error::EntityStoreError,
};

#[derive(Debug, Error)]
pub enum EntityFixtureError {
    #[error("component name is invalid")]
    InvalidComponentName,

    #[error("run suffix is invalid; expected T<YYYYMMDD>T<8 alphanumerics>: {0}")]
    InvalidRunSuffix(String),

    #[error("invalid entity options: {0}")]
    InvalidEntityOptions(#[source] EntityStoreError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("credential issuance failed: {0}")]
    CredentialIssuance(String),

    #[error("entity setup failed: {0}")]
    Binding(#[source] EntityStoreError),

    #[error("resource provisioning failed: {0}")]
    ResourceProvisioning(#[source] EntityStoreError),

    #[error("cleanup failed: {0}")]
    Cleanup(#[source] EntityStoreError),

    #[error("resource sweep failed: {0}")]
    Sweep(#[source] EntityStoreError),

    #[error("fixture {0} is not bound")]
    NotBound(String),

    #[error("invalid lifecycle transition from {0}")]
    InvalidLifecycleTransition(&'static str),
}
