use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EntityStoreError {
    #[error("resource name is invalid; use [A-Za-z][A-Za-z0-9] and length 3..63: {0}")]
    InvalidResourceName(String),

    #[error("entity class key is required")]
    InvalidEntityClassKey,

    #[error("row key is invalid")]
    InvalidRowKey,

    #[error("row properties must be an object")]
    InvalidRowProperties,

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("row {row_key} not found in {resource_name}")]
    RowNotFound {
        resource_name: String,
        row_key: String,
    },

    #[error("credential does not authorize access to {0}")]
    Unauthorized(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
