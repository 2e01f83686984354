use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("required configuration value is missing: {0}")]
    MissingValue(&'static str),

    #[error("configuration value {name} is invalid: {value}")]
    InvalidValue { name: String, value: String },

    #[error("runtime configuration is not valid JSON: {0}")]
    InvalidJson(String),
}
