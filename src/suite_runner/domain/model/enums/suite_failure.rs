use std::time::Duration;

use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SuiteFailure {
    #[error("{0}")]
    Failed(String),

    #[error("\"{label}\" panicked: {message}")]
    Panicked { label: String, message: String },

    #[error("\"{label}\" timed out after {timeout:?}")]
    TimedOut { label: String, timeout: Duration },

    #[error("\"{label}\" was cancelled")]
    Cancelled { label: String },
}

impl SuiteFailure {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }
}
