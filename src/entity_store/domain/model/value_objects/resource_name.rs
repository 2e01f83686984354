use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::entity_store::domain::model::enums::entity_store_error::EntityStoreError;

lazy_static! {
    static ref RESOURCE_NAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9]{2,62}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(value: String) -> Result<Self, EntityStoreError> {
        let trimmed = value.trim();

        if !RESOURCE_NAME_PATTERN.is_match(trimmed) {
            return Err(EntityStoreError::InvalidResourceName(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn with_suffix(&self, suffix: &str) -> Result<Self, EntityStoreError> {
        Self::new(format!("{}{}", self.0, suffix))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
