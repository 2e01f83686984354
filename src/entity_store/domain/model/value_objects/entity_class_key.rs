use std::fmt;

use crate::entity_store::domain::model::enums::entity_store_error::EntityStoreError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntityClassKey(String);

impl EntityClassKey {
    pub fn new(value: impl Into<String>) -> Result<Self, EntityStoreError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EntityStoreError::InvalidEntityClassKey);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
