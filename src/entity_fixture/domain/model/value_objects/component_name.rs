use std::fmt;

use crate::entity_fixture::domain::model::enums::entity_fixture_error::EntityFixtureError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(value: String) -> Result<Self, EntityFixtureError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 128 {
            return Err(EntityFixtureError::InvalidComponentName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
