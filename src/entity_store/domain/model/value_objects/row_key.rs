use crate::entity_store::domain::model::enums::entity_store_error::EntityStoreError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RowKey(String);

impl RowKey {
    pub fn new(value: String) -> Result<Self, EntityStoreError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 255 {
            return Err(EntityStoreError::InvalidRowKey);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
