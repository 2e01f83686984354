use serde_json::Value;

use crate::entity_store::domain::model::{
    enums::entity_store_error::EntityStoreError, value_objects::row_key::RowKey,
};

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRecord {
    row_key: RowKey,
    properties: Value,
}

impl EntityRecord {
    pub fn new(row_key: String, properties: Value) -> Result<Self, EntityStoreError> {
        if !properties.is_object() {
            return Err(EntityStoreError::InvalidRowProperties);
        }

        Ok(Self {
            row_key: RowKey::new(row_key)?,
            properties,
        })
    }

    pub fn row_key(&self) -> &RowKey {
        &self.row_key
    }

    pub fn properties(&self) -> &Value {
        &self.properties
    }

    pub fn into_parts(self) -> (RowKey, Value) {
        (self.row_key, self.properties)
    }
}
