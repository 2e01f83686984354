use std::collections::BTreeMap;

use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanQuery {
    conditions: BTreeMap<String, Value>,
}

impl ScanQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, property: impl Into<String>, value: Value) -> Self {
        self.conditions.insert(property.into(), value);
        self
    }

    pub fn conditions(&self) -> &BTreeMap<String, Value> {
        &self.conditions
    }

    pub fn matches(&self, properties: &Value) -> bool {
        self.conditions
            .iter()
            .all(|(property, expected)| properties.get(property) == Some(expected))
    }
}
