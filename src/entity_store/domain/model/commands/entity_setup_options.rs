use std::collections::BTreeMap;

use serde_json::Value;

use crate::entity_store::domain::model::{
    enums::entity_store_error::EntityStoreError,
    value_objects::{credential::Credential, resource_name::ResourceName},
};

#[derive(Clone, Debug, PartialEq)]
pub struct EntitySetupOptions {
    resource_name: ResourceName,
    credentials: Credential,
    attributes: BTreeMap<String, Value>,
}

impl EntitySetupOptions {
    pub fn new(resource_name: String) -> Result<Self, EntityStoreError> {
        Ok(Self {
            resource_name: ResourceName::new(resource_name)?,
            credentials: Credential::Ambient,
            attributes: BTreeMap::new(),
        })
    }

    pub fn with_resource_name(mut self, resource_name: ResourceName) -> Self {
        self.resource_name = resource_name;
        self
    }

    pub fn with_credentials(mut self, credentials: Credential) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    pub fn credentials(&self) -> &Credential {
        &self.credentials
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }
}
