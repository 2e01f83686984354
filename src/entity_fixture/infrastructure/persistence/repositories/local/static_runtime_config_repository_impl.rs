use async_trait::async_trait;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::{
        domain::model::enums::entity_fixture_error::EntityFixtureError,
        infrastructure::persistence::repositories::runtime_config_repository::RuntimeConfigRepository,
    },
};

pub struct StaticRuntimeConfigRepositoryImpl {
    config: RuntimeConfig,
}

impl StaticRuntimeConfigRepositoryImpl {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EntityFixtureError> {
        Ok(Self::new(RuntimeConfig::from_json_str(raw)?))
    }
}

#[async_trait]
impl RuntimeConfigRepository for StaticRuntimeConfigRepositoryImpl {
    async fn load(&self) -> Result<RuntimeConfig, EntityFixtureError> {
        Ok(self.config.clone())
    }
}
