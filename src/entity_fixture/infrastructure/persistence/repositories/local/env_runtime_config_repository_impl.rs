use async_trait::async_trait;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::{
        domain::model::enums::entity_fixture_error::EntityFixtureError,
        infrastructure::persistence::repositories::runtime_config_repository::RuntimeConfigRepository,
    },
};

pub struct EnvRuntimeConfigRepositoryImpl;

impl EnvRuntimeConfigRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvRuntimeConfigRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuntimeConfigRepository for EnvRuntimeConfigRepositoryImpl {
    async fn load(&self) -> Result<RuntimeConfig, EntityFixtureError> {
        Ok(RuntimeConfig::from_env())
    }
}
