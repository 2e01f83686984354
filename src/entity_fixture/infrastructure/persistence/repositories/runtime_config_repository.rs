use async_trait::async_trait;

use crate::{
    config::runtime_config::RuntimeConfig,
    entity_fixture::domain::model::enums::entity_fixture_error::EntityFixtureError,
};

#[async_trait]
pub trait RuntimeConfigRepository: Send + Sync {
    async fn load(&self) -> Result<RuntimeConfig, EntityFixtureError>;
}
