use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    entity_fixture::domain::model::enums::entity_fixture_error::EntityFixtureError,
    entity_store::domain::model::value_objects::resource_name::ResourceName,
};

#[async_trait]
pub trait StaleResourceSweeper: Send + Sync {
    async fn sweep(&self, cutoff: NaiveDate) -> Result<Vec<ResourceName>, EntityFixtureError>;
}
