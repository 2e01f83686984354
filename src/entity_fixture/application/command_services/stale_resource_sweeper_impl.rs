use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::{
    entity_fixture::domain::{
        model::{
            enums::entity_fixture_error::EntityFixtureError, value_objects::run_suffix::RunSuffix,
        },
        services::stale_resource_sweeper::StaleResourceSweeper,
    },
    entity_store::{
        domain::model::value_objects::resource_name::ResourceName,
        infrastructure::persistence::repositories::resource_administration_repository::ResourceAdministrationRepository,
    },
};

pub struct StaleResourceSweeperImpl {
    administration_repository: Arc<dyn ResourceAdministrationRepository>,
    current_suffix: RunSuffix,
}

impl StaleResourceSweeperImpl {
    pub fn new(
        administration_repository: Arc<dyn ResourceAdministrationRepository>,
        current_suffix: RunSuffix,
    ) -> Self {
        Self {
            administration_repository,
            current_suffix,
        }
    }

    fn is_stale(&self, resource_name: &ResourceName, cutoff: NaiveDate) -> bool {
        match RunSuffix::extract_from(resource_name.value()) {
            Some((_, suffix)) => suffix != self.current_suffix && suffix.date() < cutoff,
            None => false,
        }
    }
}

#[async_trait]
impl StaleResourceSweeper for StaleResourceSweeperImpl {
    async fn sweep(&self, cutoff: NaiveDate) -> Result<Vec<ResourceName>, EntityFixtureError> {
        let resources = self
            .administration_repository
            .list_resources()
            .await
            .map_err(EntityFixtureError::Sweep)?;

        let mut deleted = Vec::new();
        for resource_name in resources
            .into_iter()
            .filter(|name| self.is_stale(name, cutoff))
        {
            self.administration_repository
                .delete_resource(&resource_name)
                .await
                .map_err(EntityFixtureError::Sweep)?;
            info!(resource_name = %resource_name, "deleted stale resource");
            deleted.push(resource_name);
        }

        Ok(deleted)
    }
}
