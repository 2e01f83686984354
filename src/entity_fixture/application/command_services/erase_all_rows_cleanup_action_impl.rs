use async_trait::async_trait;
use tracing::debug;

use crate::{
    entity_fixture::domain::services::cleanup_action::CleanupAction,
    entity_store::domain::{
        model::{enums::entity_store_error::EntityStoreError, queries::scan_query::ScanQuery},
        services::entity_component::{EntityComponent, EntityRow, ScanHandler},
    },
};

#[derive(Default)]
struct RemoveEveryRowHandler {
    removed: usize,
}

#[async_trait]
impl ScanHandler for RemoveEveryRowHandler {
    async fn handle(&mut self, row: Box<dyn EntityRow>) -> Result<(), EntityStoreError> {
        row.remove().await?;
        self.removed += 1;
        Ok(())
    }
}

pub struct EraseAllRowsCleanupActionImpl;

impl EraseAllRowsCleanupActionImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EraseAllRowsCleanupActionImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: EntityComponent + 'static> CleanupAction<T> for EraseAllRowsCleanupActionImpl {
    async fn cleanup(&self, component: &T) -> Result<(), EntityStoreError> {
        let mut handler = RemoveEveryRowHandler::default();
        component.scan(&ScanQuery::all(), &mut handler).await?;

        debug!(
            resource_name = %component.resource_name(),
            removed = handler.removed,
            "erased all rows"
        );
        Ok(())
    }
}
