use async_trait::async_trait;

use crate::{
    entity_fixture::domain::model::{
        entities::resource_binding::FixtureSuiteContext,
        enums::entity_fixture_error::EntityFixtureError,
    },
    entity_store::domain::services::entity_component::EntityComponent,
    suite_runner::domain::model::entities::test_context::TestContext,
};

#[async_trait]
pub trait LifecycleCoordinator<T: EntityComponent + 'static>: Send + Sync {
    fn skipping(&self) -> bool;

    async fn suite_setup(
        &self,
        suite: &mut FixtureSuiteContext<T>,
        test_context: &TestContext,
    ) -> Result<(), EntityFixtureError>;

    async fn before_each(
        &self,
        suite: &mut FixtureSuiteContext<T>,
    ) -> Result<(), EntityFixtureError>;

    async fn after_each(
        &self,
        suite: &mut FixtureSuiteContext<T>,
    ) -> Result<(), EntityFixtureError>;

    async fn suite_teardown(
        &self,
        suite: &mut FixtureSuiteContext<T>,
        test_context: &TestContext,
    ) -> Result<(), EntityFixtureError>;
}
