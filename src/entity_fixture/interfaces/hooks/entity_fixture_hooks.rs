use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    entity_fixture::domain::{
        model::{
            entities::resource_binding::FixtureSuiteContext,
            enums::entity_fixture_error::EntityFixtureError,
            value_objects::component_name::ComponentName,
        },
        services::lifecycle_coordinator::LifecycleCoordinator,
    },
    entity_store::domain::{
        model::enums::entity_store_error::EntityStoreError,
        services::entity_component::EntityComponent,
    },
    suite_runner::{
        application::suite_runner::SuiteRunner,
        domain::model::enums::suite_failure::SuiteFailure,
    },
};

pub fn hook_label(component_name: &ComponentName) -> String {
    format!("with_entity for {}", component_name)
}

pub fn register_entity_fixture_hooks<T, L>(
    runner: &mut SuiteRunner,
    component_name: &ComponentName,
    coordinator: Arc<L>,
) -> Arc<Mutex<FixtureSuiteContext<T>>>
where
    T: EntityComponent + 'static,
    L: LifecycleCoordinator<T> + 'static,
{
    let label = hook_label(component_name);
    let suite = Arc::new(Mutex::new(FixtureSuiteContext::<T>::new()));

    {
        let coordinator = coordinator.clone();
        let suite = suite.clone();
        runner.suite_setup(label.clone(), move |context| {
            let coordinator = coordinator.clone();
            let suite = suite.clone();
            async move {
                let mut suite = suite.lock().await;
                coordinator
                    .suite_setup(&mut suite, &context)
                    .await
                    .map_err(SuiteFailure::from)
            }
        });
    }

    {
        let coordinator = coordinator.clone();
        let suite = suite.clone();
        runner.setup(label.clone(), move |_| {
            let coordinator = coordinator.clone();
            let suite = suite.clone();
            async move {
                let mut suite = suite.lock().await;
                coordinator
                    .before_each(&mut suite)
                    .await
                    .map_err(SuiteFailure::from)
            }
        });
    }

    {
        let coordinator = coordinator.clone();
        let suite = suite.clone();
        runner.teardown(label.clone(), move |_| {
            let coordinator = coordinator.clone();
            let suite = suite.clone();
            async move {
                let mut suite = suite.lock().await;
                coordinator
                    .after_each(&mut suite)
                    .await
                    .map_err(SuiteFailure::from)
            }
        });
    }

    {
        let suite = suite.clone();
        runner.suite_teardown(label, move |context| {
            let coordinator = coordinator.clone();
            let suite = suite.clone();
            async move {
                let mut suite = suite.lock().await;
                coordinator
                    .suite_teardown(&mut suite, &context)
                    .await
                    .map_err(SuiteFailure::from)
            }
        });
    }

    suite
}

impl From<EntityFixtureError> for SuiteFailure {
    fn from(error: EntityFixtureError) -> Self {
        SuiteFailure::Failed(error.to_string())
    }
}

impl From<EntityStoreError> for SuiteFailure {
    fn from(error: EntityStoreError) -> Self {
        SuiteFailure::Failed(error.to_string())
    }
}
