use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    entity_fixture::{
        application::command_services::{
            erase_all_rows_cleanup_action_impl::EraseAllRowsCleanupActionImpl,
            resource_binder::ResourceBinder,
        },
        domain::{
            model::{
                commands::entity_fixture_definition::EntityFixtureDefinition,
                entities::resource_binding::{FixtureSuiteContext, ResourceBinding},
                enums::entity_fixture_error::EntityFixtureError,
            },
            services::{
                cleanup_action::CleanupAction, lifecycle_coordinator::LifecycleCoordinator,
            },
        },
        infrastructure::persistence::repositories::runtime_config_repository::RuntimeConfigRepository,
    },
    entity_store::domain::services::{entity_class::EntityClass, entity_component::EntityComponent},
    suite_runner::domain::model::entities::test_context::TestContext,
};

pub struct LifecycleCoordinatorImpl<C: EntityClass> {
    definition: EntityFixtureDefinition<C>,
    binder: Arc<ResourceBinder>,
    runtime_config_repository: Arc<dyn RuntimeConfigRepository>,
    cleanup: Arc<dyn CleanupAction<C::Component>>,
}

impl<C: EntityClass> LifecycleCoordinatorImpl<C> {
    pub fn new(
        definition: EntityFixtureDefinition<C>,
        binder: Arc<ResourceBinder>,
        runtime_config_repository: Arc<dyn RuntimeConfigRepository>,
    ) -> Self {
        let cleanup: Arc<dyn CleanupAction<C::Component>> = match definition.cleanup() {
            Some(cleanup) => cleanup.clone(),
            None => Arc::new(EraseAllRowsCleanupActionImpl::new()),
        };

        Self {
            definition,
            binder,
            runtime_config_repository,
            cleanup,
        }
    }

    pub fn definition(&self) -> &EntityFixtureDefinition<C> {
        &self.definition
    }

    async fn clean(
        &self,
        suite: &mut FixtureSuiteContext<C::Component>,
    ) -> Result<(), EntityFixtureError> {
        let binding = suite.binding_mut().ok_or_else(|| {
            EntityFixtureError::NotBound(self.definition.component_name().to_string())
        })?;

        self.cleanup
            .cleanup(binding.component())
            .await
            .map_err(EntityFixtureError::Cleanup)?;
        binding.mark_clean()
    }
}

#[async_trait]
impl<C: EntityClass> LifecycleCoordinator<C::Component> for LifecycleCoordinatorImpl<C> {
    fn skipping(&self) -> bool {
        self.definition.skipping()
    }

    async fn suite_setup(
        &self,
        suite: &mut FixtureSuiteContext<C::Component>,
        test_context: &TestContext,
    ) -> Result<(), EntityFixtureError> {
        let component_name = self.definition.component_name();
        if self.skipping() {
            debug!(component = %component_name, "suite setup skipped");
            return Ok(());
        }

        if suite.binding().is_some() {
            return Err(EntityFixtureError::InvalidLifecycleTransition(
                suite.state().as_str(),
            ));
        }

        let storage_mode = self.definition.storage_mode();
        let credential_injection = self.definition.credential_injection();
        let runtime_config = self.runtime_config_repository.load().await?;

        let component = self
            .binder
            .bind_once(
                self.definition.entity_class().as_ref(),
                storage_mode,
                credential_injection,
                self.definition.base_options().clone(),
                &runtime_config,
            )
            .await?;

        suite.bind(ResourceBinding::new_bound(
            component_name.clone(),
            component.clone(),
            storage_mode,
            credential_injection,
        ));
        test_context
            .register(component_name.value(), component.clone())
            .await;

        if self
            .definition
            .resource_provisioning()
            .requires_explicit_creation(storage_mode, credential_injection)
        {
            component
                .ensure_resource_exists()
                .await
                .map_err(EntityFixtureError::ResourceProvisioning)?;
            debug!(resource_name = %component.resource_name(), "resource ensured");
        }

        self.clean(suite).await
    }

    async fn before_each(
        &self,
        suite: &mut FixtureSuiteContext<C::Component>,
    ) -> Result<(), EntityFixtureError> {
        if self.skipping() || !self.definition.test_ordering().cleans_before_each_test() {
            return Ok(());
        }

        self.clean(suite).await
    }

    async fn after_each(
        &self,
        suite: &mut FixtureSuiteContext<C::Component>,
    ) -> Result<(), EntityFixtureError> {
        if self.skipping() {
            return Ok(());
        }

        match suite.binding_mut() {
            Some(binding) => binding.mark_dirty(),
            None => Ok(()),
        }
    }

    async fn suite_teardown(
        &self,
        suite: &mut FixtureSuiteContext<C::Component>,
        test_context: &TestContext,
    ) -> Result<(), EntityFixtureError> {
        let component_name = self.definition.component_name();
        if self.skipping() {
            debug!(component = %component_name, "suite teardown skipped");
            return Ok(());
        }

        let cleanup_result = match suite.binding() {
            Some(binding) => self
                .cleanup
                .cleanup(binding.component())
                .await
                .map_err(EntityFixtureError::Cleanup),
            None => Ok(()),
        };

        test_context.remove(component_name.value()).await;

        if let Some(mut binding) = suite.release() {
            binding.mark_torn_down()?;
            info!(
                component = %component_name,
                resource_name = %binding.resource_name(),
                "entity fixture torn down"
            );
        }

        cleanup_result
    }
}
