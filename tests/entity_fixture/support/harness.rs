use std::sync::Arc;

use entity_fixtures::{
    config::{harness_config::HarnessConfig, runtime_config::RuntimeConfig},
    entity_fixture::{
        EntityFixtureServices, build_entity_fixture_services_with_issuer,
        application::command_services::lifecycle_coordinator_impl::LifecycleCoordinatorImpl,
        domain::model::{
            commands::entity_fixture_definition::EntityFixtureDefinition,
            enums::storage_mode::StorageMode,
        },
        infrastructure::persistence::repositories::local::static_runtime_config_repository_impl::StaticRuntimeConfigRepositoryImpl,
    },
    shared::logging::init_test_logging,
    suite_runner::domain::model::entities::test_context::TestContext,
};

use super::{
    fakes::{FakeCredentialIssuer, FakeEntityClass},
    fixtures::{fixed_suffix, widgets_options},
};

pub struct FixtureTestHarness {
    pub issuer: Arc<FakeCredentialIssuer>,
    pub entity_class: Arc<FakeEntityClass>,
    pub services: EntityFixtureServices,
    pub test_context: TestContext,
}

impl FixtureTestHarness {
    pub fn definition(&self, storage_mode: StorageMode) -> EntityFixtureDefinition<FakeEntityClass> {
        EntityFixtureDefinition::new(
            "widgets".to_string(),
            self.entity_class.clone(),
            widgets_options(),
            storage_mode,
        )
        .expect("definition should be valid")
    }

    pub fn coordinator(
        &self,
        definition: EntityFixtureDefinition<FakeEntityClass>,
    ) -> LifecycleCoordinatorImpl<FakeEntityClass> {
        LifecycleCoordinatorImpl::new(
            definition,
            self.services.binder.clone(),
            self.services.runtime_config_repository.clone(),
        )
    }
}

pub fn create_harness(storage_mode: StorageMode, runtime_config: RuntimeConfig) -> FixtureTestHarness {
    build_harness(storage_mode, runtime_config, false)
}

pub fn create_failing_harness(
    storage_mode: StorageMode,
    runtime_config: RuntimeConfig,
) -> FixtureTestHarness {
    build_harness(storage_mode, runtime_config, true)
}

fn build_harness(
    storage_mode: StorageMode,
    runtime_config: RuntimeConfig,
    fail_setup: bool,
) -> FixtureTestHarness {
    init_test_logging();

    let config = HarnessConfig::new(storage_mode, fixed_suffix());
    let issuer = Arc::new(FakeCredentialIssuer::new());
    let services = build_entity_fixture_services_with_issuer(
        &config,
        Arc::new(StaticRuntimeConfigRepositoryImpl::new(runtime_config)),
        issuer.clone(),
    );

    let registry = services.binder.registry().clone();
    let entity_class = Arc::new(if fail_setup {
        FakeEntityClass::failing("Widgets", registry)
    } else {
        FakeEntityClass::new("Widgets", registry)
    });

    FixtureTestHarness {
        issuer,
        entity_class,
        services,
        test_context: TestContext::new(),
    }
}
