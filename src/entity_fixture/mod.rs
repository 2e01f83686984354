use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::harness_config::HarnessConfig,
    entity_fixture::{
        application::{
            command_services::{
                lifecycle_coordinator_impl::LifecycleCoordinatorImpl,
                resource_binder::ResourceBinder, setup_override_registry::SetupOverrideRegistry,
                stale_resource_sweeper_impl::StaleResourceSweeperImpl,
            },
            query_services::credential_resolver_impl::CredentialResolverImpl,
        },
        domain::model::{
            commands::entity_fixture_definition::EntityFixtureDefinition,
            entities::resource_binding::FixtureSuiteContext,
            enums::entity_fixture_error::EntityFixtureError,
        },
        infrastructure::persistence::repositories::{
            local::{
                env_runtime_config_repository_impl::EnvRuntimeConfigRepositoryImpl,
                sha256_scoped_credential_issuer_repository_impl::Sha256ScopedCredentialIssuerRepositoryImpl,
            },
            runtime_config_repository::RuntimeConfigRepository,
            scoped_credential_issuer_repository::ScopedCredentialIssuerRepository,
        },
        interfaces::hooks::entity_fixture_hooks::register_entity_fixture_hooks,
    },
    entity_store::{
        domain::{
            model::commands::entity_setup_options::EntitySetupOptions,
            services::entity_class::EntityClass,
        },
        infrastructure::persistence::repositories::resource_administration_repository::ResourceAdministrationRepository,
    },
    suite_runner::application::suite_runner::SuiteRunner,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

#[derive(Clone)]
pub struct EntityFixtureServices {
    pub config: HarnessConfig,
    pub runtime_config_repository: Arc<dyn RuntimeConfigRepository>,
    pub binder: Arc<ResourceBinder>,
}

impl EntityFixtureServices {
    pub fn definition<C: EntityClass>(
        &self,
        component_name: impl Into<String>,
        entity_class: Arc<C>,
        base_options: EntitySetupOptions,
    ) -> Result<EntityFixtureDefinition<C>, EntityFixtureError> {
        EntityFixtureDefinition::from_config(
            component_name.into(),
            entity_class,
            base_options,
            &self.config,
        )
    }

    pub fn runner(&self, suite_name: impl Into<String>) -> SuiteRunner {
        SuiteRunner::from_config(suite_name, &self.config)
    }
}

pub fn build_entity_fixture_services(
    config: &HarnessConfig,
    runtime_config_repository: Arc<dyn RuntimeConfigRepository>,
) -> EntityFixtureServices {
    let issuer: Arc<dyn ScopedCredentialIssuerRepository> = Arc::new(
        Sha256ScopedCredentialIssuerRepositoryImpl::new(config.credential_ttl),
    );

    build_entity_fixture_services_with_issuer(config, runtime_config_repository, issuer)
}

pub fn build_entity_fixture_services_from_env() -> Result<EntityFixtureServices, EntityFixtureError>
{
    let config = HarnessConfig::from_env()?;

    Ok(build_entity_fixture_services(
        &config,
        Arc::new(EnvRuntimeConfigRepositoryImpl::new()),
    ))
}

pub fn build_entity_fixture_services_with_issuer(
    config: &HarnessConfig,
    runtime_config_repository: Arc<dyn RuntimeConfigRepository>,
    issuer: Arc<dyn ScopedCredentialIssuerRepository>,
) -> EntityFixtureServices {
    let credential_resolver = Arc::new(CredentialResolverImpl::new(issuer));
    let registry = Arc::new(SetupOverrideRegistry::new());
    let binder = Arc::new(ResourceBinder::new(
        registry,
        credential_resolver,
        config.run_suffix.clone(),
    ));

    EntityFixtureServices {
        config: config.clone(),
        runtime_config_repository,
        binder,
    }
}

pub fn build_stale_resource_sweeper(
    config: &HarnessConfig,
    administration_repository: Arc<dyn ResourceAdministrationRepository>,
) -> StaleResourceSweeperImpl {
    StaleResourceSweeperImpl::new(administration_repository, config.run_suffix.clone())
}

pub struct EntityFixtureHandle<C: EntityClass> {
    pub coordinator: Arc<LifecycleCoordinatorImpl<C>>,
    pub suite: Arc<Mutex<FixtureSuiteContext<C::Component>>>,
}

pub fn with_entity<C: EntityClass>(
    runner: &mut SuiteRunner,
    services: &EntityFixtureServices,
    definition: EntityFixtureDefinition<C>,
) -> EntityFixtureHandle<C> {
    let component_name = definition.component_name().clone();
    let coordinator = Arc::new(LifecycleCoordinatorImpl::new(
        definition,
        services.binder.clone(),
        services.runtime_config_repository.clone(),
    ));
    let suite = register_entity_fixture_hooks(runner, &component_name, coordinator.clone());

    EntityFixtureHandle { coordinator, suite }
}
