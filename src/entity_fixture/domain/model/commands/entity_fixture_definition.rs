use std::sync::Arc;

use crate::{
    config::harness_config::HarnessConfig,
    entity_fixture::domain::{
        model::{
            enums::{
                credential_injection::CredentialInjection,
                entity_fixture_error::EntityFixtureError,
                resource_provisioning::ResourceProvisioning, storage_mode::StorageMode,
                test_ordering::TestOrdering,
            },
            value_objects::component_name::ComponentName,
        },
        services::cleanup_action::CleanupAction,
    },
    entity_store::domain::{
        model::commands::entity_setup_options::EntitySetupOptions,
        services::entity_class::EntityClass,
    },
};

pub type SkipPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

pub struct EntityFixtureDefinition<C: EntityClass> {
    component_name: ComponentName,
    entity_class: Arc<C>,
    base_options: EntitySetupOptions,
    storage_mode: StorageMode,
    credential_injection: CredentialInjection,
    resource_provisioning: ResourceProvisioning,
    test_ordering: TestOrdering,
    cleanup: Option<Arc<dyn CleanupAction<C::Component>>>,
    skip_predicate: SkipPredicate,
}

impl<C: EntityClass> EntityFixtureDefinition<C> {
    pub fn new(
        component_name: String,
        entity_class: Arc<C>,
        base_options: EntitySetupOptions,
        storage_mode: StorageMode,
    ) -> Result<Self, EntityFixtureError> {
        Ok(Self {
            component_name: ComponentName::new(component_name)?,
            entity_class,
            base_options,
            storage_mode,
            credential_injection: CredentialInjection::default(),
            resource_provisioning: ResourceProvisioning::default(),
            test_ordering: TestOrdering::default(),
            cleanup: None,
            skip_predicate: Arc::new(|| false),
        })
    }

    pub fn from_config(
        component_name: String,
        entity_class: Arc<C>,
        base_options: EntitySetupOptions,
        config: &HarnessConfig,
    ) -> Result<Self, EntityFixtureError> {
        Self::new(component_name, entity_class, base_options, config.storage_mode)
    }

    pub fn with_test_ordering(mut self, test_ordering: TestOrdering) -> Self {
        self.test_ordering = test_ordering;
        self
    }

    pub fn with_credential_injection(mut self, credential_injection: CredentialInjection) -> Self {
        self.credential_injection = credential_injection;
        self
    }

    pub fn with_resource_provisioning(
        mut self,
        resource_provisioning: ResourceProvisioning,
    ) -> Self {
        self.resource_provisioning = resource_provisioning;
        self
    }

    pub fn with_cleanup(mut self, cleanup: Arc<dyn CleanupAction<C::Component>>) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    pub fn with_skip_predicate(
        mut self,
        skip_predicate: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.skip_predicate = Arc::new(skip_predicate);
        self
    }

    pub fn component_name(&self) -> &ComponentName {
        &self.component_name
    }

    pub fn entity_class(&self) -> &Arc<C> {
        &self.entity_class
    }

    pub fn base_options(&self) -> &EntitySetupOptions {
        &self.base_options
    }

    pub fn storage_mode(&self) -> StorageMode {
        self.storage_mode
    }

    pub fn credential_injection(&self) -> CredentialInjection {
        self.credential_injection
    }

    pub fn resource_provisioning(&self) -> ResourceProvisioning {
        self.resource_provisioning
    }

    pub fn test_ordering(&self) -> TestOrdering {
        self.test_ordering
    }

    pub fn cleanup(&self) -> Option<&Arc<dyn CleanupAction<C::Component>>> {
        self.cleanup.as_ref()
    }

    pub fn skipping(&self) -> bool {
        (self.skip_predicate)()
    }
}
