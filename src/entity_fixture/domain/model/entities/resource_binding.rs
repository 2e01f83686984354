use std::sync::Arc;

use crate::{
    entity_fixture::domain::model::{
        enums::{
            credential_injection::CredentialInjection,
            entity_fixture_error::EntityFixtureError,
            fixture_lifecycle_state::FixtureLifecycleState, storage_mode::StorageMode,
        },
        value_objects::component_name::ComponentName,
    },
    entity_store::domain::{
        model::value_objects::resource_name::ResourceName,
        services::entity_component::EntityComponent,
    },
};

pub struct ResourceBinding<T: EntityComponent> {
    component_name: ComponentName,
    component: Arc<T>,
    storage_mode: StorageMode,
    credential_injection: CredentialInjection,
    state: FixtureLifecycleState,
}

impl<T: EntityComponent> ResourceBinding<T> {
    pub fn new_bound(
        component_name: ComponentName,
        component: Arc<T>,
        storage_mode: StorageMode,
        credential_injection: CredentialInjection,
    ) -> Self {
        Self {
            component_name,
            component,
            storage_mode,
            credential_injection,
            state: FixtureLifecycleState::Bound,
        }
    }

    pub fn mark_clean(&mut self) -> Result<(), EntityFixtureError> {
        match self.state {
            FixtureLifecycleState::Bound
            | FixtureLifecycleState::Clean
            | FixtureLifecycleState::Dirty => {
                self.state = FixtureLifecycleState::Clean;
                Ok(())
            }
            other => Err(EntityFixtureError::InvalidLifecycleTransition(other.as_str())),
        }
    }

    pub fn mark_dirty(&mut self) -> Result<(), EntityFixtureError> {
        match self.state {
            FixtureLifecycleState::Clean | FixtureLifecycleState::Dirty => {
                self.state = FixtureLifecycleState::Dirty;
                Ok(())
            }
            other => Err(EntityFixtureError::InvalidLifecycleTransition(other.as_str())),
        }
    }

    pub fn mark_torn_down(&mut self) -> Result<(), EntityFixtureError> {
        match self.state {
            FixtureLifecycleState::Bound
            | FixtureLifecycleState::Clean
            | FixtureLifecycleState::Dirty => {
                self.state = FixtureLifecycleState::TornDown;
                Ok(())
            }
            other => Err(EntityFixtureError::InvalidLifecycleTransition(other.as_str())),
        }
    }

    pub fn component_name(&self) -> &ComponentName {
        &self.component_name
    }

    pub fn component(&self) -> &Arc<T> {
        &self.component
    }

    pub fn resource_name(&self) -> &ResourceName {
        self.component.resource_name()
    }

    pub fn storage_mode(&self) -> StorageMode {
        self.storage_mode
    }

    pub fn credential_injection_skipped(&self) -> bool {
        self.storage_mode == StorageMode::Shared && self.credential_injection.is_skipped()
    }

    pub fn state(&self) -> FixtureLifecycleState {
        self.state
    }
}

pub struct FixtureSuiteContext<T: EntityComponent> {
    binding: Option<ResourceBinding<T>>,
    torn_down: bool,
}

impl<T: EntityComponent> FixtureSuiteContext<T> {
    pub fn new() -> Self {
        Self {
            binding: None,
            torn_down: false,
        }
    }

    pub fn bind(&mut self, binding: ResourceBinding<T>) {
        self.binding = Some(binding);
        self.torn_down = false;
    }

    pub fn binding(&self) -> Option<&ResourceBinding<T>> {
        self.binding.as_ref()
    }

    pub fn binding_mut(&mut self) -> Option<&mut ResourceBinding<T>> {
        self.binding.as_mut()
    }

    pub fn release(&mut self) -> Option<ResourceBinding<T>> {
        self.torn_down = true;
        self.binding.take()
    }

    pub fn state(&self) -> FixtureLifecycleState {
        match &self.binding {
            Some(binding) => binding.state(),
            None if self.torn_down => FixtureLifecycleState::TornDown,
            None => FixtureLifecycleState::Unbound,
        }
    }
}

impl<T: EntityComponent> Default for FixtureSuiteContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
