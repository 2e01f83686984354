use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use tracing::warn;

use crate::{
    entity_fixture::domain::model::{
        entities::setup_override::SetupOverride, enums::entity_fixture_error::EntityFixtureError,
    },
    entity_store::domain::{
        model::{
            commands::entity_setup_options::EntitySetupOptions,
            value_objects::entity_class_key::EntityClassKey,
        },
        services::entity_class::EntityClass,
    },
};

pub struct SetupOverrideRegistry {
    overrides: Mutex<HashMap<EntityClassKey, SetupOverride>>,
}

impl SetupOverrideRegistry {
    pub fn new() -> Self {
        Self {
            overrides: Mutex::new(HashMap::new()),
        }
    }

    pub async fn install(&self, class_key: EntityClassKey, setup_override: SetupOverride) {
        let mut guard = self.overrides.lock().await;
        if guard.insert(class_key.clone(), setup_override).is_some() {
            warn!(
                entity_class = %class_key,
                "replacing a setup override that was never consumed"
            );
        }
    }

    pub async fn take(&self, class_key: &EntityClassKey) -> Option<SetupOverride> {
        self.overrides.lock().await.remove(class_key)
    }

    pub async fn is_installed(&self, class_key: &EntityClassKey) -> bool {
        self.overrides.lock().await.contains_key(class_key)
    }

    pub async fn dispatch_setup<C: EntityClass>(
        &self,
        entity_class: &C,
        options: EntitySetupOptions,
    ) -> Result<Arc<C::Component>, EntityFixtureError> {
        let options = match self.take(&entity_class.class_key()).await {
            Some(setup_override) => setup_override.apply(options).await?,
            None => options,
        };

        entity_class
            .setup(options)
            .await
            .map_err(EntityFixtureError::Binding)
    }
}

impl Default for SetupOverrideRegistry {
    fn default() -> Self {
        Self::new()
    }
}
