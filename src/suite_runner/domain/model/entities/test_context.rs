use std::{any::Any, collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

type SharedComponent = Arc<dyn Any + Send + Sync>;

#[derive(Clone, Default)]
pub struct TestContext {
    components: Arc<RwLock<HashMap<String, SharedComponent>>>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register<T: Any + Send + Sync>(&self, name: &str, component: Arc<T>) {
        self.components
            .write()
            .await
            .insert(name.to_string(), component);
    }

    pub async fn component<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        let guard = self.components.read().await;
        guard
            .get(name)
            .cloned()
            .and_then(|component| component.downcast::<T>().ok())
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.components.read().await.contains_key(name)
    }

    pub async fn remove(&self, name: &str) -> bool {
        self.components.write().await.remove(name).is_some()
    }

    pub async fn names(&self) -> Vec<String> {
        let mut names = self
            .components
            .read()
            .await
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}
