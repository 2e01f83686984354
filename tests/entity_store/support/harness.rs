use std::sync::Arc;

use entity_fixtures::entity_store::infrastructure::persistence::repositories::in_memory::{
    in_memory_entity_class_impl::InMemoryEntityClassImpl,
    in_memory_entity_store::InMemoryEntityStore,
};

pub struct StoreTestHarness {
    pub store: Arc<InMemoryEntityStore>,
    pub entity_class: InMemoryEntityClassImpl,
}

pub fn create_harness(auto_provision_scoped: bool) -> StoreTestHarness {
    let store = Arc::new(InMemoryEntityStore::with_auto_provisioning(
        auto_provision_scoped,
    ));
    let entity_class =
        InMemoryEntityClassImpl::new("Widgets", store.clone()).expect("class key should be valid");

    StoreTestHarness {
        store,
        entity_class,
    }
}
