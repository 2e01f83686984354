pub mod in_memory_entity_class_impl;
pub mod in_memory_entity_component_impl;
pub mod in_memory_entity_store;
