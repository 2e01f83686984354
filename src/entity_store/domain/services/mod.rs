pub mod entity_class;
pub mod entity_component;
