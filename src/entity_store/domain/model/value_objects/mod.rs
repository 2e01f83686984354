pub mod credential;
pub mod entity_class_key;
pub mod resource_name;
pub mod row_key;
