pub mod entity_store_error;
