pub mod entity_setup_options;
