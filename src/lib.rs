pub mod config;
pub mod entity_fixture;
pub mod entity_store;
pub mod shared;
pub mod suite_runner;
