pub mod config_error;
pub mod harness_config;
pub mod runtime_config;
