pub mod component_name;
pub mod run_suffix;
