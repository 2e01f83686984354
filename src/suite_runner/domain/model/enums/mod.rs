pub mod hook_phase;
pub mod suite_failure;
