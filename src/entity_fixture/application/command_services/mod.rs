pub mod erase_all_rows_cleanup_action_impl;
pub mod lifecycle_coordinator_impl;
pub mod resource_binder;
pub mod setup_override_registry;
pub mod stale_resource_sweeper_impl;
