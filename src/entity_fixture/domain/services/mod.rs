pub mod cleanup_action;
pub mod credential_resolver;
pub mod lifecycle_coordinator;
pub mod stale_resource_sweeper;
