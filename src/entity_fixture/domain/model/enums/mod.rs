pub mod credential_injection;
pub mod entity_fixture_error;
pub mod fixture_lifecycle_state;
pub mod resource_provisioning;
pub mod storage_mode;
pub mod test_ordering;
