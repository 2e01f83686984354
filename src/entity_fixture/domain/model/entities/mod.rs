pub mod resource_binding;
pub mod setup_override;
