pub mod in_memory;
pub mod resource_administration_repository;
