pub mod local;
pub mod runtime_config_repository;
pub mod scoped_credential_issuer_repository;
