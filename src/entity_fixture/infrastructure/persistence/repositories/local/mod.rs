pub mod env_runtime_config_repository_impl;
pub mod sha256_scoped_credential_issuer_repository_impl;
pub mod static_runtime_config_repository_impl;
