use std::time::Duration;

use crate::{
    config::config_error::ConfigError,
    entity_fixture::domain::model::{
        enums::storage_mode::StorageMode, value_objects::run_suffix::RunSuffix,
    },
};

const DEFAULT_HOOK_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_CREDENTIAL_TTL_SECONDS: u64 = 3_600;

#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub storage_mode: StorageMode,
    pub run_suffix: RunSuffix,
    pub hook_timeout: Duration,
    pub credential_ttl: Duration,
}

impl HarnessConfig {
    pub fn new(storage_mode: StorageMode, run_suffix: RunSuffix) -> Self {
        Self {
            storage_mode,
            run_suffix,
            hook_timeout: Duration::from_millis(DEFAULT_HOOK_TIMEOUT_MS),
            credential_ttl: Duration::from_secs(DEFAULT_CREDENTIAL_TTL_SECONDS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw_mode =
            std::env::var("ENTITY_FIXTURE_MODE").unwrap_or_else(|_| "isolated".to_string());
        let storage_mode =
            raw_mode
                .parse::<StorageMode>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "ENTITY_FIXTURE_MODE".to_string(),
                    value: raw_mode.clone(),
                })?;

        Ok(Self {
            storage_mode,
            run_suffix: RunSuffix::for_process(),
            hook_timeout: Duration::from_millis(read_u64(
                "ENTITY_FIXTURE_HOOK_TIMEOUT_MS",
                DEFAULT_HOOK_TIMEOUT_MS,
            )?),
            credential_ttl: Duration::from_secs(read_u64(
                "ENTITY_FIXTURE_CREDENTIAL_TTL_SECONDS",
                DEFAULT_CREDENTIAL_TTL_SECONDS,
            )?),
        })
    }
}

fn read_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
