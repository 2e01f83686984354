use serde::Deserialize;

use crate::config::config_error::ConfigError;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default)]
    pub storage: StorageAccountConfig,
    #[serde(default)]
    pub cluster: ClusterConfig,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountConfig {
    pub account_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub root_url: Option<String>,
    pub credentials: Option<ClientCredentials>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientCredentials {
    pub client_id: String,
    pub access_token: String,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let credentials = match (
            read_optional("CLUSTER_CLIENT_ID"),
            read_optional("CLUSTER_ACCESS_TOKEN"),
        ) {
            (Some(client_id), Some(access_token)) => Some(ClientCredentials {
                client_id,
                access_token,
            }),
            _ => None,
        };

        Self {
            storage: StorageAccountConfig {
                account_id: read_optional("STORAGE_ACCOUNT_ID"),
            },
            cluster: ClusterConfig {
                root_url: read_optional("CLUSTER_ROOT_URL"),
                credentials,
            },
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    pub fn require_account_id(&self) -> Result<&str, ConfigError> {
        non_empty(self.storage.account_id.as_deref())
            .ok_or(ConfigError::MissingValue("storage.account_id"))
    }

    pub fn require_root_url(&self) -> Result<&str, ConfigError> {
        non_empty(self.cluster.root_url.as_deref())
            .ok_or(ConfigError::MissingValue("cluster.root_url"))
    }

    pub fn require_client_credentials(&self) -> Result<&ClientCredentials, ConfigError> {
        self.cluster
            .credentials
            .as_ref()
            .filter(|c| !c.client_id.trim().is_empty() && !c.access_token.trim().is_empty())
            .ok_or(ConfigError::MissingValue("cluster.credentials"))
    }
}

fn read_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
