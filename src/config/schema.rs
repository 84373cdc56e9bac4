//! Configuration schema types
//!
//! Typed views over the credentials file. [`CollectorConfig`] is what the
//! collect job needs; [`LoggingConfig`] comes from the command line.

use super::credentials::{self as keys, Credentials};
use super::secret::{secret_string, SecretString};
use crate::domain::errors::MetadataError;
use crate::domain::result::Result;
use secrecy::ExposeSecret;
use url::Url;

/// Public Azure cloud management endpoint
pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// Collector configuration
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Azure Resource Manager settings
    pub azure: AzureConfig,

    /// Cosmos DB settings; `None` when any of them is missing or invalid
    pub cosmosdb: Option<CosmosDbConfig>,
}

impl CollectorConfig {
    /// Builds the typed configuration from parsed credentials
    ///
    /// # Errors
    ///
    /// Returns an error if a required Azure key is missing. Missing or invalid
    /// Cosmos DB keys are not an error; contract collection degrades instead.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let azure = AzureConfig::from_credentials(credentials)?;

        let cosmosdb = match CosmosDbConfig::from_credentials(credentials).and_then(|config| {
            config.validate().map_err(MetadataError::Configuration)?;
            Ok(config)
        }) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "Cosmos DB settings incomplete or invalid, contracts will not be collected");
                None
            }
        };

        Ok(Self { azure, cosmosdb })
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.azure.validate()
    }
}

/// Azure Resource Manager configuration
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub blockchain_member_name: String,

    /// Resource Manager base URL
    pub management_endpoint: String,

    /// Service principal tenant; with `client_id` and `client_secret`
    /// selects client-secret authentication over the Azure CLI login
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<SecretString>,
}

impl AzureConfig {
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing required key.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            subscription_id: credentials
                .require(keys::AZURE_SUBSCRIPTION_ID)?
                .to_string(),
            resource_group_name: credentials
                .require(keys::AZURE_RESOURCE_GROUP_NAME)?
                .to_string(),
            blockchain_member_name: credentials
                .require(keys::AZURE_BLOCKCHAIN_MEMBER_NAME)?
                .to_string(),
            management_endpoint: credentials
                .get(keys::AZURE_MANAGEMENT_ENDPOINT)
                .unwrap_or(DEFAULT_MANAGEMENT_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
            tenant_id: credentials
                .get(keys::AZURE_TENANT_ID)
                .map(str::to_string),
            client_id: credentials
                .get(keys::AZURE_CLIENT_ID)
                .map(str::to_string),
            client_secret: credentials
                .get(keys::AZURE_CLIENT_SECRET)
                .map(|s| secret_string(s.to_string())),
        })
    }

    /// Tenant, client id and secret when all three are configured
    pub fn service_principal(&self) -> Option<(&str, &str, &SecretString)> {
        match (&self.tenant_id, &self.client_id, &self.client_secret) {
            (Some(tenant), Some(client), Some(secret)) => {
                Some((tenant.as_str(), client.as_str(), secret))
            }
            _ => None,
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.subscription_id.trim().is_empty() {
            return Err("AZURE_SUBSCRIPTION_ID cannot be empty".to_string());
        }
        if self.resource_group_name.trim().is_empty() {
            return Err("AZURE_RESOURCE_GROUP_NAME cannot be empty".to_string());
        }
        if self.blockchain_member_name.trim().is_empty() {
            return Err("AZURE_BLOCKCHAIN_MEMBER_NAME cannot be empty".to_string());
        }

        let endpoint = Url::parse(&self.management_endpoint).map_err(|e| {
            format!(
                "AZURE_MANAGEMENT_ENDPOINT '{}' is not a valid URL: {e}",
                self.management_endpoint
            )
        })?;
        if !matches!(endpoint.scheme(), "https" | "http") {
            return Err(format!(
                "AZURE_MANAGEMENT_ENDPOINT must be an http(s) URL, got scheme '{}'",
                endpoint.scheme()
            ));
        }

        let partial = [
            self.tenant_id.is_some(),
            self.client_id.is_some(),
            self.client_secret.is_some(),
        ];
        if partial.iter().any(|set| *set) && !partial.iter().all(|set| *set) {
            return Err(
                "AZURE_TENANT_ID, AZURE_CLIENT_ID and AZURE_CLIENT_SECRET must be set together"
                    .to_string(),
            );
        }

        Ok(())
    }
}

/// Cosmos DB configuration for the contract container
#[derive(Debug, Clone)]
pub struct CosmosDbConfig {
    /// Cosmos DB endpoint URL
    pub endpoint: String,

    /// Cosmos DB access key
    /// Stored securely in memory and automatically zeroized on drop
    pub key: SecretString,

    pub database_name: String,
    pub container_name: String,
}

impl CosmosDbConfig {
    /// # Errors
    ///
    /// Returns a configuration error listing every missing Cosmos DB key.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let missing: Vec<&str> = keys::COSMOS_DB_KEYS
            .into_iter()
        .filter(|key| credentials.get(key).is_none())
        .collect();

        if !missing.is_empty() {
            return Err(MetadataError::Configuration(format!(
                "Missing Cosmos DB credentials: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            endpoint: credentials.require(keys::COSMOS_DB_ENDPOINT)?.to_string(),
            key: secret_string(credentials.require(keys::COSMOS_DB_KEY)?.to_string()),
            database_name: credentials
                .require(keys::COSMOS_DB_DATABASE_NAME)?
                .to_string(),
            container_name: credentials
                .require(keys::COSMOS_DB_CONTAINER_NAME)?
                .to_string(),
        })
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if !self.endpoint.starts_with("https://") {
            return Err("COSMOS_DB_ENDPOINT must start with https://".to_string());
        }

        if self.key.expose_secret().is_empty() {
            return Err("COSMOS_DB_KEY cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    pub local_enabled: bool,

    /// Directory for log files
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    pub local_rotation: String,
}

impl LoggingConfig {
    /// Console-only logging
    pub fn console() -> Self {
        Self {
            local_enabled: false,
            local_path: String::new(),
            local_rotation: default_local_rotation(),
        }
    }

    /// Console logging plus daily-rotated JSON files under `dir`
    pub fn with_directory(dir: impl Into<String>) -> Self {
        Self {
            local_enabled: true,
            local_path: dir.into(),
            local_rotation: default_local_rotation(),
        }
    }

    /// # Errors
    ///
    /// Returns an error for an unknown rotation or an empty path with file logging on.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid log rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("Log directory cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::console()
    }
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
