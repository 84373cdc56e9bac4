//! Configuration management.
//!
//! The collector reads a plain `KEY=VALUE` credentials file:
//!
//! ```text
//! AZURE_SUBSCRIPTION_ID=00000000-0000-0000-0000-000000000000
//! AZURE_RESOURCE_GROUP_NAME=rg-blockchain
//! AZURE_BLOCKCHAIN_MEMBER_NAME=contosomember
//! COSMOS_DB_ENDPOINT=https://contoso.documents.azure.com:443/
//! COSMOS_DB_KEY=${CONTOSO_COSMOS_KEY}
//! COSMOS_DB_DATABASE_NAME=ledger
//! COSMOS_DB_CONTAINER_NAME=contracts
//! ```
//!
//! - `${VAR_NAME}` values are substituted from the environment
//! - `ABS_<KEY>` environment variables override file entries
//! - Cosmos DB keys are optional; if any is missing or invalid no contracts
//!   are collected
//! - `AZURE_TENANT_ID`, `AZURE_CLIENT_ID` and `AZURE_CLIENT_SECRET` select
//!   service principal authentication, otherwise the Azure CLI login is used
//!
//! ```rust,no_run
//! use abs_metadata::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("credentials.txt")?;
//! println!("Resource group: {}", config.azure.resource_group_name);
//! if let Some(cosmosdb) = &config.cosmosdb {
//!     println!("Contracts container: {}", cosmosdb.container_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use credentials::Credentials;
pub use loader::{load_config, load_credentials};
pub use schema::{AzureConfig, CollectorConfig, CosmosDbConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
