//! Cosmos DB client for contract documents

use crate::config::CosmosDbConfig;
use crate::domain::{CosmosDbError, Result};
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::ContainerClient;
use azure_data_cosmos::{CosmosClient, CosmosClientOptions, Query};
use futures::stream::StreamExt;
use serde_json::Value;

/// Selects every contract document belonging to one blockchain member
pub const CONTRACT_QUERY: &str = "SELECT * FROM c WHERE c.blockchain_member = @blockchain_member";

/// Contract document store
///
/// Wraps the configured container. Queries span all partitions.
pub struct ContractStore {
    container: ContainerClient,
    config: CosmosDbConfig,
}

impl ContractStore {
    /// Create a store for the configured account, database and container
    ///
    /// No request is made until [`ContractStore::query_contracts`].
    ///
    /// # Errors
    ///
    /// Returns an error if the Cosmos client cannot be created.
    pub fn new(config: CosmosDbConfig) -> Result<Self> {
        use secrecy::ExposeSecret;

        let key_str: String = config.key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&config.endpoint, key, options).map_err(|e| {
            CosmosDbError::ConnectionFailed(format!("Failed to create Cosmos client: {e}"))
        })?;

        let container = client
            .database_client(&config.database_name)
            .container_client(&config.container_name);

        Ok(Self { container, config })
    }

    /// Fetch all contract documents whose `blockchain_member` equals `member`
    ///
    /// The member name is bound as a query parameter, never spliced into the
    /// query text.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be created or any page fails.
    pub async fn query_contracts(&self, member: &str) -> Result<Vec<Value>> {
        tracing::info!(
            database = %self.config.database_name,
            container = %self.config.container_name,
            member = %member,
            "Querying contract documents"
        );

        let query = Query::from(CONTRACT_QUERY)
            .with_parameter("@blockchain_member", member)
            .map_err(|e| {
                CosmosDbError::QueryFailed(format!("Failed to bind query parameter: {e}"))
            })?;

        let mut pager = self
            .container
            .query_items::<Value>(query, (), None)
            .map_err(|e| CosmosDbError::QueryFailed(format!("Failed to create query: {e}")))?;

        let mut documents = Vec::new();
        while let Some(item) = pager.next().await {
            match item {
                Ok(doc) => documents.push(doc),
                Err(e) => {
                    return Err(CosmosDbError::QueryFailed(format!(
                        "Failed to fetch contract documents: {e}"
                    ))
                    .into());
                }
            }
        }

        tracing::debug!(count = documents.len(), "Contract documents fetched");
        Ok(documents)
    }
}
