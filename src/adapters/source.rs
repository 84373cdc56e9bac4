//! Metadata sources
//!
//! [`MetadataSource`] is what the collect job reads from. Each fetch fails
//! independently so the job can degrade one sheet without losing the others.

use super::azure::{AzureTokenSource, ResourceManagerClient, TokenSource};
use super::cosmosdb::ContractStore;
use crate::config::{CollectorConfig, CosmosDbConfig};
use crate::domain::{CosmosDbError, Record, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Origin of the member, node and contract records
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// The blockchain member resource, as one record
    async fn fetch_member(&self) -> Result<Record>;

    /// The node resources belonging to the member
    async fn fetch_nodes(&self) -> Result<Vec<Record>>;

    /// The member's contract documents
    async fn fetch_contracts(&self) -> Result<Vec<Record>>;
}

/// Live source: Resource Manager for member and nodes, Cosmos DB for contracts
pub struct AzureMetadataSource {
    resources: ResourceManagerClient,
    cosmosdb: Option<CosmosDbConfig>,
    member_name: String,
}

impl AzureMetadataSource {
    /// # Errors
    ///
    /// Returns an error if the credential or HTTP client cannot be created.
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let tokens = Arc::new(AzureTokenSource::from_config(&config.azure)?);
        Self::with_token_source(config, tokens)
    }

    /// Same as [`new`](Self::new) with bearer tokens from `tokens`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_token_source(
        config: &CollectorConfig,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self> {
        let resources = ResourceManagerClient::new(config.azure.clone(), tokens)?;

        Ok(Self {
            resources,
            cosmosdb: config.cosmosdb.clone(),
            member_name: config.azure.blockchain_member_name.clone(),
        })
    }
}

#[async_trait]
impl MetadataSource for AzureMetadataSource {
    async fn fetch_member(&self) -> Result<Record> {
        let member = self.resources.get_blockchain_member().await?;
        Record::from_json(&member)
    }

    async fn fetch_nodes(&self) -> Result<Vec<Record>> {
        let nodes = self.resources.list_blockchain_nodes().await?;
        to_records(&nodes)
    }

    async fn fetch_contracts(&self) -> Result<Vec<Record>> {
        let config = self.cosmosdb.clone().ok_or_else(|| {
            CosmosDbError::NotConfigured(
                "connection settings missing or invalid in credentials".to_string(),
            )
        })?;
        let store = ContractStore::new(config)?;
        let documents = store.query_contracts(&self.member_name).await?;
        to_records(&documents)
    }
}

fn to_records(values: &[Value]) -> Result<Vec<Record>> {
    values.iter().map(Record::from_json).collect()
}
