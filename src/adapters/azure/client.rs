//! Azure Resource Manager client
//!
//! Two read-only calls against the management REST API: the blockchain
//! member resource and the node resources in its resource group.

use super::auth::TokenSource;
use crate::config::AzureConfig;
use crate::domain::{MetadataError, ResourceManagerError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// API version of the `Microsoft.Blockchain` provider
pub const BLOCKCHAIN_API_VERSION: &str = "2018-06-01-preview";

/// API version of the generic resource listing
pub const RESOURCES_API_VERSION: &str = "2021-04-01";

const BLOCKCHAIN_PROVIDER: &str = "Microsoft.Blockchain";
const NODE_RESOURCE_TYPE: &str = "Microsoft.Blockchain/blockchainNodes";

/// One page of a resource listing
#[derive(Debug, Deserialize)]
struct ResourceList {
    #[serde(default)]
    value: Vec<Value>,

    #[serde(rename = "nextLink", default)]
    next_link: Option<String>,
}

/// Client for the Azure management API
pub struct ResourceManagerClient {
    http: reqwest::Client,
    base_url: Url,
    config: AzureConfig,
    tokens: Arc<dyn TokenSource>,
}

impl ResourceManagerClient {
    /// Creates a client for the configured subscription and resource group
    ///
    /// # Errors
    ///
    /// Returns an error if the management endpoint is not a valid base URL
    /// or the HTTP client cannot be built.
    pub fn new(config: AzureConfig, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let base_url = Url::parse(&config.management_endpoint).map_err(|e| {
            ResourceManagerError::InvalidUrl(format!("{}: {e}", config.management_endpoint))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ResourceManagerError::InvalidUrl(config.management_endpoint.clone()).into());
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("abs-metadata/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                MetadataError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url,
            config,
            tokens,
        })
    }

    /// URL of the blockchain member resource
    pub fn member_url(&self) -> Result<Url> {
        let mut url = self.resource_group_url(&[
            "providers",
            BLOCKCHAIN_PROVIDER,
            "blockchainMembers",
            self.config.blockchain_member_name.as_str(),
        ])?;
        url.query_pairs_mut()
            .append_pair("api-version", BLOCKCHAIN_API_VERSION);
        Ok(url)
    }

    /// URL listing the member's nodes in the resource group
    pub fn nodes_url(&self) -> Result<Url> {
        let mut url = self.resource_group_url(&["resources"])?;
        url.query_pairs_mut()
            .append_pair("$filter", &node_filter(&self.config.blockchain_member_name))
            .append_pair("api-version", RESOURCES_API_VERSION);
        Ok(url)
    }

    /// Fetches the blockchain member resource
    ///
    /// # Errors
    ///
    /// Returns an error if the token, the request, or the response fails.
    pub async fn get_blockchain_member(&self) -> Result<Value> {
        let url = self.member_url()?;
        tracing::info!(member = %self.config.blockchain_member_name, "Fetching blockchain member metadata");
        self.get_json(url).await
    }

    /// Lists the blockchain node resources whose names contain the member name
    ///
    /// Only the first page is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the token, the request, or the response fails.
    pub async fn list_blockchain_nodes(&self) -> Result<Vec<Value>> {
        let url = self.nodes_url()?;
        tracing::info!(
            resource_group = %self.config.resource_group_name,
            "Listing blockchain nodes"
        );

        let body = self.get_json(url).await?;
        let list: ResourceList = serde_json::from_value(body).map_err(|e| {
            ResourceManagerError::InvalidResponse(format!("Unexpected resource list: {e}"))
        })?;

        if list.next_link.is_some() {
            tracing::warn!(
                fetched = list.value.len(),
                "More blockchain nodes are available; only the first page was collected"
            );
        }

        Ok(list.value)
    }

    fn resource_group_url(&self, tail: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ResourceManagerError::InvalidUrl(self.config.management_endpoint.clone())
            })?;
            segments
                .pop_if_empty()
                .extend([
                    "subscriptions",
                    self.config.subscription_id.as_str(),
                    "resourceGroups",
                    self.config.resource_group_name.as_str(),
                ])
                .extend(tail);
        }
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        let token = self.tokens.bearer_token().await?;

        tracing::debug!(path = %url.path(), "GET");
        let response = self
            .http
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ResourceManagerError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response.json::<Value>().await.map_err(|e| {
                ResourceManagerError::InvalidResponse(format!("Body is not JSON: {e}")).into()
            });
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::debug!(status = %status, body = %message, "Resource Manager request failed");

        let error = match status.as_u16() {
            404 => ResourceManagerError::NotFound(url.path().to_string()),
            code @ 400..=499 => ResourceManagerError::ClientError {
                status: code,
                message,
            },
            code => ResourceManagerError::ServerError {
                status: code,
                message,
            },
        };
        Err(error.into())
    }
}

/// OData filter selecting the member's nodes
fn node_filter(member_name: &str) -> String {
    format!(
        "resourceType eq '{NODE_RESOURCE_TYPE}' and substringof('{}', name)",
        member_name.replace('\'', "''")
    )
}
