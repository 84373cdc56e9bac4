//! Bearer tokens for Azure Resource Manager
//!
//! [`TokenSource`] is the seam between the HTTP client and Azure AD. The
//! production implementation, [`AzureTokenSource`], uses a service principal
//! when one is configured and the Azure CLI login otherwise.

use crate::config::AzureConfig;
use crate::domain::{MetadataError, Result};
use async_trait::async_trait;
use azure_core::credentials::{Secret, TokenCredential};
use azure_identity::{AzureCliCredential, ClientSecretCredential};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Something that can hand out a bearer token for each request
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns a bearer token valid for the management API
    ///
    /// # Errors
    ///
    /// Returns an authentication error if no token can be obtained.
    async fn bearer_token(&self) -> Result<String>;
}

/// Azure AD token source
pub struct AzureTokenSource {
    credential: Arc<dyn TokenCredential>,
    scope: String,
}

impl AzureTokenSource {
    /// Picks the credential from configuration
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the credential cannot be created.
    pub fn from_config(config: &AzureConfig) -> Result<Self> {
        let credential: Arc<dyn TokenCredential> = match config.service_principal() {
            Some((tenant_id, client_id, client_secret)) => {
                tracing::debug!(tenant_id = %tenant_id, client_id = %client_id, "Using service principal credential");
                let secret_str: String = client_secret.expose_secret().clone().into();
                let credential = ClientSecretCredential::new(
                    tenant_id,
                    client_id.to_string(),
                    Secret::new(secret_str),
                    None,
                )
                .map_err(|e| {
                    MetadataError::Authentication(format!(
                        "Failed to create client secret credential: {e}"
                    ))
                })?;
                credential as Arc<dyn TokenCredential>
            }
            None => {
                tracing::debug!("Using Azure CLI credential");
                let credential = AzureCliCredential::new(None).map_err(|e| {
                    MetadataError::Authentication(format!(
                        "Failed to create Azure CLI credential: {e}"
                    ))
                })?;
                credential as Arc<dyn TokenCredential>
            }
        };

        Ok(Self {
            credential,
            scope: management_scope(&config.management_endpoint),
        })
    }
}

#[async_trait]
impl TokenSource for AzureTokenSource {
    async fn bearer_token(&self) -> Result<String> {
        let token = self
            .credential
            .get_token(&[self.scope.as_str()], None)
            .await
            .map_err(|e| {
                MetadataError::Authentication(format!("Failed to acquire Azure AD token: {e}"))
            })?;

        Ok(token.token.secret().to_string())
    }
}

/// `{endpoint}/.default`
pub fn management_scope(endpoint: &str) -> String {
    format!("{}/.default", endpoint.trim_end_matches('/'))
}
