//! Validate config command implementation
//!
//! Loads the credentials file the way `collect` does and prints a summary
//! with secrets redacted.

use crate::config::{load_config, CollectorConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the credentials file
    #[arg(short, long, default_value = "credentials.txt", env = "ABS_CREDENTIALS")]
    pub credentials: String,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(credentials = %self.credentials, "Validating configuration");

        println!("Validating credentials file: {}", self.credentials);
        println!();

        match load_config(&self.credentials) {
            Ok(config) => {
                println!("Configuration is valid");
                println!();
                for line in summary_lines(&config) {
                    println!("  {line}");
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                println!("Configuration validation failed");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}

/// Human-readable configuration summary; secrets are never shown
fn summary_lines(config: &CollectorConfig) -> Vec<String> {
    let azure = &config.azure;
    let mut lines = vec![
        format!("Subscription: {}", azure.subscription_id),
        format!("Resource Group: {}", azure.resource_group_name),
        format!("Blockchain Member: {}", azure.blockchain_member_name),
        format!("Management Endpoint: {}", azure.management_endpoint),
    ];

    lines.push(match azure.service_principal() {
        Some((tenant_id, client_id, _)) => {
            format!("Authentication: service principal {client_id} (tenant {tenant_id})")
        }
        None => "Authentication: Azure CLI".to_string(),
    });

    match config.cosmosdb {
        Some(ref cosmosdb) => {
            lines.push(format!("Cosmos DB Endpoint: {}", cosmosdb.endpoint));
            lines.push(format!("Cosmos DB Database: {}", cosmosdb.database_name));
            lines.push(format!("Cosmos DB Container: {}", cosmosdb.container_name));
        }
        None => lines.push("Cosmos DB: not configured (contracts skipped)".to_string()),
    }

    lines
}
