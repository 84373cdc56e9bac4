//! Collect command implementation

use super::print_sheet_reports;
use crate::adapters::AzureMetadataSource;
use crate::config::load_config;
use crate::core::export::Collector;
use clap::Args;

/// Arguments for the collect command
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Path to the credentials file
    #[arg(short, long, default_value = "credentials.txt", env = "ABS_CREDENTIALS")]
    pub credentials: String,

    /// Workbook to write
    #[arg(short, long, default_value = "blockchain_metadata.xlsx")]
    pub output: String,
}

impl CollectArgs {
    /// Execute the collect command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(credentials = %self.credentials, "Starting collect command");

        let config = load_config(&self.credentials)?;
        if config.cosmosdb.is_none() {
            println!("Cosmos DB settings are missing or invalid; contracts will not be collected");
        }

        let source = AzureMetadataSource::new(&config)?;
        let summary = Collector::new(Box::new(source)).execute(&self.output).await?;

        summary.log_summary("collect");
        print_sheet_reports(&summary);
        println!("Metadata has been written to '{}'", self.output);

        Ok(0)
    }
}
