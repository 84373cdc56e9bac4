//! Filter command implementation

use super::print_sheet_reports;
use crate::core::export::refine_workbook;
use clap::Args;

/// Arguments for the filter command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Collected workbook, with `Y` set in the marker columns to keep
    #[arg(short, long, default_value = "blockchain_metadata.xlsx")]
    pub input: String,

    /// Workbook to write
    #[arg(short, long, default_value = "filtered_blockchain_metadata.xlsx")]
    pub output: String,
}

impl FilterArgs {
    /// Execute the filter command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting filter command");

        let summary = refine_workbook(&self.input, &self.output)?;

        summary.log_summary("filter");
        print_sheet_reports(&summary);
        println!("Filtered data has been written to '{}'", self.output);

        Ok(0)
    }
}
