//! Core business logic
//!
//! # Modules
//!
//! - [`transform`] - tagging, column filtering and width normalization
//! - [`export`] - the collect and filter jobs, and their summaries
//!
//! # Workflow
//!
//! 1. **Collect**: fetch member, node and contract records
//! 2. **Tag**: rename fields per kind and add `_Y` marker twins
//! 3. **Write**: one worksheet per record set
//! 4. **Edit**: an operator sets `Y` in the marker cells of columns to keep
//! 5. **Filter**: keep the marked base columns and write a second workbook
//!
//! # Example
//!
//! ```rust,no_run
//! use abs_metadata::adapters::AzureMetadataSource;
//! use abs_metadata::config::load_config;
//! use abs_metadata::core::export::{refine_workbook, Collector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("credentials.txt")?;
//! let source = AzureMetadataSource::new(&config)?;
//!
//! let summary = Collector::new(Box::new(source))
//!     .execute("blockchain_metadata.xlsx")
//!     .await?;
//! println!("Degraded sheets: {}", summary.degraded_count());
//!
//! refine_workbook("blockchain_metadata.xlsx", "filtered_blockchain_metadata.xlsx")?;
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
