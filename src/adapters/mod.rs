//! External system integrations
//!
//! - [`azure`] - Azure Resource Manager (member and node resources)
//! - [`cosmosdb`] - Azure Cosmos DB (contract documents)
//! - [`workbook`] - `.xlsx` reading and writing
//! - [`source`] - the [`MetadataSource`](source::MetadataSource) seam over the
//!   two Azure services
//!
//! Adapters isolate external dependencies so the jobs in
//! [`core`](crate::core) can be tested with mock implementations.

pub mod azure;
pub mod cosmosdb;
pub mod source;
pub mod workbook;

pub use source::{AzureMetadataSource, MetadataSource};
