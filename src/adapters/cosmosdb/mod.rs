//! Azure Cosmos DB integration
//!
//! Read-only access to the container holding smart-contract documents.

pub mod client;

pub use client::{ContractStore, CONTRACT_QUERY};
