//! Azure Resource Manager access

pub mod auth;
pub mod client;

pub use auth::{AzureTokenSource, TokenSource};
pub use client::ResourceManagerClient;
