//! Domain error types
//!
//! This module defines the error hierarchy for the metadata tool.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// It wraps adapter-specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Configuration-related errors (credentials file, environment overrides)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Azure Resource Manager errors
    #[error("Resource Manager error: {0}")]
    ResourceManager(#[from] ResourceManagerError),

    /// Cosmos DB-related errors
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// Spreadsheet read/write errors
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Validation errors (malformed records, ragged tables)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Column selection errors raised while filtering a sheet
    #[error("Column selection error: {0}")]
    Selection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Azure Resource Manager errors
///
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum ResourceManagerError {
    /// Failed to reach the management endpoint
    #[error("Failed to connect to Azure Resource Manager: {0}")]
    ConnectionFailed(String),

    /// Invalid request URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body was not the expected shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

/// Cosmos DB-specific errors
///
/// These errors don't expose third-party SDK types.
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Connection settings absent or invalid in the credentials file
    #[error("Cosmos DB is not configured: {0}")]
    NotConfigured(String),

    /// Failed to connect to Cosmos DB
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    /// Failed to query documents
    #[error("Failed to query documents: {0}")]
    QueryFailed(String),
}

/// Spreadsheet errors
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Failed to open or parse an input workbook
    #[error("Failed to open workbook {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// Failed to read a worksheet
    #[error("Failed to read worksheet '{sheet}': {message}")]
    ReadFailed { sheet: String, message: String },

    /// Failed to write a cell, a column width or the sheet name
    #[error("Failed to write worksheet '{sheet}': {message}")]
    WriteFailed { sheet: String, message: String },

    /// Table does not fit inside a worksheet
    #[error("Table too large for worksheet '{sheet}': {message}")]
    TooLarge { sheet: String, message: String },

    /// Failed to save the workbook
    #[error("Failed to save workbook {path}: {message}")]
    SaveFailed { path: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        MetadataError::Serialization(err.to_string())
    }
}
