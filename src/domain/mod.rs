//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Record`], [`FieldValue`]) for schemaless Azure metadata
//! - **Tables** ([`Table`], [`Column`], [`Sheet`]) as stored in worksheets
//! - **Record kinds** ([`RecordKind`]) deciding column tags and sheet names
//! - **Fail-open outcomes** ([`Outcome`])
//! - **Error types** ([`MetadataError`] and adapter-specific enums)
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, MetadataError>`]. Steps that
//! must not stop a job wrap their result in an [`Outcome`]:
//!
//! ```rust
//! use abs_metadata::domain::{MetadataError, Outcome, Record};
//!
//! let fetched: Result<Vec<Record>, MetadataError> =
//!     Err(MetadataError::Authentication("token expired".to_string()));
//! let records = Outcome::or_degrade(fetched, Vec::new);
//! assert!(records.is_degraded());
//! assert!(records.value().is_empty());
//! ```

pub mod errors;
pub mod kind;
pub mod outcome;
pub mod record;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use errors::{CosmosDbError, MetadataError, ResourceManagerError, WorkbookError};
pub use kind::RecordKind;
pub use outcome::Outcome;
pub use record::{FieldValue, Record};
pub use result::Result;
pub use table::{Column, Sheet, Table};
