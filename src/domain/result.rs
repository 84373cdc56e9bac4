//! Result type alias
//!
//! Convenience alias using [`MetadataError`] as the error type.

use super::errors::MetadataError;

/// Result type alias for metadata operations
///
/// # Examples
///
/// ```
/// use abs_metadata::domain::result::Result;
/// use abs_metadata::domain::errors::MetadataError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MetadataError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MetadataError>;
