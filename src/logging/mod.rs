//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON log files with rotation
//! - `RUST_LOG` filter override
//!
//! # Example
//!
//! ```no_run
//! use abs_metadata::logging::init_logging;
//! use abs_metadata::config::LoggingConfig;
//!
//! let _guard = init_logging("info", &LoggingConfig::console()).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a worksheet that has been added to an output workbook
///
/// # Example
///
/// ```no_run
/// use abs_metadata::log_sheet_written;
///
/// log_sheet_written!("Nodes Metadata", 4, 22);
/// ```
#[macro_export]
macro_rules! log_sheet_written {
    ($sheet:expr, $rows:expr, $columns:expr) => {
        tracing::info!(
            sheet = %$sheet,
            rows = $rows,
            columns = $columns,
            "Worksheet written"
        )
    };
}

/// Log a record set or sheet that fell back to degraded output
///
/// # Example
///
/// ```no_run
/// use abs_metadata::log_source_degraded;
///
/// log_source_degraded!("contract", "Cosmos DB is not configured");
/// ```
#[macro_export]
macro_rules! log_source_degraded {
    ($source:expr, $diagnostic:expr) => {
        tracing::warn!(
            source = %$source,
            diagnostic = %$diagnostic,
            "Continuing with degraded output"
        )
    };
}
