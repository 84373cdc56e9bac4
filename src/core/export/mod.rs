//! Job orchestration and reporting
//!
//! - [`collector`] - the collect job
//! - [`refiner`] - the filter job
//! - [`summary`] - per-sheet reporting shared by both

pub mod collector;
pub mod refiner;
pub mod summary;

pub use collector::{write_collected, CollectedMetadata, Collector};
pub use refiner::{refine_sheets, refine_workbook};
pub use summary::{JobSummary, SheetReport};
