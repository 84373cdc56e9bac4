//! Table transformations
//!
//! - **Tagging** ([`tag_records`]): records → tagged table with `_Y` marker twins
//! - **Selection** ([`filter_marked_columns`]): tagged table → marked base columns only
//! - **Width** ([`column_widths`]): display widths for the worksheet writer

pub mod selection;
pub mod tagging;
pub mod width;

pub use selection::{filter_marked_columns, select_marked_columns};
pub use tagging::{marker_name, tag_records, tagged_name};
pub use width::{column_width, column_widths, WIDTH_MARGIN};

/// Suffix that turns a column name into its marker column name
pub const MARKER_SUFFIX: &str = "_Y";

/// Marker cell text that keeps the base column
pub const SENTINEL: &str = "Y";
