//! Spreadsheet file I/O
//!
//! - [`WorkbookWriter`] writes tables to `.xlsx` with `rust_xlsxwriter`
//! - [`read_workbook`] reads every worksheet back with `calamine`

pub mod reader;
pub mod writer;

pub use reader::read_workbook;
pub use writer::WorkbookWriter;
