//! Workbook writer
//!
//! Writes [`Table`]s to `.xlsx` worksheets: header row first, one row per
//! record below it, column widths normalized once the data is in place.

use crate::core::transform::column_widths;
use crate::domain::{FieldValue, Result, Sheet, Table, WorkbookError};
use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Excel's cell text limit
const MAX_CELL_CHARS: usize = 32_767;

/// Excel's column width limit, in characters
const MAX_COLUMN_WIDTH: usize = 255;

/// Accumulates worksheets and saves them as one workbook
pub struct WorkbookWriter {
    workbook: Workbook,
    sheet_names: Vec<String>,
}

impl WorkbookWriter {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            sheet_names: Vec::new(),
        }
    }

    /// Adds a worksheet holding `table`
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet name is invalid or duplicated, a cell
    /// cannot be written, or the table exceeds worksheet limits.
    pub fn add_table(&mut self, name: &str, table: &Table) -> Result<()> {
        let write_failed = |e: XlsxError| WorkbookError::WriteFailed {
            sheet: name.to_string(),
            message: e.to_string(),
        };

        let mut worksheet = Worksheet::new();
        worksheet.set_name(name).map_err(write_failed)?;

        write_table(&mut worksheet, name, table)?;
        apply_column_widths(&mut worksheet, name, table)?;

        self.workbook.push_worksheet(worksheet);
        self.sheet_names.push(name.to_string());

        crate::log_sheet_written!(name, table.row_count(), table.column_count());
        Ok(())
    }

    /// Adds a named sheet
    ///
    /// # Errors
    ///
    /// See [`WorkbookWriter::add_table`].
    pub fn add_sheet(&mut self, sheet: &Sheet) -> Result<()> {
        self.add_table(&sheet.name, &sheet.table)
    }

    /// Names of the sheets added so far
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Saves the workbook, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.workbook.save(path).map_err(|e| WorkbookError::SaveFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(
            path = %path.display(),
            sheets = self.sheet_names.len(),
            "Workbook saved"
        );
        Ok(())
    }
}

impl Default for WorkbookWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_table(worksheet: &mut Worksheet, name: &str, table: &Table) -> Result<()> {
    let write_failed = |e: XlsxError| WorkbookError::WriteFailed {
        sheet: name.to_string(),
        message: e.to_string(),
    };

    for (col_index, column) in table.columns().iter().enumerate() {
        let col = col_num(name, col_index)?;
        worksheet
            .write_string(0, col, column.name.as_str())
            .map_err(write_failed)?;

        for (row_index, value) in column.values.iter().enumerate() {
            let row = row_num(name, row_index + 1)?;
            match value {
                FieldValue::Text(s) | FieldValue::Nested(s) => {
                    worksheet
                        .write_string(row, col, cell_text(name, &column.name, s))
                        .map_err(write_failed)?;
                }
                FieldValue::Number(n) => {
                    worksheet.write_number(row, col, *n).map_err(write_failed)?;
                }
                FieldValue::Bool(b) => {
                    worksheet.write_boolean(row, col, *b).map_err(write_failed)?;
                }
                FieldValue::Null => {}
            }
        }
    }

    Ok(())
}

fn apply_column_widths(worksheet: &mut Worksheet, name: &str, table: &Table) -> Result<()> {
    for (col_index, width) in column_widths(table).into_iter().enumerate() {
        let col = col_num(name, col_index)?;
        worksheet
            .set_column_width(col, width.min(MAX_COLUMN_WIDTH) as f64)
            .map_err(|e| WorkbookError::WriteFailed {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;
    }
    Ok(())
}

/// Cell text, truncated to what Excel accepts
fn cell_text<'a>(sheet: &str, column: &str, text: &'a str) -> &'a str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            tracing::warn!(
                sheet = %sheet,
                column = %column,
                chars = text.chars().count(),
                "Cell text exceeds the Excel limit and was truncated"
            );
            &text[..cut]
        }
        None => text,
    }
}

fn col_num(sheet: &str, index: usize) -> Result<ColNum> {
    ColNum::try_from(index).map_err(|_| {
        WorkbookError::TooLarge {
            sheet: sheet.to_string(),
            message: format!("column index {index} out of range"),
        }
        .into()
    })
}

fn row_num(sheet: &str, index: usize) -> Result<RowNum> {
    RowNum::try_from(index).map_err(|_| {
        WorkbookError::TooLarge {
            sheet: sheet.to_string(),
            message: format!("row index {index} out of range"),
        }
        .into()
    })
}
