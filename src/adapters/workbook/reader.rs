//! Workbook reader
//!
//! Reads every worksheet of an `.xlsx` file into a [`Table`], treating the
//! first sheet row as the header.

use crate::domain::{Column, FieldValue, Result, Sheet, Table, WorkbookError};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Reads all worksheets, in workbook order
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a worksheet cannot be read.
pub fn read_workbook(path: impl AsRef<Path>) -> Result<Vec<Sheet>> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| {
        WorkbookError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| WorkbookError::ReadFailed {
                sheet: name.clone(),
                message: e.to_string(),
            })?;

        let table = range_to_table(&range)?;
        tracing::debug!(
            sheet = %name,
            rows = table.row_count(),
            columns = table.column_count(),
            "Worksheet read"
        );
        sheets.push(Sheet::new(name, table));
    }

    Ok(sheets)
}

/// Converts a cell range to a table; sheet row 1 holds the headers
///
/// Positions are absolute, so leading blank rows and columns that calamine
/// trims from the range still count as sheet rows and `Unnamed: {i}` columns.
fn range_to_table(range: &Range<Data>) -> Result<Table> {
    let Some((last_row, last_column)) = range.end() else {
        return Ok(Table::new(0));
    };

    let mut table = Table::new(last_row as usize);
    for column in 0..=last_column {
        let name = match range.get_value((0, column)) {
            None | Some(Data::Empty) => format!("Unnamed: {column}"),
            Some(other) => other.to_string(),
        };
        let values = (1..=last_row)
            .map(|row| range.get_value((row, column)).map_or(FieldValue::Null, cell_value))
            .collect();
        table.push_column(Column::new(name, values))?;
    }

    Ok(table)
}

fn cell_value(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty | Data::Error(_) => FieldValue::Null,
        Data::String(s) => FieldValue::Text(s.clone()),
        Data::Int(i) => FieldValue::Number(*i as f64),
        Data::Float(f) => FieldValue::Number(*f),
        Data::Bool(b) => FieldValue::Bool(*b),
        other => FieldValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_to_table() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("id_node".to_string()));
        range.set_value((0, 1), Data::String("id_node_Y".to_string()));
        range.set_value((1, 0), Data::String("n1".to_string()));
        range.set_value((1, 1), Data::String("Y".to_string()));
        range.set_value((2, 0), Data::Float(2.0));

        let table = range_to_table(&range).unwrap();
        assert_eq!(table.column_names(), vec!["id_node", "id_node_Y"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("id_node_Y").unwrap().values,
            vec![FieldValue::text("Y"), FieldValue::Null]
        );
        assert_eq!(
            table.column("id_node").unwrap().values,
            vec![FieldValue::text("n1"), FieldValue::Number(2.0)]
        );
    }

    #[test]
    fn test_blank_header_named() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 1));
        range.set_value((0, 1), Data::String("status".to_string()));

        let table = range_to_table(&range).unwrap();
        assert_eq!(table.column_names(), vec!["Unnamed: 0", "status"]);
    }

    #[test]
    fn test_range_offset_keeps_sheet_positions() {
        // Column A and row 3 are blank, so the range starts at B1
        let mut range: Range<Data> = Range::new((0, 1), (3, 3));
        range.set_value((0, 1), Data::String("id_node".to_string()));
        range.set_value((0, 3), Data::String("id_node_Y".to_string()));
        range.set_value((1, 1), Data::String("n1".to_string()));
        range.set_value((1, 3), Data::String("Y".to_string()));
        range.set_value((3, 1), Data::String("n3".to_string()));

        let table = range_to_table(&range).unwrap();
        assert_eq!(
            table.column_names(),
            vec!["Unnamed: 0", "id_node", "Unnamed: 2", "id_node_Y"]
        );
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column("Unnamed: 0").unwrap().values,
            vec![FieldValue::Null; 3]
        );
        assert_eq!(
            table.column("id_node").unwrap().values,
            vec![FieldValue::text("n1"), FieldValue::Null, FieldValue::text("n3")]
        );
        assert_eq!(
            table.column("id_node_Y").unwrap().values,
            vec![FieldValue::text("Y"), FieldValue::Null, FieldValue::Null]
        );
    }

    #[test]
    fn test_blank_leading_rows_keep_header_row() {
        let mut range: Range<Data> = Range::new((1, 0), (1, 0));
        range.set_value((1, 0), Data::String("orphan".to_string()));

        let table = range_to_table(&range).unwrap();
        assert_eq!(table.column_names(), vec!["Unnamed: 0"]);
        assert_eq!(
            table.column("Unnamed: 0").unwrap().values,
            vec![FieldValue::text("orphan")]
        );
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        let table = range_to_table(&range).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
