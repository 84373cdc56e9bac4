//! Filter job
//!
//! Reads a collected workbook, keeps the base columns whose marker column
//! holds `Y`, and writes the reduced sheets under the same names.

use crate::adapters::workbook::{read_workbook, WorkbookWriter};
use crate::core::export::summary::{JobSummary, SheetReport};
use crate::core::transform::filter_marked_columns;
use crate::domain::{Result, Sheet};
use std::path::Path;
use std::time::Instant;

/// Filter every sheet in `sheets`
///
/// Sheets whose filtering fails are returned unchanged with a diagnostic.
pub fn refine_sheets(sheets: Vec<Sheet>) -> Vec<(Sheet, Option<String>)> {
    sheets
        .into_iter()
        .map(|sheet| {
            let outcome = filter_marked_columns(sheet.table);
            let diagnostic = outcome.diagnostic().map(str::to_string);
            if let Some(ref diagnostic) = diagnostic {
                tracing::warn!(sheet = %sheet.name, diagnostic = %diagnostic, "Sheet left unfiltered");
            }
            (Sheet::new(sheet.name, outcome.into_value()), diagnostic)
        })
        .collect()
}

/// Run the filter job from `input` to `output`
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written. Per-sheet filtering errors are not job errors.
pub fn refine_workbook(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<JobSummary> {
    let start_time = Instant::now();
    let (input, output) = (input.as_ref(), output.as_ref());
    tracing::info!(input = %input.display(), output = %output.display(), "Starting column filtering");

    let sheets = read_workbook(input)?;
    if sheets.is_empty() {
        tracing::warn!(input = %input.display(), "Input workbook has no worksheets");
    }

    let mut writer = WorkbookWriter::new();
    let mut summary = JobSummary::new(output);

    for (sheet, diagnostic) in refine_sheets(sheets) {
        writer.add_sheet(&sheet)?;
        summary.add_sheet(SheetReport::new(sheet.name, &sheet.table, diagnostic));
    }

    writer.save(output)?;
    Ok(summary.with_duration(start_time.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Column, FieldValue, Table};
    use tempfile::TempDir;

    fn marked_sheet(name: &str, marker: FieldValue) -> Sheet {
        let table = Table::from_columns(
            1,
            vec![
                Column::new("id_node", vec![FieldValue::text("n1")]),
                Column::new("id_node_Y", vec![marker]),
            ],
        )
        .unwrap();
        Sheet::new(name, table)
    }

    #[test]
    fn test_refine_sheets_keeps_order_and_names() {
        let refined = refine_sheets(vec![
            marked_sheet("Nodes Metadata", FieldValue::text("Y")),
            marked_sheet("Other", FieldValue::Null),
        ]);

        assert_eq!(refined.len(), 2);
        assert_eq!(refined[0].0.name, "Nodes Metadata");
        assert_eq!(refined[0].0.table.column_names(), vec!["id_node"]);
        assert_eq!(refined[1].0.name, "Other");
        assert!(refined[1].0.table.is_empty());
        assert_eq!(refined[1].0.table.row_count(), 1);
        assert!(refined.iter().all(|(_, diagnostic)| diagnostic.is_none()));
    }

    #[test]
    fn test_refine_sheets_passes_broken_sheet_through() {
        let table = Table::from_columns(
            1,
            vec![Column::new("orphan_Y", vec![FieldValue::text("Y")])],
        )
        .unwrap();

        let refined = refine_sheets(vec![Sheet::new("Broken", table.clone())]);
        assert_eq!(refined[0].0.table, table);
        assert!(refined[0]
            .1
            .as_deref()
            .unwrap()
            .starts_with("Error filtering columns"));
    }

    #[test]
    fn test_refine_workbook_round_trip() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blockchain_metadata.xlsx");
        let output = dir.path().join("filtered_blockchain_metadata.xlsx");

        let mut writer = WorkbookWriter::new();
        writer
            .add_sheet(&marked_sheet("Nodes Metadata", FieldValue::text("Y")))
            .unwrap();
        writer.save(&input).unwrap();

        let summary = refine_workbook(&input, &output).unwrap();
        assert!(summary.is_complete());
        assert_eq!(summary.sheets[0].columns, 1);

        let sheets = read_workbook(&output).unwrap();
        assert_eq!(sheets[0].name, "Nodes Metadata");
        assert_eq!(sheets[0].table.column_names(), vec!["id_node"]);
    }

    #[test]
    fn test_refine_workbook_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = refine_workbook(dir.path().join("absent.xlsx"), dir.path().join("out.xlsx"));
        assert!(result.is_err());
    }
}
