//! CLI command implementations

pub mod collect;
pub mod filter;
pub mod validate;

use crate::core::export::JobSummary;

/// Print one line per sheet, with the diagnostic of degraded sheets
pub(crate) fn print_sheet_reports(summary: &JobSummary) {
    for sheet in &summary.sheets {
        println!(
            "  {}: {} rows, {} columns",
            sheet.name, sheet.rows, sheet.columns
        );
        if let Some(ref diagnostic) = sheet.diagnostic {
            println!("    {diagnostic}");
        }
    }
}
