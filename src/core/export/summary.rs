//! Job summary and reporting
//!
//! Both jobs report one [`SheetReport`] per worksheet they wrote.

use crate::domain::Table;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What was written to one worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    /// Worksheet name
    pub name: String,

    /// Data rows, excluding the header
    pub rows: usize,

    pub columns: usize,

    /// Set when the sheet holds fallback data
    pub diagnostic: Option<String>,
}

impl SheetReport {
    /// Create a report for `table` written under `name`
    pub fn new(name: impl Into<String>, table: &Table, diagnostic: Option<String>) -> Self {
        Self {
            name: name.into(),
            rows: table.row_count(),
            columns: table.column_count(),
            diagnostic,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Summary of a collect or filter run
#[derive(Debug, Clone)]
pub struct JobSummary {
    /// Workbook that was written
    pub output: PathBuf,

    /// Sheets in workbook order
    pub sheets: Vec<SheetReport>,

    /// Duration of the job
    pub duration: Duration,
}

impl JobSummary {
    /// Create an empty summary for a job writing to `output`
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            sheets: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn add_sheet(&mut self, report: SheetReport) {
        self.sheets.push(report);
    }

    /// Look up a sheet report by name
    pub fn sheet(&self, name: &str) -> Option<&SheetReport> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    /// Number of sheets holding fallback data
    pub fn degraded_count(&self) -> usize {
        self.sheets.iter().filter(|sheet| sheet.is_degraded()).count()
    }

    /// Check if every sheet was produced without falling back
    pub fn is_complete(&self) -> bool {
        self.degraded_count() == 0
    }

    /// Log the summary
    pub fn log_summary(&self, job: &str) {
        tracing::info!(
            job = %job,
            output = %self.output.display(),
            sheets = self.sheets.len(),
            degraded = self.degraded_count(),
            duration_ms = self.duration.as_millis() as u64,
            "Job completed"
        );

        for sheet in &self.sheets {
            match &sheet.diagnostic {
                Some(diagnostic) => tracing::warn!(
                    sheet = %sheet.name,
                    rows = sheet.rows,
                    columns = sheet.columns,
                    diagnostic = %diagnostic,
                    "Sheet written with fallback data"
                ),
                None => tracing::debug!(
                    sheet = %sheet.name,
                    rows = sheet.rows,
                    columns = sheet.columns,
                    "Sheet written"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Column, FieldValue};

    fn table() -> Table {
        Table::from_columns(
            2,
            vec![Column::new(
                "id_node",
                vec![FieldValue::text("n1"), FieldValue::text("n2")],
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_sheet_report_counts() {
        let report = SheetReport::new("Nodes Metadata", &table(), None);
        assert_eq!(report.rows, 2);
        assert_eq!(report.columns, 1);
        assert!(!report.is_degraded());
    }

    #[test]
    fn test_job_summary_degraded_count() {
        let mut summary = JobSummary::new("out.xlsx");
        assert!(summary.is_complete());

        summary.add_sheet(SheetReport::new("Nodes Metadata", &table(), None));
        summary.add_sheet(SheetReport::new(
            "Contracts Metadata",
            &Table::new(0),
            Some("Cosmos DB is not configured".to_string()),
        ));

        assert_eq!(summary.degraded_count(), 1);
        assert!(!summary.is_complete());
        assert_eq!(summary.sheet("Contracts Metadata").unwrap().rows, 0);
        assert!(summary.sheet("Member Metadata").is_none());
    }

    #[test]
    fn test_job_summary_with_duration() {
        let summary = JobSummary::new("out.xlsx").with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration, Duration::from_millis(250));
        assert_eq!(summary.output, PathBuf::from("out.xlsx"));
    }
}
