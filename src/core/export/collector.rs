//! Collect job
//!
//! Fetches the member, node and contract record sets, tags them, and writes
//! one worksheet per set. A failed fetch degrades its own sheet only.

use crate::adapters::source::MetadataSource;
use crate::adapters::workbook::WorkbookWriter;
use crate::core::export::summary::{JobSummary, SheetReport};
use crate::core::transform::tag_records;
use crate::domain::{Outcome, Record, RecordKind, Result};
use std::path::Path;
use std::time::Instant;

/// Record sets fetched in one run, in [`RecordKind::ALL`] order
#[derive(Debug, Clone)]
pub struct CollectedMetadata {
    pub member: Outcome<Vec<Record>>,
    pub nodes: Outcome<Vec<Record>>,
    pub contracts: Outcome<Vec<Record>>,
}

impl CollectedMetadata {
    /// The record set for one kind
    pub fn records(&self, kind: RecordKind) -> &Outcome<Vec<Record>> {
        match kind {
            RecordKind::Member => &self.member,
            RecordKind::Node => &self.nodes,
            RecordKind::Contract => &self.contracts,
        }
    }
}

/// Collect job over any [`MetadataSource`]
pub struct Collector {
    source: Box<dyn MetadataSource>,
}

impl Collector {
    pub fn new(source: Box<dyn MetadataSource>) -> Self {
        Self { source }
    }

    /// Fetch the three record sets, one after another
    ///
    /// Never fails: a failed member fetch yields one empty record, a failed
    /// node or contract fetch yields no records.
    pub async fn collect(&self) -> CollectedMetadata {
        let member = Outcome::or_degrade(
            self.source
                .fetch_member()
                .await
                .map(|record| vec![record])
                .map_err(|e| format!("Error fetching blockchain member metadata: {e}")),
            || vec![Record::new()],
        );
        report_degraded(RecordKind::Member, &member);

        let nodes = Outcome::or_degrade(
            self.source
                .fetch_nodes()
                .await
                .map_err(|e| format!("Error fetching blockchain nodes metadata: {e}")),
            Vec::new,
        );
        report_degraded(RecordKind::Node, &nodes);

        let contracts = Outcome::or_degrade(
            self.source
                .fetch_contracts()
                .await
                .map_err(|e| format!("Error fetching smart contracts metadata: {e}")),
            Vec::new,
        );
        report_degraded(RecordKind::Contract, &contracts);

        CollectedMetadata {
            member,
            nodes,
            contracts,
        }
    }

    /// Run the job and save the workbook to `output`
    ///
    /// # Errors
    ///
    /// Returns an error only if the workbook cannot be built or saved.
    pub async fn execute(&self, output: impl AsRef<Path>) -> Result<JobSummary> {
        let start_time = Instant::now();
        let output = output.as_ref();
        tracing::info!(output = %output.display(), "Starting metadata collection");

        let collected = self.collect().await;
        let summary = write_collected(&collected, output)?;

        Ok(summary.with_duration(start_time.elapsed()))
    }
}

/// Tag every record set and save the three worksheets
///
/// # Errors
///
/// Returns an error if a worksheet cannot be written or the file saved.
pub fn write_collected(collected: &CollectedMetadata, output: &Path) -> Result<JobSummary> {
    let mut writer = WorkbookWriter::new();
    let mut summary = JobSummary::new(output);

    for kind in RecordKind::ALL {
        let records = collected.records(kind);
        let table = tag_records(records.value(), kind);

        writer.add_table(kind.sheet_name(), &table)?;
        summary.add_sheet(SheetReport::new(
            kind.sheet_name(),
            &table,
            records.diagnostic().map(str::to_string),
        ));
    }

    writer.save(output)?;
    Ok(summary)
}

fn report_degraded(kind: RecordKind, outcome: &Outcome<Vec<Record>>) {
    match outcome.diagnostic() {
        Some(diagnostic) => {
            crate::log_source_degraded!(kind, diagnostic);
        }
        None => tracing::info!(
            kind = %kind,
            records = outcome.value().len(),
            "Records fetched"
        ),
    }
}
