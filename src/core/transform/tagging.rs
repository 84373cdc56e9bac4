//! Tagging transform
//!
//! Turns a list of records into a tagged table: every field becomes a
//! `{field}_{tag}` column and every such column gets a `_Y` marker twin
//! holding the same values. Marker columns come after all base columns.
//!
//! | records                              | columns                                                   |
//! |--------------------------------------|-----------------------------------------------------------|
//! | `[{"id": "m1", "status": "active"}]` | `id_member, status_member, id_member_Y, status_member_Y` |

use super::MARKER_SUFFIX;
use crate::domain::{Column, FieldValue, Record, RecordKind, Table};

/// Builds the tagged table for a record set
///
/// The column set is the union of field names across `records`, in the
/// order each name is first seen. Records without a field contribute
/// [`FieldValue::Null`].
///
/// # Examples
///
/// ```
/// use abs_metadata::core::transform::tag_records;
/// use abs_metadata::domain::{Record, RecordKind};
///
/// let records = vec![Record::new().with("id", "m1").with("status", "active")];
/// let table = tag_records(&records, RecordKind::Member);
///
/// assert_eq!(
///     table.column_names(),
///     vec!["id_member", "status_member", "id_member_Y", "status_member_Y"]
/// );
/// ```
pub fn tag_records(records: &[Record], kind: RecordKind) -> Table {
    let fields = union_field_names(records);
    let mut table = Table::new(records.len());

    let base_columns: Vec<Column> = fields
        .iter()
        .map(|field| {
            let values = records
                .iter()
                .map(|r| r.get(field).cloned().unwrap_or(FieldValue::Null))
                .collect();
            Column::new(tagged_name(field, kind), values)
        })
        .collect();

    let marker_columns: Vec<Column> = base_columns
        .iter()
        .map(|base| Column::new(marker_name(&base.name), base.values.clone()))
        .collect();

    // Lengths match by construction
    for column in base_columns.into_iter().chain(marker_columns) {
        if let Err(e) = table.push_column(column) {
            tracing::error!(error = %e, kind = %kind, "Dropped malformed tagged column");
        }
    }

    tracing::debug!(
        kind = %kind,
        rows = table.row_count(),
        columns = table.column_count(),
        "Tagged record set"
    );

    table
}

/// `{field}_{tag}`
pub fn tagged_name(field: &str, kind: RecordKind) -> String {
    format!("{field}_{}", kind.tag())
}

/// `{column}_Y`
pub fn marker_name(column: &str) -> String {
    format!("{column}{MARKER_SUFFIX}")
}

fn union_field_names(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for name in record.field_names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}
