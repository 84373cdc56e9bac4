//! Column-filter transform
//!
//! Keeps the base columns a reviewer marked with `Y` in their `_Y` twin and
//! drops everything else. Filtering fails open: if a table cannot be
//! filtered it is returned unchanged as a degraded [`Outcome`].

use super::{MARKER_SUFFIX, SENTINEL};
use crate::domain::{MetadataError, Outcome, Result, Table};

/// Filters a table, passing it through unchanged when filtering fails
///
/// # Examples
///
/// ```
/// use abs_metadata::core::transform::{filter_marked_columns, tag_records};
/// use abs_metadata::domain::{FieldValue, Record, RecordKind};
///
/// let records = vec![Record::new().with("id", "m1").with("status", "active")];
/// let mut table = tag_records(&records, RecordKind::Member);
/// table.column_mut("id_member_Y").unwrap().values = vec![FieldValue::text("Y")];
///
/// let filtered = filter_marked_columns(table).into_value();
/// assert_eq!(filtered.column_names(), vec!["id_member"]);
/// ```
pub fn filter_marked_columns(table: Table) -> Outcome<Table> {
    match select_marked_columns(&table) {
        Ok(filtered) => Outcome::Complete(filtered),
        Err(e) => {
            tracing::warn!(
                error = %e,
                columns = table.column_count(),
                "Column filtering failed, passing table through unfiltered"
            );
            Outcome::Degraded {
                value: table,
                diagnostic: format!("Error filtering columns: {e}"),
            }
        }
    }
}

/// Builds the filtered table
///
/// A marker column qualifies when its name ends in `_Y` and at least one
/// row holds exactly the text `Y`. The output holds the base column of
/// every qualifying marker, in marker order, and keeps the input row count.
///
/// # Errors
///
/// Returns a selection error when a qualifying marker has no base column.
pub fn select_marked_columns(table: &Table) -> Result<Table> {
    let mut filtered = Table::new(table.row_count());

    for marker in table
        .columns()
        .iter()
        .filter(|c| c.name.ends_with(MARKER_SUFFIX) && c.contains_text(SENTINEL))
    {
        let base_name = &marker.name[..marker.name.len() - MARKER_SUFFIX.len()];
        let base = table.column(base_name).ok_or_else(|| {
            MetadataError::Selection(format!(
                "Marker column '{}' has no base column '{}'",
                marker.name, base_name
            ))
        })?;

        tracing::trace!(column = %base_name, "Keeping marked column");
        filtered.push_column(base.clone())?;
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::tagging::{marker_name, tag_records};
    use crate::domain::{Column, FieldValue, Record, RecordKind};

    fn member_table() -> Table {
        let records = vec![Record::new().with("id", "m1").with("status", "active")];
        tag_records(&records, RecordKind::Member)
    }

    fn set_marker(table: &mut Table, marker: &str, values: Vec<FieldValue>) {
        table.column_mut(marker).unwrap().values = values;
    }

    #[test]
    fn test_keeps_only_marked_column() {
        let mut table = member_table();
        set_marker(&mut table, "id_member_Y", vec![FieldValue::text("Y")]);
        set_marker(&mut table, "status_member_Y", vec![FieldValue::text("")]);

        let outcome = filter_marked_columns(table);
        assert!(!outcome.is_degraded());

        let filtered = outcome.into_value();
        assert_eq!(filtered.column_names(), vec!["id_member"]);
        assert_eq!(
            filtered.column("id_member").unwrap().values,
            vec![FieldValue::text("m1")]
        );
    }

    #[test]
    fn test_all_marked_reproduces_base_columns() {
        let records = vec![
            Record::new().with("name", "n1").with("location", "eastus").with("state", "Ready"),
            Record::new().with("name", "n2").with("location", "westus").with("state", "Failed"),
        ];
        let mut table = tag_records(&records, RecordKind::Node);
        let bases = ["name_node", "location_node", "state_node"];
        for base in bases {
            set_marker(
                &mut table,
                &marker_name(base),
                vec![FieldValue::text("Y"), FieldValue::Null],
            );
        }

        let filtered = select_marked_columns(&table).unwrap();
        assert_eq!(filtered.column_names(), bases.to_vec());
        assert_eq!(filtered.row_count(), 2);
        assert_eq!(
            filtered.column("state_node").unwrap().values,
            vec![FieldValue::text("Ready"), FieldValue::text("Failed")]
        );
    }

    #[test]
    fn test_nothing_marked_keeps_row_count() {
        let records: Vec<Record> = (0..3)
            .map(|_| Record::new().with("id", "c").with("abi", "[]"))
            .collect();
        let table = tag_records(&records, RecordKind::Contract);

        let filtered = select_marked_columns(&table).unwrap();
        assert!(filtered.is_empty());
        assert_eq!(filtered.row_count(), 3);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let mut table = member_table();
        set_marker(&mut table, "status_member_Y", vec![FieldValue::text("Y")]);

        let once = filter_marked_columns(table).into_value();
        let twice = filter_marked_columns(once);

        assert!(!twice.is_degraded());
        assert!(twice.value().is_empty());
        assert_eq!(twice.value().row_count(), 1);
    }

    #[test]
    fn test_null_and_non_text_markers_excluded() {
        let table = Table::from_columns(
            2,
            vec![
                Column::new("count_node", vec![FieldValue::Number(1.0), FieldValue::Number(2.0)]),
                Column::new("count_node_Y", vec![FieldValue::Null, FieldValue::Null]),
                Column::new("flag_node", vec![FieldValue::Bool(true), FieldValue::Null]),
                Column::new("flag_node_Y", vec![FieldValue::Bool(true), FieldValue::Number(1.0)]),
            ],
        )
        .unwrap();

        let filtered = select_marked_columns(&table).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_marker_without_base_fails_open() {
        let table = Table::from_columns(
            1,
            vec![
                Column::new("id_member", vec![FieldValue::text("m1")]),
                Column::new("id_member_Y", vec![FieldValue::text("Y")]),
                Column::new("orphan_member_Y", vec![FieldValue::text("Y")]),
            ],
        )
        .unwrap();

        assert!(select_marked_columns(&table).is_err());

        let outcome = filter_marked_columns(table.clone());
        assert!(outcome.is_degraded());
        assert!(outcome.diagnostic().unwrap().contains("orphan_member"));
        assert_eq!(outcome.into_value(), table);
    }

    #[test]
    fn test_base_without_marker_dropped() {
        let table = Table::from_columns(
            1,
            vec![
                Column::new("id_member", vec![FieldValue::text("m1")]),
                Column::new("note", vec![FieldValue::text("Y")]),
            ],
        )
        .unwrap();

        let filtered = select_marked_columns(&table).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_output_follows_marker_order() {
        let table = Table::from_columns(
            1,
            vec![
                Column::new("a", vec![FieldValue::text("1")]),
                Column::new("b", vec![FieldValue::text("2")]),
                Column::new("b_Y", vec![FieldValue::text("Y")]),
                Column::new("a_Y", vec![FieldValue::text("Y")]),
            ],
        )
        .unwrap();

        let filtered = select_marked_columns(&table).unwrap();
        assert_eq!(filtered.column_names(), vec!["b", "a"]);
    }
}
