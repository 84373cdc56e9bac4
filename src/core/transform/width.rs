//! Column width normalization
//!
//! Width of a worksheet column = longest printed header or cell, plus a
//! fixed margin.

use crate::domain::{Column, Table};

/// Extra character widths added to the longest entry of every column
pub const WIDTH_MARGIN: usize = 2;

/// Display width for one column
pub fn column_width(column: &Column) -> usize {
    let longest_value = column
        .values
        .iter()
        .map(|v| v.display_len())
        .max()
        .unwrap_or(0);

    column.name.chars().count().max(longest_value) + WIDTH_MARGIN
}

/// Display widths for every column of a table, in column order
pub fn column_widths(table: &Table) -> Vec<usize> {
    table.columns().iter().map(column_width).collect()
}
