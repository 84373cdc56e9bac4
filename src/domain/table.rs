//! Column-oriented tables
//!
//! A [`Table`] is what one worksheet holds: named columns of equal length.
//! The row count is stored separately so that a table can have rows but no
//! columns (for example after every column has been filtered out).

use super::errors::MetadataError;
use super::record::FieldValue;
use super::result::Result;

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header text
    pub name: String,

    /// One value per row
    pub values: Vec<FieldValue>,
}

impl Column {
    /// Creates a column
    pub fn new(name: impl Into<String>, values: Vec<FieldValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Whether any row holds exactly the given text
    pub fn contains_text(&self, text: &str) -> bool {
        self.values.iter().any(|v| v.as_text() == Some(text))
    }
}

/// A table of equal-length columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates a table with the given number of rows and no columns
    pub fn new(row_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            row_count,
        }
    }

    /// Creates a table from columns
    ///
    /// # Errors
    ///
    /// Returns a validation error if any column length differs from `row_count`.
    pub fn from_columns(row_count: usize, columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new(row_count);
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Appends a column
    ///
    /// # Errors
    ///
    /// Returns a validation error if the column length differs from the row count.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if column.values.len() != self.row_count {
            return Err(MetadataError::Validation(format!(
                "Column '{}' has {} values but the table has {} rows",
                column.name,
                column.values.len(),
                self.row_count
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Finds a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Mutable lookup by name
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header names in column order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// True when the table has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A table together with the worksheet name it is stored under
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

impl Sheet {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}
