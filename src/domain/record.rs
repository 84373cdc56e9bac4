//! Schemaless metadata records
//!
//! Resource Manager responses and Cosmos DB documents have no fixed schema,
//! so a [`Record`] keeps its fields as an ordered list of name/value pairs
//! and every value is folded into a [`FieldValue`].

use super::errors::MetadataError;
use super::result::Result;
use serde_json::Value;
use std::fmt;

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain text
    Text(String),

    /// Any JSON number, widened to `f64` for the spreadsheet
    Number(f64),

    /// Boolean flag
    Bool(bool),

    /// Missing or JSON `null`
    Null,

    /// Object or array, stored as compact JSON text
    Nested(String),
}

impl FieldValue {
    /// Shorthand for a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Returns the text if this is a [`FieldValue::Text`]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value is [`FieldValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Number of characters the value occupies when printed
    pub fn display_len(&self) -> usize {
        match self {
            FieldValue::Text(s) | FieldValue::Nested(s) => s.chars().count(),
            FieldValue::Null => 0,
            other => other.to_string().chars().count(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Nested(s) => f.write_str(s),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            Value::String(s) => FieldValue::Text(s.clone()),
            // Compact JSON for a Value cannot fail
            nested => FieldValue::Nested(nested.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// A flat record: field names in source order mapped to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object, keeping key order
    ///
    /// # Errors
    ///
    /// Returns a validation error when `value` is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            MetadataError::Validation(format!(
                "Expected a JSON object for a metadata record, got: {}",
                json_kind(value)
            ))
        })?;

        Ok(Self {
            fields: map
                .iter()
                .map(|(name, value)| (name.clone(), FieldValue::from(value)))
                .collect(),
        })
    }

    /// Sets a field, replacing any previous value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style [`Record::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a field
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Field names in source order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
