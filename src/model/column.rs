//! User-defined columns and their values.
//!
//! The column schema lives on the project; spaces hold values keyed by
//! column id. The value map itself is open — the schema is consulted at
//! access time to interpret what a stored scalar means.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

/// Declared value type of a custom column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Checkbox,
    Select,
}

/// A user-defined attribute applied uniformly across all spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomColumn {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Option set for `Select` columns; empty otherwise.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub options: SmallVec<[String; 4]>,
}

impl CustomColumn {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            column_type,
            options: SmallVec::new(),
        }
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Interpret a stored scalar against this column's declared type.
    ///
    /// This is the single schema lookup per field access: a raw string
    /// becomes `Choice` only when the column is `Select` and the string is
    /// one of its options. Mismatched shapes fall back to the scalar's own
    /// variant rather than erroring — imported data is tolerated as-is.
    pub fn typed<'a>(&self, value: &'a FieldValue) -> TypedValue<'a> {
        match (self.column_type, value) {
            (ColumnType::Select, FieldValue::Text(s)) if self.options.iter().any(|o| o == s) => {
                TypedValue::Choice(s)
            }
            (_, FieldValue::Text(s)) => TypedValue::Text(s),
            (_, FieldValue::Number(n)) => TypedValue::Number(*n),
            (_, FieldValue::Bool(b)) => TypedValue::Bool(*b),
        }
    }
}

/// Raw custom-field scalar as it appears in project JSON.
///
/// Untagged so `true`, `42`, and `"open shelving"` round-trip byte-for-byte
/// with files written by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}
impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}
impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Number(v as f64)
    }
}
impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_owned())
    }
}
impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// A field value seen through its column's declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    /// A `Select` value constrained to the column's option set.
    Choice(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_untagged_roundtrip() {
        let v: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, FieldValue::Bool(true));
        let v: FieldValue = serde_json::from_str("42").unwrap();
        assert_eq!(v, FieldValue::Number(42.0));
        let v: FieldValue = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"hi\"");
    }

    #[test]
    fn test_column_serde_uses_type_field() {
        let col = CustomColumn::new("Finish", ColumnType::Select).with_options(["paint", "tile"]);
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["options"], serde_json::json!(["paint", "tile"]));

        let text = CustomColumn::new("Vendor", ColumnType::Text);
        let json = serde_json::to_value(&text).unwrap();
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_select_value_becomes_choice() {
        let col = CustomColumn::new("Finish", ColumnType::Select).with_options(["paint", "tile"]);
        assert_eq!(col.typed(&FieldValue::from("tile")), TypedValue::Choice("tile"));
        // Off-schema string stays plain text
        assert_eq!(col.typed(&FieldValue::from("glass")), TypedValue::Text("glass"));
    }

    #[test]
    fn test_non_select_string_stays_text() {
        let col = CustomColumn::new("Vendor", ColumnType::Text);
        assert_eq!(col.typed(&FieldValue::from("acme")), TypedValue::Text("acme"));
        assert_eq!(col.typed(&FieldValue::from(3.0)), TypedValue::Number(3.0));
    }
}
