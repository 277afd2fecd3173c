//! Record types for both conversion directions
//!
//! - [`ParsedRecord`] is what the import direction produces, ready to be
//!   written to the platform. It serializes to the write shape, where every
//!   field is wrapped as `{"value": ...}`.
//! - [`KintoneRecord`] is what the export direction consumes, decoded from
//!   the read shape `{"type": TAG, "value": ...}`.

use crate::types::FieldType;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A record built from CSV rows, keyed by field code in column order
pub type ParsedRecord = IndexMap<String, ParsedValue>;

/// A record read from the platform, keyed by field code in response order
pub type KintoneRecord = IndexMap<String, KintoneField>;

/// Formatted value of a single field in a [`ParsedRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    /// Single string value (text, number, choice, date...)
    Text(String),
    /// Multi-valued selection (multi-select, check box)
    Multi(Vec<String>),
    /// Rows of a subtable, each scoped to the subtable's inner fields
    Subtable(Vec<ParsedRecord>),
}

impl ParsedValue {
    pub fn text(value: &str) -> Self {
        ParsedValue::Text(value.to_string())
    }

    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParsedValue::Multi(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Serialize)]
struct SubtableRow<'a> {
    value: &'a ParsedRecord,
}

impl Serialize for ParsedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ParsedValue::Text(value) => map.serialize_entry("value", value)?,
            ParsedValue::Multi(values) => map.serialize_entry("value", values)?,
            ParsedValue::Subtable(rows) => {
                let rows: Vec<SubtableRow<'_>> =
                    rows.iter().map(|value| SubtableRow { value }).collect();
                map.serialize_entry("value", &rows)?
            }
        }
        map.end()
    }
}

/// Document written by the import direction
#[derive(Debug, Serialize)]
pub struct ParsedRecordsDocument<'a> {
    pub records: &'a [ParsedRecord],
}

/// Document read by the export direction (a records API response)
#[derive(Debug, Deserialize)]
pub struct RecordsDocument {
    pub records: Vec<KintoneRecord>,
}

/// User reference as stored in creator/modifier fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// Typed value of a single field of a [`KintoneRecord`]
///
/// The variant is chosen from the field's type tag; the payload shape is
/// checked while decoding, so a formatter never sees a mismatched value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawField")]
pub enum KintoneField {
    Text {
        field_type: FieldType,
        value: Option<String>,
    },
    User {
        field_type: FieldType,
        value: Option<UserEntity>,
    },
    Timestamp {
        field_type: FieldType,
        value: Option<DateTime<FixedOffset>>,
    },
    MultiValue {
        field_type: FieldType,
        value: Vec<String>,
    },
    /// Any tag without a dedicated payload shape; the value is kept verbatim
    Other { field_type: FieldType, value: Value },
}

impl KintoneField {
    pub fn text(field_type: FieldType, value: &str) -> Self {
        KintoneField::Text {
            field_type,
            value: Some(value.to_string()),
        }
    }

    pub fn user(field_type: FieldType, code: &str) -> Self {
        KintoneField::User {
            field_type,
            value: Some(UserEntity {
                code: code.to_string(),
                name: String::new(),
            }),
        }
    }

    pub fn multi_value(field_type: FieldType, values: &[&str]) -> Self {
        KintoneField::MultiValue {
            field_type,
            value: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            KintoneField::Text { field_type, .. }
            | KintoneField::User { field_type, .. }
            | KintoneField::Timestamp { field_type, .. }
            | KintoneField::MultiValue { field_type, .. }
            | KintoneField::Other { field_type, .. } => *field_type,
        }
    }
}

#[derive(Deserialize)]
struct RawField {
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(default)]
    value: Value,
}

impl TryFrom<RawField> for KintoneField {
    type Error = String;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let RawField { field_type, value } = raw;
        let field = match field_type {
            FieldType::RecordNumber
            | FieldType::SingleLineText
            | FieldType::RadioButton
            | FieldType::MultiLineText
            | FieldType::Number
            | FieldType::RichText
            | FieldType::Link
            | FieldType::DropDown
            | FieldType::Calc => KintoneField::Text {
                field_type,
                value: optional_string(field_type, value)?,
            },
            FieldType::Creator | FieldType::Modifier => KintoneField::User {
                field_type,
                value: match value {
                    Value::Null => None,
                    other => Some(
                        serde_json::from_value(other)
                            .map_err(|e| shape_error(field_type, &e.to_string()))?,
                    ),
                },
            },
            FieldType::CreatedTime | FieldType::UpdatedTime => KintoneField::Timestamp {
                field_type,
                value: timestamp(field_type, value)?,
            },
            FieldType::MultiSelect | FieldType::CheckBox => KintoneField::MultiValue {
                field_type,
                value: match value {
                    Value::Null => Vec::new(),
                    other => serde_json::from_value(other)
                        .map_err(|e| shape_error(field_type, &e.to_string()))?,
                },
            },
            FieldType::Id
            | FieldType::Revision
            | FieldType::UserSelect
            | FieldType::OrganizationSelect
            | FieldType::GroupSelect
            | FieldType::Date
            | FieldType::Time
            | FieldType::Datetime
            | FieldType::File
            | FieldType::Subtable
            | FieldType::Category
            | FieldType::Status
            | FieldType::StatusAssignee
            | FieldType::Label
            | FieldType::Spacer
            | FieldType::Hr
            | FieldType::Group
            | FieldType::ReferenceTable
            | FieldType::Unknown => KintoneField::Other { field_type, value },
        };
        Ok(field)
    }
}

fn shape_error(field_type: FieldType, detail: &str) -> String {
    format!("invalid value for {} field: {}", field_type, detail)
}

fn optional_string(field_type: FieldType, value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(shape_error(
            field_type,
            &format!("expected a string, got {}", other),
        )),
    }
}

fn timestamp(
    field_type: FieldType,
    value: Value,
) -> Result<Option<DateTime<FixedOffset>>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(Some)
            .map_err(|e| shape_error(field_type, &format!("'{}': {}", s, e))),
        other => Err(shape_error(
            field_type,
            &format!("expected a timestamp string, got {}", other),
        )),
    }
}
