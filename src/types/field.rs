//! Field schema types
//!
//! The schema is the form-fields document of a kintone app:
//!
//! ```json
//! {"properties": {"title": {"type": "SINGLE_LINE_TEXT", "code": "title", "label": "Title"}}}
//! ```
//!
//! Subtable membership is structural. A `SUBTABLE` property carries its own
//! inner `fields` mapping, and inner fields never appear at the top level.

use crate::types::LoaderError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Field type tag as reported by the platform
///
/// Tags outside the recognized set decode as [`FieldType::Unknown`] and are
/// excluded from both conversion directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    RecordNumber,
    Id,
    Revision,
    Creator,
    CreatedTime,
    Modifier,
    UpdatedTime,
    SingleLineText,
    MultiLineText,
    RichText,
    Number,
    Calc,
    CheckBox,
    RadioButton,
    MultiSelect,
    DropDown,
    UserSelect,
    OrganizationSelect,
    GroupSelect,
    Date,
    Time,
    Datetime,
    Link,
    File,
    Subtable,
    Category,
    Status,
    StatusAssignee,
    Label,
    Spacer,
    Hr,
    Group,
    ReferenceTable,
    Unknown,
}

impl FieldType {
    /// The wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::RecordNumber => "RECORD_NUMBER",
            FieldType::Id => "__ID__",
            FieldType::Revision => "__REVISION__",
            FieldType::Creator => "CREATOR",
            FieldType::CreatedTime => "CREATED_TIME",
            FieldType::Modifier => "MODIFIER",
            FieldType::UpdatedTime => "UPDATED_TIME",
            FieldType::SingleLineText => "SINGLE_LINE_TEXT",
            FieldType::MultiLineText => "MULTI_LINE_TEXT",
            FieldType::RichText => "RICH_TEXT",
            FieldType::Number => "NUMBER",
            FieldType::Calc => "CALC",
            FieldType::CheckBox => "CHECK_BOX",
            FieldType::RadioButton => "RADIO_BUTTON",
            FieldType::MultiSelect => "MULTI_SELECT",
            FieldType::DropDown => "DROP_DOWN",
            FieldType::UserSelect => "USER_SELECT",
            FieldType::OrganizationSelect => "ORGANIZATION_SELECT",
            FieldType::GroupSelect => "GROUP_SELECT",
            FieldType::Date => "DATE",
            FieldType::Time => "TIME",
            FieldType::Datetime => "DATETIME",
            FieldType::Link => "LINK",
            FieldType::File => "FILE",
            FieldType::Subtable => "SUBTABLE",
            FieldType::Category => "CATEGORY",
            FieldType::Status => "STATUS",
            FieldType::StatusAssignee => "STATUS_ASSIGNEE",
            FieldType::Label => "LABEL",
            FieldType::Spacer => "SPACER",
            FieldType::Hr => "HR",
            FieldType::Group => "GROUP",
            FieldType::ReferenceTable => "REFERENCE_TABLE",
            FieldType::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire tag; unrecognized tags map to [`FieldType::Unknown`]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "RECORD_NUMBER" => FieldType::RecordNumber,
            "__ID__" => FieldType::Id,
            "__REVISION__" => FieldType::Revision,
            "CREATOR" => FieldType::Creator,
            "CREATED_TIME" => FieldType::CreatedTime,
            "MODIFIER" => FieldType::Modifier,
            "UPDATED_TIME" => FieldType::UpdatedTime,
            "SINGLE_LINE_TEXT" => FieldType::SingleLineText,
            "MULTI_LINE_TEXT" => FieldType::MultiLineText,
            "RICH_TEXT" => FieldType::RichText,
            "NUMBER" => FieldType::Number,
            "CALC" => FieldType::Calc,
            "CHECK_BOX" => FieldType::CheckBox,
            "RADIO_BUTTON" => FieldType::RadioButton,
            "MULTI_SELECT" => FieldType::MultiSelect,
            "DROP_DOWN" => FieldType::DropDown,
            "USER_SELECT" => FieldType::UserSelect,
            "ORGANIZATION_SELECT" => FieldType::OrganizationSelect,
            "GROUP_SELECT" => FieldType::GroupSelect,
            "DATE" => FieldType::Date,
            "TIME" => FieldType::Time,
            "DATETIME" => FieldType::Datetime,
            "LINK" => FieldType::Link,
            "FILE" => FieldType::File,
            "SUBTABLE" => FieldType::Subtable,
            "CATEGORY" => FieldType::Category,
            "STATUS" => FieldType::Status,
            "STATUS_ASSIGNEE" => FieldType::StatusAssignee,
            "LABEL" => FieldType::Label,
            "SPACER" => FieldType::Spacer,
            "HR" => FieldType::Hr,
            "GROUP" => FieldType::Group,
            "REFERENCE_TABLE" => FieldType::ReferenceTable,
            _ => FieldType::Unknown,
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(FieldType::from_tag(&tag))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field definition from the form schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProperty {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Inner fields, only populated for `SUBTABLE` properties
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldProperty>,
}

impl FieldProperty {
    /// Create a plain (non-subtable) field property
    pub fn new(code: &str, field_type: FieldType) -> Self {
        FieldProperty {
            field_type,
            code: code.to_string(),
            label: None,
            fields: IndexMap::new(),
        }
    }

    /// Create a `SUBTABLE` property holding the given inner fields
    pub fn subtable(code: &str, fields: impl IntoIterator<Item = FieldProperty>) -> Self {
        FieldProperty {
            field_type: FieldType::Subtable,
            code: code.to_string(),
            label: None,
            fields: fields
                .into_iter()
                .map(|field| (field.code.clone(), field))
                .collect(),
        }
    }

    pub fn is_subtable(&self) -> bool {
        self.field_type == FieldType::Subtable
    }
}

/// Form schema of an app, keyed by field code in form order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub properties: IndexMap<String, FieldProperty>,
}

impl FieldSchema {
    /// Decode a form-fields JSON document
    pub fn from_json(json: &str) -> Result<Self, LoaderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a top-level field by code
    pub fn get(&self, code: &str) -> Option<&FieldProperty> {
        self.properties.get(code)
    }

    /// Whether any top-level field is a subtable
    pub fn has_subtable(&self) -> bool {
        self.properties.values().any(FieldProperty::is_subtable)
    }

    /// All subtable properties with their codes, in form order
    pub fn subtables(&self) -> impl Iterator<Item = (&str, &FieldProperty)> {
        self.properties
            .iter()
            .filter(|(_, property)| property.is_subtable())
            .map(|(code, property)| (code.as_str(), property))
    }
}

impl FromIterator<FieldProperty> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = FieldProperty>>(iter: I) -> Self {
        FieldSchema {
            properties: iter
                .into_iter()
                .map(|field| (field.code.clone(), field))
                .collect(),
        }
    }
}
