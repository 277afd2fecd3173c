//! Import value formatter
//!
//! Turns a raw CSV cell into the value shape expected for its field type.
//! Most types keep the cell text unchanged; multi-valued selections are
//! decoded into a list.

use crate::types::{FieldType, ParsedValue};

const LINE_BREAK: char = '\n';

/// Format a raw CSV cell as the value of a field of `field_type`
///
/// Callers filter fields with
/// [`is_import_supported_field_type`](crate::core::classifier::is_import_supported_field_type)
/// first; every other type is passed through as text.
pub fn format_to_record_value(field_type: FieldType, value: &str) -> ParsedValue {
    match field_type {
        FieldType::MultiSelect | FieldType::CheckBox => {
            ParsedValue::Multi(split_multi_value(value))
        }
        FieldType::SingleLineText
        | FieldType::MultiLineText
        | FieldType::RichText
        | FieldType::Number
        | FieldType::RadioButton
        | FieldType::DropDown
        | FieldType::Link
        | FieldType::Date
        | FieldType::Time
        | FieldType::Datetime
        | FieldType::RecordNumber
        | FieldType::Id
        | FieldType::Revision
        | FieldType::Creator
        | FieldType::CreatedTime
        | FieldType::Modifier
        | FieldType::UpdatedTime
        | FieldType::Calc
        | FieldType::UserSelect
        | FieldType::OrganizationSelect
        | FieldType::GroupSelect
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
        | FieldType::Unknown => ParsedValue::Text(value.to_string()),
    }
}

/// Decode a multi-valued cell
///
/// Accepts the JSON array text written by the export direction, and falls
/// back to one value per line.
fn split_multi_value(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    if let Ok(values) = serde_json::from_str::<Vec<String>>(value) {
        return values;
    }
    value
        .split(LINE_BREAK)
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
