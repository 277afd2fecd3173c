//! Field type classifiers
//!
//! Import and export support different type sets, so they are kept as two
//! separate allow-lists. A type missing from a list is silently excluded from
//! that direction.

use crate::types::FieldType;

const IMPORT_SUPPORTED_FIELD_TYPES: &[FieldType] = &[
    FieldType::SingleLineText,
    FieldType::MultiLineText,
    FieldType::RichText,
    FieldType::Number,
    FieldType::RadioButton,
    FieldType::DropDown,
    FieldType::Link,
    FieldType::CheckBox,
    FieldType::MultiSelect,
    FieldType::Date,
    FieldType::Time,
    FieldType::Datetime,
];

const EXPORT_SUPPORTED_FIELD_TYPES: &[FieldType] = &[
    FieldType::RecordNumber,
    FieldType::SingleLineText,
    FieldType::RadioButton,
    FieldType::MultiLineText,
    FieldType::Number,
    FieldType::RichText,
    FieldType::Link,
    FieldType::DropDown,
    FieldType::Calc,
    FieldType::Creator,
    FieldType::Modifier,
    FieldType::UpdatedTime,
    FieldType::CreatedTime,
    FieldType::MultiSelect,
    FieldType::CheckBox,
];

/// Whether a field of this type can be built from a CSV cell
pub fn is_import_supported_field_type(field_type: FieldType) -> bool {
    IMPORT_SUPPORTED_FIELD_TYPES.contains(&field_type)
}

/// Whether a field of this type can be written as a CSV cell
pub fn is_export_supported_field_type(field_type: FieldType) -> bool {
    EXPORT_SUPPORTED_FIELD_TYPES.contains(&field_type)
}
