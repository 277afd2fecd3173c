//! Export value formatter
//!
//! Renders one kintone field as one CSV cell. Supported values are always
//! enclosed in double quotes with internal quotes doubled, so every cell
//! re-parses with a standard CSV reader.

use crate::types::KintoneField;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::Value;
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Render `field` as a CSV cell, formatting timestamps in `timezone`
pub fn lex<Tz>(field: &KintoneField, timezone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match field {
        KintoneField::Text { value, .. } => enclose_in_quotation(value.as_deref()),
        KintoneField::User { value, .. } => {
            enclose_in_quotation(value.as_ref().map(|user| user.code.as_str()))
        }
        KintoneField::Timestamp { value, .. } => enclose_in_quotation(
            value
                .as_ref()
                .map(|value| format_date_field_value(value, timezone))
                .as_deref(),
        ),
        KintoneField::MultiValue { value, .. } => {
            let array = Value::Array(value.iter().cloned().map(Value::String).collect());
            enclose_in_quotation(Some(&array.to_string()))
        }
        KintoneField::Other { value, .. } => pass_through(value),
    }
}

/// Wrap a value in double quotes, doubling any quote inside it
///
/// A missing value becomes an empty quoted cell.
pub fn enclose_in_quotation(value: Option<&str>) -> String {
    format!("\"{}\"", value.unwrap_or_default().replace('"', "\"\""))
}

/// `YYYY/MM/DD HH:mm` in the given timezone
pub fn format_date_field_value<Tz>(value: &DateTime<FixedOffset>, timezone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(timezone).format(DATE_FORMAT).to_string()
}

// unquoted, as received
fn pass_through(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
