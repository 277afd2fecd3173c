//! CSV printer for the export direction
//!
//! Columns come from the first record only: its field codes, in order,
//! filtered to exportable types. Fields that appear only in later records are
//! never printed. Records arrive newest first and are printed oldest first.

use crate::core::classifier::is_export_supported_field_type;
use crate::core::lexer::{enclose_in_quotation, lex};
use crate::types::{KintoneRecord, LoaderError};
use chrono::{Local, TimeZone};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

const LINE_BREAK: &str = "\n";
const SEPARATOR: &str = ",";

/// Renders kintone records as CSV text
///
/// Timestamps are formatted in the printer's timezone, which defaults to the
/// local one.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use kintone_csv::io::CsvPrinter;
/// use kintone_csv::types::{FieldType, KintoneField, KintoneRecord};
///
/// let mut record = KintoneRecord::new();
/// record.insert("title".to_string(), KintoneField::text(FieldType::SingleLineText, "A"));
///
/// let csv = CsvPrinter::with_timezone(Utc).print(&[record]);
/// assert_eq!(csv, "\"title\"\n\"A\"\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvPrinter<Tz: TimeZone = Local> {
    timezone: Tz,
}

impl CsvPrinter<Local> {
    /// Printer using the local timezone
    pub fn new() -> Self {
        CsvPrinter { timezone: Local }
    }
}

impl Default for CsvPrinter<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz> CsvPrinter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Printer formatting timestamps in `timezone`
    pub fn with_timezone(timezone: Tz) -> Self {
        CsvPrinter { timezone }
    }

    /// Render `records` (newest first) as CSV text
    ///
    /// Every line ends with LF, including the last. No records at all yields
    /// an empty string, since there is nothing to take columns from.
    pub fn print(&self, records: &[KintoneRecord]) -> String {
        if records.is_empty() {
            return String::new();
        }

        let field_codes = extract_field_codes(records);

        let header = field_codes
            .iter()
            .map(|code| enclose_in_quotation(Some(*code)))
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        let rows = records.iter().rev().map(|record| {
            field_codes
                .iter()
                .map(|code| match record.get(*code) {
                    Some(field) => lex(field, &self.timezone),
                    None => enclose_in_quotation(None),
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR)
        });

        let mut csv = std::iter::once(header)
            .chain(rows)
            .collect::<Vec<_>>()
            .join(LINE_BREAK)
            .replace("\r\n", LINE_BREAK);
        csv.push_str(LINE_BREAK);

        debug!(
            records = records.len(),
            columns = field_codes.len(),
            "printed csv"
        );
        csv
    }

    /// Render `records` and write the CSV text to `output`
    pub fn write(
        &self,
        records: &[KintoneRecord],
        output: &mut dyn Write,
    ) -> Result<(), LoaderError> {
        output.write_all(self.print(records).as_bytes())?;
        output.flush()?;
        Ok(())
    }
}

/// Exportable field codes of the first record, in record order
pub fn extract_field_codes(records: &[KintoneRecord]) -> Vec<&str> {
    let Some(first_record) = records.first() else {
        return Vec::new();
    };
    first_record
        .iter()
        .filter(|(_, field)| is_export_supported_field_type(field.field_type()))
        .map(|(code, _)| code.as_str())
        .collect()
}

/// Render `records` as CSV text with timestamps in local time
pub fn convert_records_to_csv(records: &[KintoneRecord]) -> String {
    CsvPrinter::new().print(records)
}
