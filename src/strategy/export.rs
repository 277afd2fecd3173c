//! Export strategy: kintone records file to CSV
//!
//! Reads a records API response (`{"records": [...]}`, newest first) and
//! writes it as CSV.

use crate::io::CsvPrinter;
use crate::strategy::{read_input, ConversionStrategy};
use crate::types::{LoaderError, RecordsDocument};
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Timezone used to format timestamp fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputTimezone {
    #[default]
    Local,
    Utc,
}

/// Export strategy
#[derive(Debug, Clone, Copy)]
pub struct ExportStrategy {
    timezone: OutputTimezone,
}

impl ExportStrategy {
    pub fn new(timezone: OutputTimezone) -> Self {
        Self { timezone }
    }
}

impl ConversionStrategy for ExportStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LoaderError> {
        let document: RecordsDocument = serde_json::from_str(&read_input(input_path)?)?;
        info!(
            input = %input_path.display(),
            records = document.records.len(),
            timezone = ?self.timezone,
            "exporting records"
        );

        match self.timezone {
            OutputTimezone::Local => CsvPrinter::new().write(&document.records, output),
            OutputTimezone::Utc => CsvPrinter::with_timezone(Utc).write(&document.records, output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary file for testing
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_export_reverses_records() {
        let input = create_temp_file(
            r#"{"records": [
                {"title": {"type": "SINGLE_LINE_TEXT", "value": "A"}},
                {"title": {"type": "SINGLE_LINE_TEXT", "value": "B"}}
            ], "totalCount": null}"#,
        );

        let mut output = Vec::new();
        ExportStrategy::new(OutputTimezone::Utc)
            .process(input.path(), &mut output)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "\"title\"\n\"B\"\n\"A\"\n");
    }

    #[test]
    fn test_export_formats_timestamps_in_utc() {
        let input = create_temp_file(
            r#"{"records": [{"updated": {"type": "UPDATED_TIME", "value": "2024-02-29T15:04:00+09:00"}}]}"#,
        );

        let mut output = Vec::new();
        ExportStrategy::new(OutputTimezone::Utc)
            .process(input.path(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\"updated\"\n\"2024/02/29 06:04\"\n"
        );
    }

    #[test]
    fn test_export_null_timestamp_prints_empty_cell() {
        let input = create_temp_file(
            r#"{"records": [{
                "title": {"type": "SINGLE_LINE_TEXT", "value": "A"},
                "updated": {"type": "UPDATED_TIME", "value": null}
            }]}"#,
        );

        let mut output = Vec::new();
        ExportStrategy::new(OutputTimezone::Utc)
            .process(input.path(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\"title\",\"updated\"\n\"A\",\"\"\n"
        );
    }

    #[test]
    fn test_export_rejects_mismatched_value_shape() {
        let input = create_temp_file(
            r#"{"records": [{"owner": {"type": "CREATOR", "value": "not-an-object"}}]}"#,
        );

        let mut output = Vec::new();
        let result = ExportStrategy::new(OutputTimezone::Utc).process(input.path(), &mut output);

        assert!(matches!(result, Err(LoaderError::JsonError { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_export_empty_records() {
        let input = create_temp_file(r#"{"records": []}"#);

        let mut output = Vec::new();
        ExportStrategy::new(OutputTimezone::Local)
            .process(input.path(), &mut output)
            .unwrap();

        assert!(output.is_empty());
    }
}
