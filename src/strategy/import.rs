//! Import strategy: CSV file to kintone records
//!
//! Reads the form schema and the CSV file, converts the rows, and writes the
//! records as a pretty-printed JSON document in the platform's write shape:
//!
//! ```json
//! {"records": [{"title": {"value": "A"}}]}
//! ```

use crate::io::parse_csv;
use crate::strategy::{read_input, ConversionStrategy};
use crate::types::{CsvLayout, FieldSchema, LoaderError, ParsedRecordsDocument};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Import strategy
///
/// # Examples
///
/// ```no_run
/// use kintone_csv::strategy::{ConversionStrategy, ImportStrategy};
/// use kintone_csv::types::CsvLayout;
/// use std::path::{Path, PathBuf};
///
/// let strategy = ImportStrategy::new(PathBuf::from("fields.json"), CsvLayout::default());
/// let mut output = std::io::stdout();
///
/// strategy.process(Path::new("records.csv"), &mut output)
///     .expect("Import failed");
/// ```
#[derive(Debug, Clone)]
pub struct ImportStrategy {
    /// Path to the form-fields JSON document
    schema_path: PathBuf,
    /// Reserved column names for subtable grouping
    layout: CsvLayout,
}

impl ImportStrategy {
    pub fn new(schema_path: PathBuf, layout: CsvLayout) -> Self {
        Self {
            schema_path,
            layout,
        }
    }
}

impl ConversionStrategy for ImportStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LoaderError> {
        let schema = FieldSchema::from_json(&read_input(&self.schema_path)?)?;
        let csv = read_input(input_path)?;

        let records = parse_csv(&csv, &schema, &self.layout)?;
        info!(
            input = %input_path.display(),
            records = records.len(),
            "imported csv"
        );

        serde_json::to_writer_pretty(
            &mut *output,
            &ParsedRecordsDocument {
                records: &records,
            },
        )
        .map_err(|e| LoaderError::output_error(&e.to_string()))?;
        writeln!(output)?;
        output.flush()?;

        Ok(())
    }
}
