//! CSV tokenizing for the import direction
//!
//! This module turns CSV text into header-keyed rows and runs them through
//! the converter:
//! - `tokenize` - CSV text to [`CsvRow`]s (header row required)
//! - `parse_csv` - CSV text to [`ParsedRecord`]s for a given schema
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::convert_to_kintone_records;
use crate::types::{CsvLayout, CsvRow, FieldSchema, LoaderError, ParsedRecord};
use csv::ReaderBuilder;
use tracing::debug;

/// Tokenize CSV text into header-keyed rows
///
/// The CSV reader is configured to:
/// - Treat the first line as the header
/// - Reject rows whose field count differs from the header
/// - Keep cell whitespace as-is
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns `LoaderError::ParseError` (with the line number when known) for
/// malformed CSV.
pub fn tokenize(csv: &str) -> Result<Vec<CsvRow>, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv.as_bytes());

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(CsvRow::from_cells(headers.iter(), record.iter()));
    }

    debug!(columns = headers.len(), rows = rows.len(), "tokenized csv");
    Ok(rows)
}

/// Parse CSV text into records shaped by `schema`
///
/// # Arguments
///
/// * `csv` - Raw CSV text including the header row
/// * `schema` - Form schema of the target app
/// * `layout` - Reserved columns used when the schema has subtables
///
/// # Errors
///
/// Only malformed CSV fails. Unknown columns, unsupported field types and
/// groups without a primary row are dropped silently.
pub fn parse_csv(
    csv: &str,
    schema: &FieldSchema,
    layout: &CsvLayout,
) -> Result<Vec<ParsedRecord>, LoaderError> {
    let rows = tokenize(csv)?;
    Ok(convert_to_kintone_records(&rows, schema, layout))
}
