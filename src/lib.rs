//! kintone CSV conversion library
//! # Overview
//!
//! This library converts between flat CSV text and the schema-typed records of
//! a kintone app, in both directions:
//!
//! - **Import**: CSV text + form schema → records ready to be written,
//!   including subtables rebuilt from several CSV rows
//! - **Export**: records as read from the platform → CSV text
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (schema, records, rows, layout, errors)
//! - [`core`] - Conversion logic, free of I/O:
//!   - [`core::classifier`] - Import and export field type allow-lists
//!   - [`core::formatter`] - CSV cell to field value
//!   - [`core::grouping`] - Grouping of CSV rows per record
//!   - [`core::converter`] - CSV rows to records
//!   - [`core::lexer`] - Field value to CSV cell
//! - [`io`] - CSV tokenizing and printing
//! - [`strategy`] - File-to-output pipelines for each direction
//! - [`cli`] - CLI arguments parsing
//!
//! # Subtables
//!
//! When the form has a subtable, one record spans several CSV rows. Rows are
//! grouped by a group column (`$id` by default) and the row whose marker
//! column (`*` by default) is non-empty supplies the record's own fields.
//! Every row of the group supplies one subtable row. Groups without a marked
//! row are dropped.
//!
//! # Export columns
//!
//! Columns are taken from the first record only, and rows are printed in
//! reverse input order (the platform returns newest first).

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use io::{convert_records_to_csv, parse_csv, tokenize, CsvPrinter};
pub use types::{
    CsvLayout, CsvRow, FieldProperty, FieldSchema, FieldType, KintoneField, KintoneRecord,
    LoaderError, ParsedRecord, ParsedValue,
};
