//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV tokenizing and the import entry point (`parse_csv`)
//! - `printer` - CSV rendering of kintone records (export direction)

pub mod csv_format;
pub mod printer;

pub use csv_format::{parse_csv, tokenize};
pub use printer::{convert_records_to_csv, extract_field_codes, CsvPrinter};
