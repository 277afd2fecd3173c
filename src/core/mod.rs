//! Core conversion logic
//!
//! This module contains the conversion components. None of them perform I/O.
//! - `classifier` - Import and export field type allow-lists
//! - `formatter` - CSV cell to field value (import direction)
//! - `grouping` - Partitioning of CSV rows into per-record groups
//! - `converter` - CSV rows to records, including subtable reconstruction
//! - `lexer` - Field value to CSV cell (export direction)

pub mod classifier;
pub mod converter;
pub mod formatter;
pub mod grouping;
pub mod lexer;

pub use classifier::{is_export_supported_field_type, is_import_supported_field_type};
pub use converter::convert_to_kintone_records;
pub use formatter::format_to_record_value;
pub use grouping::{group_by_record, RecordGroup};
pub use lexer::{enclose_in_quotation, lex};
