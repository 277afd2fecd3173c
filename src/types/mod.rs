//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `field`: Field schema and field type tags
//! - `record`: Parsed records (import output) and kintone records (export input)
//! - `row`: Header-keyed CSV rows produced by the tokenizer
//! - `layout`: Reserved CSV columns for subtable grouping
//! - `error`: Error types

pub mod error;
pub mod field;
pub mod layout;
pub mod record;
pub mod row;

pub use error::LoaderError;
pub use field::{FieldProperty, FieldSchema, FieldType};
pub use layout::CsvLayout;
pub use record::{
    KintoneField, KintoneRecord, ParsedRecord, ParsedRecordsDocument, ParsedValue,
    RecordsDocument, UserEntity,
};
pub use row::CsvRow;
