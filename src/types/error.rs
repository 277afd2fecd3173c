//! Error types for kintone-csv
//!
//! This module defines all error types that can occur while converting
//! between CSV and kintone records.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: file not found, permission denied, etc. Only the
//!   strategies and the CLI touch files, so the conversion core never
//!   produces these.
//! - **CSV Parsing Errors**: unbalanced quotes, inconsistent column counts
//! - **JSON Errors**: schema or record documents that fail to decode,
//!   including values whose shape does not match their field type
//! - **Output Errors**: results that cannot be serialized
//!
//! A group without a primary row, or a field of an unsupported type, is not
//! an error. Those are dropped silently and only show up in debug logs.

use std::path::Path;
use thiserror::Error;

/// Main error type for kintone-csv
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoaderError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV text could not be tokenized
    ///
    /// The whole conversion fails; there is no recovery from malformed CSV.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A schema or records document could not be decoded
    #[error("JSON error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    JsonError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the decoding error
        message: String,
    },

    /// Converted records could not be written out
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for LoaderError {
    fn from(error: std::io::Error) -> Self {
        LoaderError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LoaderError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LoaderError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors without a position
        let line = Some(error.line()).filter(|&l| l > 0);

        LoaderError::JsonError {
            line,
            message: error.to_string(),
        }
    }
}

impl LoaderError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &Path) -> Self {
        LoaderError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an OutputError error
    pub fn output_error(message: &str) -> Self {
        LoaderError::OutputError {
            message: message.to_string(),
        }
    }
}
