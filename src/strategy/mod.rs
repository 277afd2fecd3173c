//! Conversion strategy module
//!
//! This module defines the Strategy pattern for complete conversion
//! pipelines: reading an input file, converting it in one direction, and
//! writing the result. The conversion core stays free of I/O; everything
//! touching the file system lives here.

use crate::cli::Command;
use crate::types::LoaderError;
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod export;
pub mod import;

pub use export::{ExportStrategy, OutputTimezone};
pub use import::ImportStrategy;

/// Conversion strategy trait for complete conversion pipelines
pub trait ConversionStrategy: Send + Sync {
    /// Convert the file at `input_path` and write the result to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input file cannot be found or read
    /// - The input cannot be decoded (malformed CSV or JSON)
    /// - Output cannot be written
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LoaderError>;
}

/// Create the conversion strategy for a CLI command
pub fn create_strategy(command: &Command) -> Box<dyn ConversionStrategy> {
    match command {
        Command::Import { schema_file, .. } => Box::new(ImportStrategy::new(
            schema_file.clone(),
            command.to_layout(),
        )),
        Command::Export { utc, .. } => {
            let timezone = if *utc {
                OutputTimezone::Utc
            } else {
                OutputTimezone::Local
            };
            Box::new(ExportStrategy::new(timezone))
        }
    }
}

/// Read a whole UTF-8 file, reporting a missing file distinctly
pub(crate) fn read_input(path: &Path) -> Result<String, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::file_not_found(path));
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Path::new("does/not/exist.csv"));
        assert_eq!(
            result,
            Err(LoaderError::FileNotFound {
                path: "does/not/exist.csv".to_string()
            })
        );
    }

    #[test]
    fn test_strategies_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImportStrategy>();
        assert_send_sync::<ExportStrategy>();
    }

    #[test]
    fn test_create_strategy_for_each_command() {
        let import = Command::Import {
            input_file: PathBuf::from("in.csv"),
            schema_file: PathBuf::from("fields.json"),
            marker_column: None,
            group_column: None,
        };
        let export = Command::Export {
            input_file: PathBuf::from("records.json"),
            utc: true,
        };

        // Both fail on the missing input, through their own pipelines
        let mut output = Vec::new();
        assert!(create_strategy(&import)
            .process(Path::new("missing.csv"), &mut output)
            .is_err());
        assert!(create_strategy(&export)
            .process(Path::new("missing.json"), &mut output)
            .is_err());
        assert!(output.is_empty());
    }
}
