use crate::types::layout::{DEFAULT_GROUP_COLUMN, DEFAULT_MARKER_COLUMN};
use crate::types::CsvLayout;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Convert between CSV files and kintone records
#[derive(Parser, Debug)]
#[command(name = "kintone-csv")]
#[command(about = "Convert between CSV files and kintone records", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Conversion direction
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a CSV file into kintone records (JSON on stdout)
    Import {
        /// Input CSV file path
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,

        /// Form-fields JSON of the target app
        #[arg(
            long = "schema",
            value_name = "FIELDS_JSON",
            help = "Path to the app's form-fields JSON"
        )]
        schema_file: PathBuf,

        /// Column flagging the primary row of a record (subtable forms only)
        #[arg(
            long = "marker-column",
            value_name = "COLUMN",
            help = "Column whose non-empty value marks a record's primary row (default: *)"
        )]
        marker_column: Option<String>,

        /// Column identifying the record a row belongs to (subtable forms only)
        #[arg(
            long = "group-column",
            value_name = "COLUMN",
            help = "Column shared by all rows of one record (default: $id)"
        )]
        group_column: Option<String>,
    },

    /// Convert a kintone records JSON file into CSV (on stdout)
    Export {
        /// Records API response file, newest record first
        #[arg(value_name = "INPUT", help = "Path to the records JSON file")]
        input_file: PathBuf,

        /// Format timestamps in UTC instead of local time
        #[arg(long = "utc")]
        utc: bool,
    },
}

impl Command {
    /// Input file of either direction
    pub fn input_file(&self) -> &Path {
        match self {
            Command::Import { input_file, .. } | Command::Export { input_file, .. } => input_file,
        }
    }

    /// Create a CsvLayout from CLI arguments
    ///
    /// Falls back to the default layout when no column is overridden, and for
    /// the export direction, which does not group rows.
    pub fn to_layout(&self) -> CsvLayout {
        match self {
            Command::Import {
                marker_column,
                group_column,
                ..
            } if marker_column.is_some() || group_column.is_some() => CsvLayout::new(
                marker_column.as_deref().unwrap_or(DEFAULT_MARKER_COLUMN),
                group_column.as_deref().unwrap_or(DEFAULT_GROUP_COLUMN),
            ),
            _ => CsvLayout::default(),
        }
    }
}
