//! CSV layout configuration for the import direction
//!
//! When a form has subtables, one record spans several CSV rows. Two reserved
//! columns tie them together: the group column holds an identifier shared by
//! every row of the same record, and the marker column flags the row that
//! carries the record's non-subtable values.

use tracing::warn;

/// Default name of the column flagging the primary row of a group
pub const DEFAULT_MARKER_COLUMN: &str = "*";

/// Default name of the column holding the group identifier
pub const DEFAULT_GROUP_COLUMN: &str = "$id";

/// Reserved column names used to rebuild subtable records
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvLayout {
    /// Column whose non-empty value marks the primary row
    pub marker_column: String,
    /// Column whose value identifies the record a row belongs to
    pub group_column: String,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            marker_column: DEFAULT_MARKER_COLUMN.to_string(),
            group_column: DEFAULT_GROUP_COLUMN.to_string(),
        }
    }
}

impl CsvLayout {
    /// Create a CsvLayout with custom column names
    ///
    /// Empty names fall back to the defaults with a warning.
    pub fn new(marker_column: &str, group_column: &str) -> Self {
        let default = Self::default();

        let marker_column = if marker_column.is_empty() {
            warn!(
                default = %default.marker_column,
                "empty marker column name, using default"
            );
            default.marker_column
        } else {
            marker_column.to_string()
        };

        let group_column = if group_column.is_empty() {
            warn!(
                default = %default.group_column,
                "empty group column name, using default"
            );
            default.group_column
        } else {
            group_column.to_string()
        };

        Self {
            marker_column,
            group_column,
        }
    }
}
