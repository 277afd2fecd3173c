//! Record grouping for subtable reconstruction
//!
//! A record with subtables is flattened into several CSV rows that share a
//! group identifier. Grouping is a single indexing pass keyed by that
//! identifier; the caller then merges each group in encounter order.

use crate::types::CsvRow;
use indexmap::IndexMap;

/// CSV rows that together describe one record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup<'a> {
    /// Shared group identifier
    pub id: &'a str,
    /// Member rows in input order
    pub rows: Vec<&'a CsvRow>,
}

impl<'a> RecordGroup<'a> {
    /// First row whose marker cell is non-empty
    pub fn primary_row(&self, marker_column: &str) -> Option<&'a CsvRow> {
        self.rows.iter().copied().find(|row| {
            row.get(marker_column)
                .is_some_and(|marker| !marker.is_empty())
        })
    }
}

/// Partition rows by the value of `group_column`
///
/// Groups come out in the order their identifier is first seen. Rows without
/// the column fall into the group with the empty identifier.
pub fn group_by_record<'a>(rows: &'a [CsvRow], group_column: &str) -> Vec<RecordGroup<'a>> {
    let mut index: IndexMap<&'a str, Vec<&'a CsvRow>> = IndexMap::new();
    for row in rows {
        let id = row.get(group_column).unwrap_or_default();
        index.entry(id).or_default().push(row);
    }
    index
        .into_iter()
        .map(|(id, rows)| RecordGroup { id, rows })
        .collect()
}
