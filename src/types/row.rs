//! Header-keyed CSV row

use indexmap::IndexMap;

/// One CSV data line, keyed by header name in column order
///
/// When a header name repeats, the later column's value wins and the first
/// column's position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    cells: IndexMap<String, String>,
}

impl CsvRow {
    /// Build a row by zipping header names with cell values
    pub fn from_cells<'a, H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        headers.into_iter().zip(values).collect()
    }

    /// Cell value for `column`, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Iterate `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        CsvRow {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.to_string(), value.to_string()))
                .collect(),
        }
    }
}
