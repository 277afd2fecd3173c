//! CSV rows to kintone records
//!
//! Without subtables every CSV row is a record. With subtables the rows are
//! grouped by the layout's group column, and each group with a primary row
//! becomes one record:
//!
//! ```text
//! $id  *  title   item_name  qty        record 1: title = "A"
//! 1    *  A       pen        2    ──►             items = [pen/2, ink/5]
//! 1       (A)     ink        5
//! 2       B       cap        1    ──►   (dropped: no primary row)
//! ```
//!
//! Groups without a primary row are dropped without raising an error.

use crate::core::classifier::is_import_supported_field_type;
use crate::core::formatter::format_to_record_value;
use crate::core::grouping::{group_by_record, RecordGroup};
use crate::types::{CsvLayout, CsvRow, FieldProperty, FieldSchema, ParsedRecord, ParsedValue};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Convert tokenized CSV rows into records described by `schema`
pub fn convert_to_kintone_records(
    rows: &[CsvRow],
    schema: &FieldSchema,
    layout: &CsvLayout,
) -> Vec<ParsedRecord> {
    if !schema.has_subtable() {
        let records: Vec<ParsedRecord> = rows
            .iter()
            .map(|row| format_row(row, &schema.properties))
            .collect();
        debug!(rows = rows.len(), records = records.len(), "converted rows");
        return records;
    }

    let groups = group_by_record(rows, &layout.group_column);
    let mut records = Vec::with_capacity(groups.len());
    for group in &groups {
        let Some(primary_row) = group.primary_row(&layout.marker_column) else {
            debug!(
                group = group.id,
                rows = group.rows.len(),
                marker_column = %layout.marker_column,
                "dropping group without primary row"
            );
            continue;
        };
        records.push(build_subtable_record(primary_row, group, schema));
    }
    debug!(
        rows = rows.len(),
        groups = groups.len(),
        records = records.len(),
        "converted grouped rows"
    );
    records
}

/// Format every cell of `row` whose column is an importable field in `fields`
fn format_row(row: &CsvRow, fields: &IndexMap<String, FieldProperty>) -> ParsedRecord {
    row.iter()
        .filter_map(|(code, value)| {
            let property = fields.get(code)?;
            if !is_import_supported_field_type(property.field_type) {
                trace!(field = code, field_type = %property.field_type, "skipping unsupported field");
                return None;
            }
            Some((
                code.to_string(),
                format_to_record_value(property.field_type, value),
            ))
        })
        .collect()
}

/// Merge a group's primary values with one array per subtable
fn build_subtable_record(
    primary_row: &CsvRow,
    group: &RecordGroup<'_>,
    schema: &FieldSchema,
) -> ParsedRecord {
    let mut record = format_row(primary_row, &schema.properties);

    for (code, subtable) in schema.subtables() {
        let rows = group
            .rows
            .iter()
            .map(|row| format_row(row, &subtable.fields))
            .collect();
        record.insert(code.to_string(), ParsedValue::Subtable(rows));
    }
    record
}
