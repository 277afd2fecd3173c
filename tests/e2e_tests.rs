//! End-to-end integration tests
//!
//! These tests validate both conversion pipelines using predefined fixtures
//! under tests/fixtures/:
//! - `import/<name>/` holds `input.csv` and `schema.json`; the records written
//!   by the import strategy must equal `expected.json`
//! - `export/<name>/` holds `records.json`; the CSV written by the export
//!   strategy (timestamps in UTC) must equal `expected.csv` byte for byte

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use kintone_csv::cli::Command;
    use kintone_csv::strategy::create_strategy;
    use kintone_csv::types::{FieldProperty, FieldSchema, FieldType, RecordsDocument};
    use kintone_csv::{parse_csv, CsvLayout, CsvPrinter, KintoneField, ParsedValue};
    use rstest::rstest;
    use serde_json::Value;
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;

    /// Run the strategy for `command` and return what it wrote
    fn run_command(command: &Command) -> String {
        let strategy = create_strategy(command);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        strategy
            .process(command.input_file(), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to convert {:?}: {}", command, e));
        temp_output.flush().expect("Failed to flush temp file");

        fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
    }

    fn fixture_path(direction: &str, fixture_name: &str, file: &str) -> PathBuf {
        let path = PathBuf::from(format!("tests/fixtures/{}/{}/{}", direction, fixture_name, file));
        assert!(path.exists(), "Fixture file not found: {}", path.display());
        path
    }

    fn run_import_fixture(fixture_name: &str, layout: Option<(&str, &str)>) {
        let command = Command::Import {
            input_file: fixture_path("import", fixture_name, "input.csv"),
            schema_file: fixture_path("import", fixture_name, "schema.json"),
            marker_column: layout.map(|(marker, _)| marker.to_string()),
            group_column: layout.map(|(_, group)| group.to_string()),
        };
        let expected_path = fixture_path("import", fixture_name, "expected.json");

        let actual_output = run_command(&command);

        let actual: Value = serde_json::from_str(&actual_output)
            .unwrap_or_else(|e| panic!("Import output is not JSON: {}\n{}", e, actual_output));
        let expected: Value = serde_json::from_str(
            &fs::read_to_string(&expected_path).expect("Failed to read expected file"),
        )
        .expect("Expected file is not JSON");

        assert_eq!(
            actual, expected,
            "\n\nOutput mismatch for import fixture: {}\n\nActual output:\n{}\n",
            fixture_name, actual_output
        );
    }

    fn run_export_fixture(fixture_name: &str) {
        let command = Command::Export {
            input_file: fixture_path("export", fixture_name, "records.json"),
            utc: true,
        };
        let expected_path = fixture_path("export", fixture_name, "expected.csv");

        let actual_output = run_command(&command);
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path.display(), e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for export fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("flat_records", None)]
    #[case("subtable_groups", None)]
    #[case("unsupported_fields", None)]
    #[case("custom_layout", Some(("PRIMARY", "record")))]
    fn test_import_fixtures(#[case] fixture: &str, #[case] layout: Option<(&str, &str)>) {
        run_import_fixture(fixture, layout);
    }

    #[rstest]
    #[case("basic_types")]
    #[case("first_record_columns")]
    #[case("empty_records")]
    fn test_export_fixtures(#[case] fixture: &str) {
        run_export_fixture(fixture);
    }

    #[test]
    fn test_import_malformed_csv_fails() {
        let mut csv = NamedTempFile::new().expect("Failed to create temp file");
        csv.write_all(b"\"title\",\"price\"\n\"A\"\n")
            .expect("Failed to write to temp file");

        let command = Command::Import {
            input_file: csv.path().to_path_buf(),
            schema_file: fixture_path("import", "flat_records", "schema.json"),
            marker_column: None,
            group_column: None,
        };

        let mut output = Vec::new();
        let result = create_strategy(&command).process(command.input_file(), &mut output);

        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_missing_input_file_fails() {
        let command = Command::Export {
            input_file: PathBuf::from("tests/fixtures/export/nope/records.json"),
            utc: true,
        };

        let mut output = Vec::new();
        let result = create_strategy(&command).process(command.input_file(), &mut output);

        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("File not found"));
    }

    /// Export records, import the CSV again, and compare field by field
    #[test]
    fn test_round_trip_preserves_values() {
        let json = fs::read_to_string(Path::new("tests/fixtures/export/basic_types/records.json"))
            .expect("Failed to read records fixture");
        let document: RecordsDocument = serde_json::from_str(&json).expect("Invalid records");

        let csv = CsvPrinter::with_timezone(Utc).print(&document.records);

        let schema: FieldSchema = [
            FieldProperty::new("record_no", FieldType::RecordNumber),
            FieldProperty::new("title", FieldType::SingleLineText),
            FieldProperty::new("memo", FieldType::MultiLineText),
            FieldProperty::new("price", FieldType::Number),
            FieldProperty::new("tags", FieldType::MultiSelect),
            FieldProperty::new("options", FieldType::CheckBox),
        ]
        .into_iter()
        .collect();

        let imported = parse_csv(&csv, &schema, &CsvLayout::default()).expect("Re-import failed");
        assert_eq!(imported.len(), document.records.len());

        // Rows come back oldest first
        for (parsed, original) in imported.iter().zip(document.records.iter().rev()) {
            assert_eq!(parsed.len(), 5);
            for (code, value) in parsed {
                let expected = match &original[code.as_str()] {
                    KintoneField::Text { value, .. } => {
                        ParsedValue::Text(value.clone().unwrap_or_default().replace("\r\n", "\n"))
                    }
                    KintoneField::MultiValue { value, .. } => ParsedValue::Multi(value.clone()),
                    other => panic!("Unexpected field for {}: {:?}", code, other),
                };
                assert_eq!(value, &expected, "Round trip mismatch for field {}", code);
            }
        }
    }
}
