use custbook_core::{Customer, CustomerManager, ExportError};

fn sample_manager() -> CustomerManager {
    let mut manager = CustomerManager::new();
    manager.add_customer(
        Customer::new(
            1,
            "Alice",
            "alice@example.com",
            "555-0100",
            "1990-01-15",
            "1 First St",
        )
        .unwrap(),
    );
    manager.add_customer(
        Customer::new(
            2,
            "Bob",
            "bob@example.com",
            "555-0101",
            "1984-12-31",
            "2 Second St",
        )
        .unwrap(),
    );
    manager
}

#[test]
fn csv_export_writes_header_and_one_row_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");

    sample_manager().export_data(&path, "csv", ',').unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,name,email,phone_number,date_of_birth,address");
    assert_eq!(
        lines[1],
        "1,Alice,alice@example.com,555-0100,1990-01-15,1 First St"
    );
    assert_eq!(
        lines[2],
        "2,Bob,bob@example.com,555-0101,1984-12-31,2 Second St"
    );
}

#[test]
fn csv_export_honors_custom_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");

    sample_manager().export_data(&path, "csv", ';').unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "id;name;email;phone_number;date_of_birth;address");
    assert_eq!(
        lines[1],
        "1;Alice;alice@example.com;555-0100;1990-01-15;1 First St"
    );
}

#[test]
fn csv_export_quotes_fields_containing_the_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");

    let mut manager = CustomerManager::new();
    manager.add_customer(
        Customer::new(
            1,
            "Alice",
            "alice@example.com",
            "555-0100",
            "1990-01-15",
            "12, Elm St",
        )
        .unwrap(),
    );
    manager.export_data(&path, "csv", ',').unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[1],
        "1,Alice,alice@example.com,555-0100,1990-01-15,\"12, Elm St\""
    );
}

#[test]
fn json_export_writes_pretty_array_with_fixed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.json");

    sample_manager().export_data(&path, "json", ',').unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    // 4-space indentation: one level for objects, two for their keys.
    assert!(content.contains("\n    {"), "unexpected layout:\n{content}");
    assert!(
        content.contains("\n        \"id\": 1"),
        "unexpected layout:\n{content}"
    );

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["name"], "Alice");
    assert_eq!(records[0]["date_of_birth"], "1990-01-15");
    assert_eq!(records[1]["id"], 2);
    assert_eq!(records[1]["address"], "2 Second St");
}

#[test]
fn unsupported_format_fails_without_writing_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.xml");

    let err = sample_manager().export_data(&path, "xml", ',').unwrap_err();
    match err {
        ExportError::UnsupportedFormat { requested } => assert_eq!(requested, "xml"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn io_failure_is_reported_not_propagated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-subdir").join("customers.csv");

    let err = sample_manager().export_data(&path, "csv", ',').unwrap_err();
    match err {
        ExportError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn export_of_empty_collection_writes_header_only_csv_and_empty_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let manager = CustomerManager::new();

    let csv_path = dir.path().join("empty.csv");
    manager.export_data(&csv_path, "csv", ',').unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "id,name,email,phone_number,date_of_birth,address\n");

    let json_path = dir.path().join("empty.json");
    manager.export_data(&json_path, "json", ',').unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!([]));
}
