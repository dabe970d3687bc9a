//! Integration tests for loading NIC inputs from files.

use std::fs;
use std::path::{Path, PathBuf};

use nic_core::Decoder;
use nic_ingest::{
    ColumnSelection, IngestError, InputFormat, PREVIEW_ROWS, TEXT_COLUMN, load_nics, load_table,
};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn text_file_keeps_every_non_blank_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "nics.txt",
        "851234567V\n\n  199923456  \nnot-a-nic\n",
    );

    let nics = load_nics(&path, None, &ColumnSelection::Auto, &Decoder::default()).unwrap();
    assert_eq!(nics, vec!["851234567V", "199923456", "not-a-nic"]);
}

#[test]
fn unknown_extension_is_read_as_text() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "nics.list", "851234567V\n");
    let table = load_table(&path, InputFormat::from_path(&path)).unwrap();
    assert_eq!(table.headers, vec![TEXT_COLUMN]);
    assert_eq!(table.rows, vec![vec!["851234567V".to_string()]]);
}

#[test]
fn csv_auto_selects_nic_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "people.csv",
        "\u{feff}Name, NIC ,Spouse NIC\n\
         Amal,851234567V,927201234X\n\
         Nimal,199923456,\n\
         ,,\n\
         Sunil,bad,200056078\n",
    );

    let decoder = Decoder::default();
    let table = load_table(&path, InputFormat::Csv).unwrap();
    assert_eq!(table.headers, vec!["Name", "NIC", "Spouse NIC"]);
    assert_eq!(table.rows.len(), 3);

    let summaries = table.column_summaries(&decoder, PREVIEW_ROWS);
    let candidates: Vec<&str> = summaries
        .iter()
        .filter(|s| s.nic_candidate)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(candidates, vec!["NIC", "Spouse NIC"]);

    let nics = load_nics(&path, None, &ColumnSelection::Auto, &decoder).unwrap();
    assert_eq!(
        nics,
        vec!["851234567V", "927201234X", "199923456", "200056078"]
    );
}

#[test]
fn csv_explicit_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "people.csv",
        "Name,NIC,Spouse NIC\nAmal,851234567V,927201234X\n",
    );
    let decoder = Decoder::default();

    let selection: ColumnSelection = "spouse nic".parse().unwrap();
    let nics = load_nics(&path, None, &selection, &decoder).unwrap();
    assert_eq!(nics, vec!["927201234X"]);

    let err = load_nics(&path, None, &ColumnSelection::Indices(vec![7]), &decoder).unwrap_err();
    assert!(matches!(err, IngestError::UnknownColumn { .. }));
}

#[test]
fn json_array_of_objects() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "people.json",
        r#"[
            {"name": "Amal", "nic": "851234567V"},
            {"name": "Nimal", "nic": 199923456},
            {"name": "Kamala"}
        ]"#,
    );

    let nics = load_nics(
        &path,
        None,
        &ColumnSelection::Names(vec!["nic".to_string()]),
        &Decoder::default(),
    )
    .unwrap();
    assert_eq!(nics, vec!["851234567V", "199923456"]);
}

#[test]
fn json_with_wrong_layout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "people.json", r#"{"nic": "851234567V"}"#);
    let err = load_table(&path, InputFormat::Json).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedJson { .. }));

    let path = write_file(dir.path(), "broken.json", "[{");
    let err = load_table(&path, InputFormat::Json).unwrap_err();
    assert!(matches!(err, IngestError::JsonParse { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");
    let err = load_nics(&path, None, &ColumnSelection::Auto, &Decoder::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "export.dat", "nic\n851234567V\n");
    let nics = load_nics(
        &path,
        Some(InputFormat::Csv),
        &ColumnSelection::Auto,
        &Decoder::default(),
    )
    .unwrap();
    assert_eq!(nics, vec!["851234567V"]);
}
