//! Integration tests for rendering decoded records.

use chrono::NaiveDate;
use nic_core::{NicRecord, decode};
use nic_output::{Field, OutputFormat, RenderOptions, parse_fields, render, write_output};

fn records() -> Vec<NicRecord> {
    vec![decode("851234567V").unwrap(), decode("199923456").unwrap()]
}

fn options() -> RenderOptions {
    RenderOptions::new(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
}

#[test]
fn txt_labeled() {
    let output = render(&records(), &options(), OutputFormat::Txt).unwrap();
    insta::assert_snapshot!("txt_labeled", output);
}

#[test]
fn txt_plain_with_separator() {
    let options = options()
        .with_fields(parse_fields("bvn").unwrap())
        .with_plain(true)
        .with_include_nic(false)
        .with_separator(" | ");
    let output = render(&records(), &options, OutputFormat::Txt).unwrap();
    assert_eq!(
        output,
        "1985-05-03 | Eligible | Today! | \n1999-08-22 | Unknown | 111 days | "
    );
}

#[test]
fn csv_labeled() {
    let output = render(&records(), &options(), OutputFormat::Csv).unwrap();
    insta::assert_snapshot!("csv_labeled", output);
}

#[test]
fn csv_plain_has_no_header() {
    let options = options()
        .with_fields(vec![Field::BirthYear, Field::DayOfYear])
        .with_plain(true);
    let output = render(&records(), &options, OutputFormat::Csv).unwrap();
    assert_eq!(output, "851234567V,1985,123\n199923456,1999,234\n");
}

#[test]
fn json_labeled() {
    let output = render(&records(), &options(), OutputFormat::Json).unwrap();
    insta::assert_snapshot!("json_labeled", output);
}

#[test]
fn json_plain_is_nested_arrays() {
    let options = options()
        .with_fields(vec![Field::Sex])
        .with_plain(true)
        .with_include_nic(false);
    let output = render(&records(), &options, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, serde_json::json!([["Male"], ["Male"]]));
}

#[test]
fn table_contains_every_value() {
    let output = render(&records(), &options(), OutputFormat::Table).unwrap();
    for expected in ["NIC", "Date of Birth", "851234567V", "Post-2016", "24 years"] {
        assert!(output.contains(expected), "missing {expected:?} in\n{output}");
    }
}

#[test]
fn empty_batch_renders_header_only() {
    let output = render(&[], &options(), OutputFormat::Csv).unwrap();
    assert_eq!(output, "NIC,Date of Birth,Age,Gender,Format\n");
    assert_eq!(render(&[], &options(), OutputFormat::Txt).unwrap(), "");
}

#[test]
fn write_output_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.csv");
    write_output(&path, "NIC\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "NIC\n");
}
