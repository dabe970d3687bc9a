//! Rendering decoded records as txt, csv, json, or a console table.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use csv::WriterBuilder;
use nic_core::{LeapDayPolicy, NicRecord};
use serde_json::{Map, Value};

use crate::error::{OutputError, Result};
use crate::fields::{DEFAULT_FIELDS, Field, NIC_LABEL, parse_fields};

/// Output layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `Label : value` lines.
    #[default]
    Txt,
    Csv,
    Json,
    /// Console grid.
    Table,
}

impl OutputFormat {
    /// Infers a file format from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("txt") {
            Some(Self::Txt)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to render and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fields in display order.
    pub fields: Vec<Field>,
    /// Omit labels (txt), the header row (csv, table), and keys (json).
    pub plain: bool,
    /// Text appended after each txt value.
    pub separator: String,
    /// Prefix each record with the NIC itself.
    pub include_nic: bool,
    /// Date that age and next-birthday are computed against.
    pub as_of: NaiveDate,
    pub leap_day: LeapDayPolicy,
}

impl RenderOptions {
    /// Default fields, labelled, newline separated, NIC included.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            fields: parse_fields(DEFAULT_FIELDS).unwrap_or_default(),
            plain: false,
            separator: "\n".to_string(),
            include_nic: true,
            as_of,
            leap_day: LeapDayPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_include_nic(mut self, include_nic: bool) -> Self {
        self.include_nic = include_nic;
        self
    }

    #[must_use]
    pub fn with_leap_day(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day = policy;
        self
    }

    /// Column labels in output order.
    pub fn headers(&self) -> Vec<&'static str> {
        let nic = self.include_nic.then_some(NIC_LABEL);
        nic.into_iter()
            .chain(self.fields.iter().map(Field::label))
            .collect()
    }

    /// Cell values of `record` in output order.
    pub fn row(&self, record: &NicRecord) -> Vec<String> {
        let nic = self.include_nic.then(|| record.raw_input().to_string());
        nic.into_iter()
            .chain(
                self.fields
                    .iter()
                    .map(|field| field.value(record, self.as_of, self.leap_day)),
            )
            .collect()
    }
}

/// Renders `records` in `format`.
pub fn render(records: &[NicRecord], options: &RenderOptions, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(render_txt(records, options)),
        OutputFormat::Csv => render_csv(records, options),
        OutputFormat::Json => render_json(records, options),
        OutputFormat::Table => Ok(render_table(records, options)),
    }
}

fn render_txt(records: &[NicRecord], options: &RenderOptions) -> String {
    let headers = options.headers();
    let blocks: Vec<String> = records
        .iter()
        .map(|record| {
            let mut block = String::new();
            for (label, value) in headers.iter().zip(options.row(record)) {
                if !options.plain {
                    block.push_str(label);
                    block.push_str(" : ");
                }
                block.push_str(&value);
                block.push_str(&options.separator);
            }
            block
        })
        .collect();
    blocks.join("\n")
}

fn render_csv(records: &[NicRecord], options: &RenderOptions) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    if !options.plain {
        writer.write_record(options.headers())?;
    }
    for record in records {
        writer.write_record(options.row(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| OutputError::Csv(err.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| OutputError::Encoding)
}

fn render_json(records: &[NicRecord], options: &RenderOptions) -> Result<String> {
    let headers = options.headers();
    let items: Vec<Value> = records
        .iter()
        .map(|record| {
            let row = options.row(record);
            if options.plain {
                Value::Array(row.into_iter().map(Value::String).collect())
            } else {
                let object: Map<String, Value> = headers
                    .iter()
                    .zip(row)
                    .map(|(label, value)| ((*label).to_string(), Value::String(value)))
                    .collect();
                Value::Object(object)
            }
        })
        .collect();
    let mut text = serde_json::to_string_pretty(&items)?;
    text.push('\n');
    Ok(text)
}

fn render_table(records: &[NicRecord], options: &RenderOptions) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !options.plain {
        table.set_header(
            options
                .headers()
                .into_iter()
                .map(|label| Cell::new(label).add_attribute(Attribute::Bold)),
        );
    }
    for record in records {
        table.add_row(options.row(record));
    }
    format!("{table}\n")
}

/// Writes rendered output to `path`, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.CSV")),
            Some(OutputFormat::Csv)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.json")),
            Some(OutputFormat::Json)
        );
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out.xml")), None);
    }

    #[test]
    fn test_headers_follow_options() {
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let options = RenderOptions::new(as_of);
        assert_eq!(
            options.headers(),
            vec!["NIC", "Date of Birth", "Age", "Gender", "Format"]
        );
        let options = options
            .with_include_nic(false)
            .with_fields(vec![Field::Voting]);
        assert_eq!(options.headers(), vec!["Voting"]);
    }
}
