//! File loading entry points.

use std::fs;
use std::path::Path;

use nic_core::Decoder;
use tracing::{debug, info};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::format::InputFormat;
use crate::json_table::read_json_table;
use crate::table::{ColumnSelection, Table};

/// Header given to the single column of a plain text file.
pub const TEXT_COLUMN: &str = "value";

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Reads a plain text file: one value per line, trimmed, blank lines dropped.
pub fn read_text_lines(path: &Path) -> Result<Vec<String>> {
    ensure_file(path)?;
    let text = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Loads any input file as a table.
///
/// Text files become a single [`TEXT_COLUMN`] column.
pub fn load_table(path: &Path, format: InputFormat) -> Result<Table> {
    ensure_file(path)?;
    let table = match format {
        InputFormat::Txt => Table::new(
            vec![TEXT_COLUMN.to_string()],
            read_text_lines(path)?
                .into_iter()
                .map(|line| vec![line])
                .collect(),
        ),
        InputFormat::Csv => read_csv_table(path)?,
        InputFormat::Json => read_json_table(path)?,
    };
    debug!(
        path = %path.display(),
        format = %format,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded table"
    );
    Ok(table)
}

/// Loads the NIC strings held in `path`.
///
/// Text files yield every non-blank line so that malformed entries still
/// reach the decoder and get reported. CSV and JSON files yield only the
/// values in the selected columns that decode successfully.
pub fn load_nics(
    path: &Path,
    format: Option<InputFormat>,
    selection: &ColumnSelection,
    decoder: &Decoder,
) -> Result<Vec<String>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    if !format.is_tabular() {
        let lines = read_text_lines(path)?;
        info!(path = %path.display(), format = %format, count = lines.len(), "read input file");
        return Ok(lines);
    }

    let table = load_table(path, format)?;
    let columns = table.resolve(selection, decoder)?;
    let selected: Vec<&str> = columns
        .iter()
        .filter_map(|&index| table.headers.get(index).map(String::as_str))
        .collect();
    let nics = table.extract_nics(&columns, decoder);
    info!(
        path = %path.display(),
        format = %format,
        columns = ?selected,
        count = nics.len(),
        "read input file"
    );
    Ok(nics)
}
