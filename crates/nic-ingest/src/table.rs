//! Tabular inputs: column summaries, previews, and NIC extraction.

use std::str::FromStr;

use nic_core::Decoder;

use crate::error::{IngestError, Result};

/// Number of leading rows inspected when marking candidate columns.
pub const PREVIEW_ROWS: usize = 10;

/// Headers and trimmed cell values loaded from a CSV or JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A column and whether it looks like it holds NIC numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    /// At least one of the inspected cells decodes as a NIC.
    pub nic_candidate: bool,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Summarizes every column, checking the first `preview_rows` cells for NICs.
    pub fn column_summaries(&self, decoder: &Decoder, preview_rows: usize) -> Vec<ColumnSummary> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let nic_candidate = self
                    .rows
                    .iter()
                    .take(preview_rows)
                    .filter_map(|row| row.get(index))
                    .any(|value| decoder.is_valid(value));
                ColumnSummary {
                    index,
                    name: name.clone(),
                    nic_candidate,
                }
            })
            .collect()
    }

    /// Indices of columns marked as NIC candidates.
    pub fn candidate_columns(&self, decoder: &Decoder) -> Vec<usize> {
        self.column_summaries(decoder, PREVIEW_ROWS)
            .into_iter()
            .filter(|summary| summary.nic_candidate)
            .map(|summary| summary.index)
            .collect()
    }

    /// Rows in the 1-based inclusive `range`, clamped to the table.
    pub fn preview(&self, range: RowRange) -> &[Vec<String>] {
        let start = range.start.saturating_sub(1).min(self.rows.len());
        let end = range.end.min(self.rows.len()).max(start);
        &self.rows[start..end]
    }

    /// Resolves a selection to column indices.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnknownColumn`] if an index is out of range or
    /// a name matches no header.
    pub fn resolve(&self, selection: &ColumnSelection, decoder: &Decoder) -> Result<Vec<usize>> {
        match selection {
            ColumnSelection::Auto => Ok(self.candidate_columns(decoder)),
            ColumnSelection::Indices(indices) => indices
                .iter()
                .map(|&index| {
                    if index < self.headers.len() {
                        Ok(index)
                    } else {
                        Err(IngestError::UnknownColumn {
                            column: index.to_string(),
                        })
                    }
                })
                .collect(),
            ColumnSelection::Names(names) => names
                .iter()
                .map(|name| {
                    self.headers
                        .iter()
                        .position(|header| header.eq_ignore_ascii_case(name))
                        .ok_or_else(|| IngestError::UnknownColumn {
                            column: name.clone(),
                        })
                })
                .collect(),
        }
    }

    /// Collects values from `columns` that decode as NICs, row by row.
    ///
    /// Empty cells and values that fail to decode are skipped.
    pub fn extract_nics(&self, columns: &[usize], decoder: &Decoder) -> Vec<String> {
        let mut nics = Vec::new();
        for row in &self.rows {
            for &column in columns {
                let Some(value) = row.get(column) else {
                    continue;
                };
                if !value.is_empty() && decoder.is_valid(value) {
                    nics.push(value.clone());
                }
            }
        }
        nics
    }
}

/// Which columns (CSV) or keys (JSON) to read NICs from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnSelection {
    /// Every column with NIC-looking values in its first rows.
    #[default]
    Auto,
    /// Zero-based column indices.
    Indices(Vec<usize>),
    /// Header names or JSON keys, matched case-insensitively.
    Names(Vec<String>),
}

impl FromStr for ColumnSelection {
    type Err = IngestError;

    /// Parses `"auto"`, `"0,2"`, or `"NIC,Spouse NIC"`.
    ///
    /// A list is read as indices only when every entry is a number.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() || (parts.len() == 1 && parts[0].eq_ignore_ascii_case("auto")) {
            return Ok(Self::Auto);
        }
        let indices: std::result::Result<Vec<usize>, _> =
            parts.iter().map(|part| part.parse::<usize>()).collect();
        Ok(match indices {
            Ok(indices) => Self::Indices(indices),
            Err(_) => Self::Names(parts.iter().map(|part| (*part).to_string()).collect()),
        })
    }
}

/// 1-based inclusive row range used for previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for RowRange {
    type Err = IngestError;

    /// Parses `START:END`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || IngestError::InvalidRowRange {
            value: s.to_string(),
        };
        let (start, end) = s.split_once(':').ok_or_else(invalid)?;
        let start = start.trim().parse::<usize>().map_err(|_| invalid())?;
        let end = end.trim().parse::<usize>().map_err(|_| invalid())?;
        if start == 0 || end < start {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}
