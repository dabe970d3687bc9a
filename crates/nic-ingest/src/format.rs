//! Input file formats.

use std::fmt;
use std::path::Path;

/// Layout of an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// One NIC per line.
    #[default]
    Txt,
    /// Comma separated values with a header row.
    Csv,
    /// Array of objects.
    Json,
}

impl InputFormat {
    /// Infers the format from the file extension (case-insensitive).
    ///
    /// Anything that is not `.csv` or `.json` is read as plain text.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if extension.eq_ignore_ascii_case("csv") {
            Self::Csv
        } else if extension.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Txt
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns true for formats with columns to select from.
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv | Self::Json)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
