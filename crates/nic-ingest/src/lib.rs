//! NIC ingestion utilities.
//!
//! Loads NIC numbers for batch decoding from plain text, CSV, and JSON
//! files.
//!
//! # Features
//!
//! - **Text**: one NIC per line
//! - **CSV / JSON**: tabular inputs with column (or key) selection
//! - **Candidate detection**: columns whose first rows hold decodable NICs
//!   are marked so they can be picked automatically
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use nic_core::Decoder;
//! use nic_ingest::{ColumnSelection, load_nics};
//!
//! let nics = load_nics(
//!     Path::new("people.csv"),
//!     None,
//!     &ColumnSelection::Auto,
//!     &Decoder::default(),
//! )?;
//! ```

mod csv_table;
mod error;
mod format;
mod json_table;
mod loader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Formats ===
pub use format::InputFormat;

// === Loading ===
pub use loader::{TEXT_COLUMN, load_nics, load_table, read_text_lines};

// === Tables ===
pub use table::{ColumnSelection, ColumnSummary, PREVIEW_ROWS, RowRange, Table};
