//! Presentation of decoded NIC records.
//!
//! - [`fields`]: one-letter field codes (`y d b g/s v f a n`) and value formatting
//! - [`render`]: txt, csv, json, and console table renderers

pub mod error;
pub mod fields;
pub mod render;

pub use error::{OutputError, Result};
pub use fields::{DEFAULT_FIELDS, Field, MISSING_VALUE, NIC_LABEL, parse_fields};
pub use render::{OutputFormat, RenderOptions, render, write_output};
