//! Error types for NIC decoding.

use thiserror::Error;

/// Reasons a raw NIC string could not be decoded.
///
/// Both variants are terminal for the input that produced them. The
/// messages deliberately leave the input out so callers can decide whether
/// the identifier may appear in logs; use [`DecodeError::input`] to get it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The trimmed input matched neither the pre-2016 nor the post-2016 layout.
    #[error("input does not match the pre-2016 or post-2016 NIC layout")]
    InvalidFormat { input: String },

    /// The layout matched but the encoded day-of-year is not a date in the birth year.
    #[error("day-of-year {day_of_year} is not a valid date in {year}")]
    InvalidDate {
        input: String,
        year: i32,
        day_of_year: u16,
    },
}

impl DecodeError {
    /// Returns the trimmed input that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } | Self::InvalidDate { input, .. } => input,
        }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidDate { .. } => "invalid_date",
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
