//! Sri Lankan NIC decoding core.
//!
//! Turns a raw NIC string into a [`NicRecord`] or a typed [`DecodeError`].
//! Two fixed layouts are recognized:
//!
//! - **Pre-2016**: `YYDDDSSSCL`: 2-digit year, 3-digit day-of-year,
//!   3-digit serial, check digit, and a `V`/`X` voting letter
//! - **Post-2016**: `YYYYDDDSC`: 4-digit year, 3-digit day-of-year,
//!   1-digit serial, and check digit
//!
//! Female holders have 500 added to the day-of-year. The check digit is
//! extracted but not verified.
//!
//! Decoding is pure: no clock, no logging, no shared state. A [`Decoder`]
//! is `Copy` and can be used from any number of threads.
//!
//! # Example
//!
//! ```
//! use nic_core::{Sex, VotingMarker, decode};
//!
//! let record = decode("851234567V").unwrap();
//! assert_eq!(record.birth_year(), 1985);
//! assert_eq!(record.sex(), Sex::Male);
//! assert_eq!(record.voting_marker(), VotingMarker::Eligible);
//! assert_eq!(record.serial(), "456");
//! assert_eq!(record.check_digit(), '7');
//! ```

mod batch;
mod decoder;
mod layout;

pub use batch::{BatchSummary, DecodeOutcome};
pub use decoder::{DEFAULT_CENTURY_PIVOT, DecodeOptions, Decoder, resolve_year};

// Re-export the model so callers only need this crate.
pub use nic_model::{
    CalendarAge, DecodeError, FormatEra, LeapDayPolicy, NextBirthday, NicRecord, Result, Sex,
    VotingLetter, VotingMarker,
};

/// Decodes `input` with the default options.
pub fn decode(input: &str) -> Result<NicRecord> {
    Decoder::default().decode(input)
}

/// Returns true if [`decode`] would succeed for `input`.
pub fn is_valid(input: &str) -> bool {
    Decoder::default().is_valid(input)
}
