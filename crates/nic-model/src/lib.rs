//! Data model for decoded Sri Lankan National Identity Card (NIC) numbers.
//!
//! # Module Organization
//!
//! - [`enums`]: Format era, voting letter/marker, and sex enumerations
//! - [`record`]: The immutable [`NicRecord`] produced by a successful decode
//! - [`dates`]: Calendar-aware derived values (age, next birthday)
//! - [`error`]: [`DecodeError`] returned when an input cannot be decoded
//!
//! The decoder itself lives in `nic-core`; this crate only holds the types it
//! produces so that ingestion and presentation layers can depend on them
//! without pulling in decoding logic.

pub mod dates;
pub mod enums;
pub mod error;
pub mod record;

pub use dates::{CalendarAge, LeapDayPolicy, NextBirthday};
pub use enums::{FormatEra, Sex, VotingLetter, VotingMarker};
pub use error::{DecodeError, Result};
pub use record::NicRecord;
