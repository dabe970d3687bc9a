//! Field codes and value formatting.
//!
//! Each field is requested by a one-letter code; a selection such as
//! `"basf"` yields date of birth, age, sex and format, in that order.

use std::fmt;

use chrono::NaiveDate;
use nic_core::{LeapDayPolicy, NicRecord};

use crate::error::{OutputError, Result};

/// Selection used when none is given.
pub const DEFAULT_FIELDS: &str = "basf";

/// Label of the NIC column that precedes the selected fields.
pub const NIC_LABEL: &str = "NIC";

/// Placeholder for values that cannot be computed for the given date.
pub const MISSING_VALUE: &str = "-";

/// A presentable field of a decoded NIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `y`
    BirthYear,
    /// `d`
    DayOfYear,
    /// `b`
    BirthDate,
    /// `g` or `s`
    Sex,
    /// `v`
    Voting,
    /// `f`
    Format,
    /// `a`
    Age,
    /// `n`
    NextBirthday,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::BirthYear,
        Field::DayOfYear,
        Field::BirthDate,
        Field::Sex,
        Field::Voting,
        Field::Format,
        Field::Age,
        Field::NextBirthday,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'y' => Some(Self::BirthYear),
            'd' => Some(Self::DayOfYear),
            'b' => Some(Self::BirthDate),
            'g' | 's' => Some(Self::Sex),
            'v' => Some(Self::Voting),
            'f' => Some(Self::Format),
            'a' => Some(Self::Age),
            'n' => Some(Self::NextBirthday),
            _ => None,
        }
    }

    /// Codes accepted for this field; the first is canonical.
    pub fn codes(&self) -> &'static [char] {
        match self {
            Self::BirthYear => &['y'],
            Self::DayOfYear => &['d'],
            Self::BirthDate => &['b'],
            Self::Sex => &['g', 's'],
            Self::Voting => &['v'],
            Self::Format => &['f'],
            Self::Age => &['a'],
            Self::NextBirthday => &['n'],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BirthYear => "Year of Birth",
            Self::DayOfYear => "Day of Year",
            Self::BirthDate => "Date of Birth",
            Self::Sex => "Gender",
            Self::Voting => "Voting",
            Self::Format => "Format",
            Self::Age => "Age",
            Self::NextBirthday => "Next Birthday",
        }
    }

    /// Formats this field of `record` as of the given date.
    pub fn value(&self, record: &NicRecord, as_of: NaiveDate, leap_day: LeapDayPolicy) -> String {
        let birth_date = record.birth_date();
        match self {
            Self::BirthYear => birth_date.format("%Y").to_string(),
            Self::DayOfYear => birth_date.format("%j").to_string(),
            Self::BirthDate => birth_date.format("%Y-%m-%d").to_string(),
            Self::Sex => record.sex().to_string(),
            Self::Voting => record.voting_marker().to_string(),
            Self::Format => record.format_era().to_string(),
            Self::Age => record
                .age(as_of)
                .map_or_else(|| MISSING_VALUE.to_string(), |age| age.to_string()),
            Self::NextBirthday => record
                .days_until_next_birthday_with(as_of, leap_day)
                .map_or_else(|| MISSING_VALUE.to_string(), |next| next.to_string()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a string of field codes, keeping their order.
///
/// An empty string selects [`DEFAULT_FIELDS`].
///
/// # Errors
///
/// Returns [`OutputError::UnknownField`] for the first unrecognized code.
pub fn parse_fields(codes: &str) -> Result<Vec<Field>> {
    let codes = codes.trim();
    let codes = if codes.is_empty() {
        DEFAULT_FIELDS
    } else {
        codes
    };
    codes
        .chars()
        .map(|code| Field::from_code(code).ok_or(OutputError::UnknownField { code }))
        .collect()
}
