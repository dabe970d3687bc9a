//! Type-safe enumerations for the fields encoded in a NIC number.
//!
//! The two NIC layouts differ in whether a trailing voting letter exists.
//! [`FormatEra`] carries that letter inside its pre-2016 variant, so a
//! post-2016 record has no letter to read and its [`VotingMarker`] is
//! always [`VotingMarker::Unknown`].

use serde::Serialize;
use std::fmt;

/// Trailing letter of a pre-2016 NIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VotingLetter {
    /// `V`: eligible to vote at issuance.
    V,
    /// `X`: not eligible to vote at issuance.
    X,
}

impl VotingLetter {
    /// Parses the exact-case letter. Lowercase letters are rejected.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'V' => Some(Self::V),
            b'X' => Some(Self::X),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::V => 'V',
            Self::X => 'X',
        }
    }

    pub fn marker(self) -> VotingMarker {
        match self {
            Self::V => VotingMarker::Eligible,
            Self::X => VotingMarker::NotEligible,
        }
    }
}

/// Which of the two historical NIC layouts an input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatEra {
    /// Ten characters: `YYDDDSSSCL` (short year, day-of-year, serial, check digit, letter).
    PreModern { letter: VotingLetter },
    /// Nine digits: `YYYYDDDSC` (full year, day-of-year, serial, check digit).
    Modern,
}

impl FormatEra {
    /// Returns the label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PreModern { .. } => "Pre-2016",
            Self::Modern => "Post-2016",
        }
    }

    pub fn voting_marker(&self) -> VotingMarker {
        match self {
            Self::PreModern { letter } => letter.marker(),
            Self::Modern => VotingMarker::Unknown,
        }
    }

    pub fn is_modern(&self) -> bool {
        matches!(self, Self::Modern)
    }
}

impl fmt::Display for FormatEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sex as encoded by the 500 day-of-year offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Offset added to the day-of-year for female holders.
    pub const FEMALE_OFFSET: u16 = 500;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Returns the value added to the ordinal day when encoding.
    pub fn day_offset(&self) -> u16 {
        match self {
            Self::Male => 0,
            Self::Female => Self::FEMALE_OFFSET,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Voting eligibility at issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VotingMarker {
    Eligible,
    NotEligible,
    /// Post-2016 numbers carry no voting letter.
    Unknown,
}

impl VotingMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::NotEligible => "Not Eligible",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for VotingMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
