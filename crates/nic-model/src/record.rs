//! The decoded NIC record.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dates::{self, CalendarAge, LeapDayPolicy, NextBirthday};
use crate::enums::{FormatEra, Sex, VotingMarker};

/// Immutable result of decoding one NIC number.
///
/// Fields are private; a record is built once by the decoder and only read
/// afterwards. Derived values that depend on "today" take an explicit
/// `as_of` date so nothing here reads a clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicRecord {
    raw_input: String,
    format_era: FormatEra,
    birth_date: NaiveDate,
    sex: Sex,
    serial: String,
    check_digit: char,
}

impl NicRecord {
    /// Assembles a record from already-validated parts.
    ///
    /// `serial` must be ASCII digits and `check_digit` a single ASCII digit;
    /// the decoder guarantees both.
    pub fn new(
        raw_input: impl Into<String>,
        format_era: FormatEra,
        birth_date: NaiveDate,
        sex: Sex,
        serial: impl Into<String>,
        check_digit: char,
    ) -> Self {
        let serial = serial.into();
        debug_assert!(serial.bytes().all(|b| b.is_ascii_digit()));
        debug_assert!(check_digit.is_ascii_digit());
        Self {
            raw_input: raw_input.into(),
            format_era,
            birth_date,
            sex,
            serial,
            check_digit,
        }
    }

    /// The trimmed input this record was decoded from.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn format_era(&self) -> FormatEra {
        self.format_era
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    /// Ordinal day within the birth year, with the sex offset removed.
    pub fn day_of_year(&self) -> u16 {
        // ordinal() is 1..=366
        self.birth_date.ordinal() as u16
    }

    /// Day-of-year as it appears in the NIC (female holders carry +500).
    pub fn encoded_day_of_year(&self) -> u16 {
        self.day_of_year() + self.sex.day_offset()
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn voting_marker(&self) -> VotingMarker {
        self.format_era.voting_marker()
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// Rebuilds the NIC string from the decoded fields.
    ///
    /// Equals the raw input for every record produced by the decoder.
    pub fn canonical(&self) -> String {
        match self.format_era {
            FormatEra::PreModern { letter } => format!(
                "{:02}{:03}{}{}{}",
                self.birth_year().rem_euclid(100),
                self.encoded_day_of_year(),
                self.serial,
                self.check_digit,
                letter.as_char()
            ),
            FormatEra::Modern => format!(
                "{:04}{:03}{}{}",
                self.birth_year(),
                self.encoded_day_of_year(),
                self.serial,
                self.check_digit
            ),
        }
    }

    /// Calendar-aware age on `as_of`, or `None` if `as_of` precedes the birth date.
    pub fn age(&self, as_of: NaiveDate) -> Option<CalendarAge> {
        dates::calendar_age(self.birth_date, as_of)
    }

    /// Countdown to the next birthday using [`LeapDayPolicy::default`].
    pub fn days_until_next_birthday(&self, as_of: NaiveDate) -> Option<NextBirthday> {
        self.days_until_next_birthday_with(as_of, LeapDayPolicy::default())
    }

    /// Countdown to the next birthday with an explicit Feb 29 policy.
    ///
    /// Returns `None` only when the next occurrence falls outside the
    /// representable date range.
    pub fn days_until_next_birthday_with(
        &self,
        as_of: NaiveDate,
        policy: LeapDayPolicy,
    ) -> Option<NextBirthday> {
        dates::next_birthday(self.birth_date, as_of, policy)
    }
}

impl fmt::Display for NicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::VotingLetter;

    fn female_modern() -> NicRecord {
        NicRecord::new(
            "200075012",
            FormatEra::Modern,
            NaiveDate::from_ymd_opt(2000, 9, 6).unwrap(),
            Sex::Female,
            "1",
            '2',
        )
    }

    #[test]
    fn encoded_day_carries_female_offset() {
        let record = female_modern();
        assert_eq!(record.day_of_year(), 250);
        assert_eq!(record.encoded_day_of_year(), 750);
        assert_eq!(record.voting_marker(), VotingMarker::Unknown);
    }

    #[test]
    fn canonical_rebuilds_modern_input() {
        assert_eq!(female_modern().canonical(), "200075012");
    }

    #[test]
    fn canonical_rebuilds_pre_modern_input() {
        let record = NicRecord::new(
            "050010001X",
            FormatEra::PreModern {
                letter: VotingLetter::X,
            },
            NaiveDate::from_ymd_opt(2005, 1, 1).unwrap(),
            Sex::Male,
            "000",
            '1',
        );
        assert_eq!(record.canonical(), "050010001X");
        assert_eq!(record.voting_marker(), VotingMarker::NotEligible);
    }
}
