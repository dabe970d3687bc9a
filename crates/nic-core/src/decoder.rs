//! The NIC decoder.

use chrono::NaiveDate;
use nic_model::{DecodeError, NicRecord, Result, Sex};

use crate::batch::DecodeOutcome;
use crate::layout::{self, RawFields};

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
///
/// Pre-2016 numbers stopped being issued in 2016, so no holder of one was
/// born in 2016 or later.
pub const DEFAULT_CENTURY_PIVOT: u8 = 16;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Century pivot for pre-2016 two-digit years.
    pub century_pivot: u8,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            century_pivot: DEFAULT_CENTURY_PIVOT,
        }
    }
}

impl DecodeOptions {
    /// Set the century pivot for two-digit years.
    #[must_use]
    pub fn with_century_pivot(mut self, pivot: u8) -> Self {
        self.century_pivot = pivot;
        self
    }
}

/// Expands a pre-2016 two-digit year using `pivot`.
pub fn resolve_year(short_year: u16, pivot: u8) -> i32 {
    let short_year = i32::from(short_year);
    if short_year < i32::from(pivot) {
        2000 + short_year
    } else {
        1900 + short_year
    }
}

/// Stateless NIC decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decodes a single NIC string.
    ///
    /// Surrounding whitespace is trimmed first; nothing else is normalized.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidFormat`] if neither layout matches
    /// - [`DecodeError::InvalidDate`] if the day-of-year, after removing the
    ///   female offset, is not a day of the birth year
    pub fn decode(&self, input: &str) -> Result<NicRecord> {
        let trimmed = input.trim();
        let Some(fields) = layout::detect(trimmed) else {
            return Err(DecodeError::InvalidFormat {
                input: trimmed.to_string(),
            });
        };
        let RawFields {
            era,
            year,
            day_of_year,
            serial,
            check_digit,
        } = fields;

        let year = if era.is_modern() {
            i32::from(layout::digits_value(year))
        } else {
            resolve_year(layout::digits_value(year), self.options.century_pivot)
        };

        let encoded_day = layout::digits_value(day_of_year);
        let (sex, day) = if encoded_day > Sex::FEMALE_OFFSET {
            (Sex::Female, encoded_day - Sex::FEMALE_OFFSET)
        } else {
            (Sex::Male, encoded_day)
        };

        let birth_date = NaiveDate::from_yo_opt(year, u32::from(day)).ok_or_else(|| {
            DecodeError::InvalidDate {
                input: trimmed.to_string(),
                year,
                day_of_year: day,
            }
        })?;

        Ok(NicRecord::new(
            trimmed,
            era,
            birth_date,
            sex,
            serial,
            check_digit,
        ))
    }

    /// Returns true if [`Decoder::decode`] would succeed.
    pub fn is_valid(&self, input: &str) -> bool {
        self.decode(input).is_ok()
    }

    /// Decodes every input, keeping each result next to the input that produced it.
    pub fn decode_all<I, S>(&self, inputs: I) -> Vec<DecodeOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                DecodeOutcome {
                    input: input.to_string(),
                    result: self.decode(input),
                }
            })
            .collect()
    }
}
