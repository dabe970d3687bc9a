//! Fixed-shape layout detection.
//!
//! Both layouts are anchored at both ends, so length alone selects the
//! candidate and the byte classes decide whether it matches.

use nic_model::{FormatEra, VotingLetter};

const PRE_MODERN_LEN: usize = 10;
const MODERN_LEN: usize = 9;

/// Raw field slices of a matched layout. All slices are ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawFields<'a> {
    pub era: FormatEra,
    pub year: &'a str,
    pub day_of_year: &'a str,
    pub serial: &'a str,
    pub check_digit: char,
}

/// Matches `input` against the pre-2016 layout first, then the post-2016 one.
pub(crate) fn detect(input: &str) -> Option<RawFields<'_>> {
    let bytes = input.as_bytes();
    match bytes.len() {
        PRE_MODERN_LEN if all_digits(&bytes[..9]) => {
            let letter = VotingLetter::from_byte(bytes[9])?;
            Some(RawFields {
                era: FormatEra::PreModern { letter },
                year: &input[0..2],
                day_of_year: &input[2..5],
                serial: &input[5..8],
                check_digit: char::from(bytes[8]),
            })
        }
        MODERN_LEN if all_digits(bytes) => Some(RawFields {
            era: FormatEra::Modern,
            year: &input[0..4],
            day_of_year: &input[4..7],
            serial: &input[7..8],
            check_digit: char::from(bytes[8]),
        }),
        _ => None,
    }
}

/// Value of a run of ASCII digits. Callers pass slices already checked by [`detect`].
pub(crate) fn digits_value(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}
