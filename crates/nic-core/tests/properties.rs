//! Property tests for the decoder.

use nic_core::{DEFAULT_CENTURY_PIVOT, DecodeError, FormatEra, Sex, decode};
use proptest::prelude::*;

fn matches_a_layout(input: &str) -> bool {
    let bytes = input.trim().as_bytes();
    match bytes.len() {
        10 => bytes[..9].iter().all(u8::is_ascii_digit) && matches!(bytes[9], b'V' | b'X'),
        9 => bytes.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn letter() -> impl Strategy<Value = char> {
    prop_oneof![Just('V'), Just('X')]
}

proptest! {
    #[test]
    fn unmatched_shapes_are_invalid_format(input in "\\PC{0,14}") {
        prop_assume!(!matches_a_layout(&input));
        let is_invalid_format = matches!(decode(&input), Err(DecodeError::InvalidFormat { .. }));
        prop_assert!(is_invalid_format);
    }

    #[test]
    fn short_year_follows_pivot(
        yy in 0u16..100,
        day in 1u16..=365,
        serial in "[0-9]{3}",
        check in 0u8..10,
        letter in letter(),
    ) {
        let input = format!("{yy:02}{day:03}{serial}{check}{letter}");
        let record = decode(&input).unwrap();
        let expected = if yy < u16::from(DEFAULT_CENTURY_PIVOT) {
            2000 + i32::from(yy)
        } else {
            1900 + i32::from(yy)
        };
        prop_assert_eq!(record.birth_year(), expected);
    }

    #[test]
    fn female_iff_day_field_above_500(year in 1900i32..2100, raw_day in 0u16..1000) {
        let input = format!("{year:04}{raw_day:03}12");
        match decode(&input) {
            Ok(record) => {
                let expected = if raw_day > 500 { Sex::Female } else { Sex::Male };
                prop_assert_eq!(record.sex(), expected);
                prop_assert_eq!(record.encoded_day_of_year(), raw_day);
            }
            Err(error) => {
                let is_invalid_date = matches!(error, DecodeError::InvalidDate { .. });
                prop_assert!(is_invalid_date);
            }
        }
    }

    #[test]
    fn canonical_round_trips(
        modern in any::<bool>(),
        year in 1916i32..2016,
        day in 1u16..=365,
        female in any::<bool>(),
        serial in "[0-9]{3}",
        check in 0u8..10,
        letter in letter(),
    ) {
        let encoded = if female { day + 500 } else { day };
        let input = if modern {
            format!("{year:04}{encoded:03}{}{check}", &serial[..1])
        } else {
            format!("{:02}{encoded:03}{serial}{check}{letter}", year % 100)
        };
        let record = decode(&input).unwrap();
        prop_assert_eq!(record.canonical(), input.clone());
        prop_assert_eq!(record.format_era().is_modern(), modern);

        let again = decode(&format!("  {}  ", record.canonical())).unwrap();
        prop_assert_eq!(again, record);
    }

    #[test]
    fn serial_and_check_consume_payload(input in "[0-9]{9}") {
        if let Ok(record) = decode(&input) {
            prop_assert_eq!(record.format_era(), FormatEra::Modern);
            prop_assert_eq!(record.serial(), &input[7..8]);
            prop_assert_eq!(record.check_digit(), char::from(input.as_bytes()[8]));
        }
    }
}
