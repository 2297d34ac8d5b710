//! Universally quantified properties of amounts, positions and tickets.

use cashout::amount::{Amount, amount_in_words};
use cashout::components::{BarcodeField, ComponentExt};
use cashout::layout::{center_align, right_align};
use cashout::protocol::commands::{MAX_POSITION_X, position_x, position_y};
use cashout::ticket::compose;
use cashout::{CashoutError, Composer, Template, VoucherRecord};
use proptest::prelude::*;

/// Validation codes with at least one digit, mixed with separators.
fn validation_code() -> impl Strategy<Value = String> {
    "[0-9]{1,40}(-[0-9A-Z]{0,6}){0,4}"
}

proptest! {
    #[test]
    fn peso_unit_follows_integer_part(pesos in 0u64..=Amount::MAX_PESOS, centavos in 0u8..100) {
        let amount = Amount::new(pesos, centavos).unwrap();
        let words = amount_in_words(amount);
        let (integer_part, _) = words.rsplit_once(" AND ").unwrap();
        if pesos == 1 {
            prop_assert!(integer_part.ends_with(" PESO"), "{}", words);
        } else {
            prop_assert!(integer_part.ends_with(" PESOS"), "{}", words);
        }
    }

    #[test]
    fn rounding_never_yields_hundred_centavos(value in 0.0f64..1e9) {
        let amount = Amount::from_f64(value).unwrap();
        prop_assert!(amount.centavos() < 100);
        prop_assert!(amount.pesos() >= value.floor() as u64);
    }

    #[test]
    fn negative_amounts_rejected(value in -1e9f64..-0.001) {
        prop_assert!(matches!(Amount::from_f64(value), Err(CashoutError::InvalidAmount(_))));
    }

    #[test]
    fn position_x_round_trips(value in 0i64..=i64::from(MAX_POSITION_X)) {
        let bytes = position_x(value).unwrap();
        prop_assert_eq!(&bytes[..2], &[0x1B, 0x58]);
        prop_assert_eq!(i64::from(bytes[2]) * 256 + i64::from(bytes[3]), value);
    }

    #[test]
    fn position_x_out_of_range(value in prop_oneof![i64::MIN..0i64, 65_536i64..i64::MAX]) {
        let is_out_of_range = matches!(
            position_x(value),
            Err(CashoutError::PositionOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn position_y_single_byte(value in 0i64..=255) {
        prop_assert_eq!(position_y(value).unwrap(), vec![0x1B, 0x59, value as u8]);
    }

    #[test]
    fn barcode_length_prefix_counts_digits(code in validation_code()) {
        let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
        let bytes = BarcodeField::new(&code).build().unwrap();
        // GS h n, GS w n, GS k 9 len
        prop_assert_eq!(bytes[9] as usize, digits.len());
        prop_assert_eq!(&bytes[10..10 + digits.len()], digits.as_bytes());
    }

    #[test]
    fn center_and_right_stay_on_page(text in "[ -~]{0,120}", per_char in 1u32..30, page in 0u32..2000) {
        let center = center_align(&text, per_char, page);
        let right = right_align(&text, per_char, page, 20);
        prop_assert!(center <= page / 2);
        prop_assert!(right <= page);
    }

    #[test]
    fn every_stream_ends_with_form_feed(
        pesos in 0u64..10_000_000,
        centavos in 0u8..100,
        validation in validation_code(),
        asset in proptest::option::of("[A-Z0-9-]{1,12}"),
    ) {
        let record = VoucherRecord {
            amount: Amount::new(pesos, centavos).unwrap(),
            validation,
            asset,
            ..VoucherRecord::default()
        };
        let composer = Composer::default();
        for template in Template::all() {
            let bytes = compose(*template, &record).unwrap();
            prop_assert_eq!(&bytes[..2], &[0x1B, 0x2A]);
            prop_assert_eq!(bytes.last(), Some(&0x0C));
            prop_assert_eq!(composer.program(*template, &record).unwrap().form_feeds(), 1);
        }
    }
}
