//! Property tests for the range codec.

use proptest::prelude::*;
use scriptkit::{decode_range, encode_range, Error};

proptest! {
    // Encoding any ordered pair and decoding it again returns the pair.
    #[test]
    fn test_encode_decode_round_trip(low in 0u64..=1_000_000, span in 0u64..=1_000_000) {
        let high = low + span;
        let encoded = encode_range(low, high);
        let decoded = decode_range(&encoded, "range").unwrap();
        prop_assert_eq!(decoded, (low, high));
    }

    // Surrounding whitespace never changes the decoded value.
    #[test]
    fn test_decode_ignores_surrounding_whitespace(
        low in 0u64..=1_000_000,
        span in 0u64..=1_000_000,
        pad_left in 0usize..4,
        pad_right in 0usize..4,
    ) {
        let high = low + span;
        let padded = format!(
            "{}{}{}",
            " ".repeat(pad_left),
            encode_range(low, high),
            " ".repeat(pad_right)
        );
        prop_assert_eq!(decode_range(&padded, "range").unwrap(), (low, high));
    }

    // A reversed pair always decodes to an argument error, never a
    // format error: the text itself is well-formed.
    #[test]
    fn test_reversed_bounds_rejected(low in 0u64..=1_000_000, span in 1u64..=1_000_000) {
        let high = low + span;
        let err = decode_range(&encode_range(high, low), "range").unwrap_err();
        prop_assert!(
            matches!(err, Error::InvalidArgument { .. }),
            "expected Error::InvalidArgument, got {:?}",
            err
        );
    }

    // Text without a hyphen can never decode.
    #[test]
    fn test_hyphenless_text_rejected(text in "[0-9a-z ]{0,12}") {
        let err = decode_range(&text, "range").unwrap_err();
        prop_assert!(
            matches!(err, Error::InvalidFormat { .. }),
            "expected Error::InvalidFormat, got {:?}",
            err
        );
    }
}
