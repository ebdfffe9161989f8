use entities_bounded_int::{Base, BoundedInt, BoundedIntError};
use malachite::Natural;
use proptest::prelude::*;

// Any value that fits in 256 bits, built from up to 32 big-endian bytes.
fn bounded_value() -> impl Strategy<Value = BoundedInt> {
    prop::collection::vec(any::<u8>(), 0..=32)
        .prop_map(|bytes| BoundedInt::from_bytes_be(&bytes).expect("32 bytes always fit"))
}

proptest! {
    #[test]
    fn prop_decimal_round_trip(value in bounded_value()) {
        let text = value.to_decimal_string();
        let parsed = BoundedInt::from_decimal_str(&text).unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(parsed.base(), Base::Decimal);
        prop_assert_eq!(parsed.to_string(), text);
    }
}

proptest! {
    #[test]
    fn prop_hex_round_trip(value in bounded_value()) {
        let text = value.to_hex_string();
        prop_assert!(text.starts_with("0x"));
        prop_assert!(text == "0x0" || !text.starts_with("0x0"));
        let parsed = BoundedInt::from_hex_str(&text).unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(parsed.to_string(), text);
    }
}

proptest! {
    #[test]
    fn prop_bytes_round_trip(value in bounded_value()) {
        let bytes = value.to_bytes_be();
        prop_assert!(bytes.len() <= 32);
        prop_assert!(bytes.first() != Some(&0));
        prop_assert_eq!(BoundedInt::from_bytes_be(&bytes).unwrap(), value);
    }
}

proptest! {
    #[test]
    fn prop_bytes_independent_of_base(value in bounded_value()) {
        let decimal = value.clone().with_base(Base::Decimal);
        let hex = value.with_base(Base::Hexadecimal);
        prop_assert_eq!(decimal.to_bytes_be(), hex.to_bytes_be());
    }
}

proptest! {
    #[test]
    fn prop_json_round_trip(value in bounded_value(), decimal in any::<bool>()) {
        let value = if decimal { value.with_base(Base::Decimal) } else { value };
        let json = serde_json::to_string(&value).unwrap();
        let parsed: BoundedInt = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(parsed.base(), value.base());
    }
}

proptest! {
    #[test]
    fn prop_above_bound_rejected(extra in 0u64..1_000_000u64) {
        let over = (Natural::from(1u32) << 256u64) + Natural::from(extra);
        prop_assert_eq!(
            BoundedInt::parse(&over.to_string()),
            Err(BoundedIntError::OverlengthValue)
        );
        prop_assert_eq!(
            BoundedInt::parse(&format!("0x{:x}", over)),
            Err(BoundedIntError::OverlengthValue)
        );
    }
}
