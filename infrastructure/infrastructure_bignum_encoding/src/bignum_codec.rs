//! Bignum Codec Module
//!
//! Binary storage form of a [`BoundedInt`]: the minimal big-endian bytes of the
//! magnitude, with no sign byte and no padding. Zero is the empty sequence.
//!
//! Decoding is governed by a [`ScanPolicy`]:
//!
//! | Input            | `Strict`            | `Permissive` (default)                   |
//! |------------------|---------------------|------------------------------------------|
//! | NULL             | `NilSource`         | no-op, value unchanged                   |
//! | not bytes        | `UnsupportedSource` | `UnsupportedSource`                      |
//! | `[]`             | `EmptyInput`        | zero                                     |
//! | more than 32     | `OverlengthInput`   | `OverlengthValue` unless leading zeros   |
//!
//! A successful decode always resets the preferred base to hexadecimal.

use entities_bounded_int::{BoundedInt, BoundedIntError, MAX_BYTE_LENGTH};

use crate::storage_value::{Scan, StorageValue, Value};

/// How strictly storage input is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPolicy {
    /// NULL, empty and over-long byte sequences are errors
    Strict,
    /// NULL is ignored, empty bytes are zero, only the value's bit length is bounded
    #[default]
    Permissive,
}

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Encode a value to its storage bytes
    ///
    /// Never fails: every `BoundedInt` fits in 32 bytes.
    pub fn encode(value: &BoundedInt) -> Vec<u8> {
        value.to_bytes_be()
    }

    /// Decode storage bytes
    ///
    /// # Arguments
    /// * `data` - Big-endian magnitude bytes
    /// * `policy` - Validation policy for empty and over-long input
    ///
    /// # Returns
    /// * `Ok(BoundedInt)` - The decoded value, rendering in hexadecimal
    /// * `Err(BoundedIntError)` - `EmptyInput` / `OverlengthInput` (strict) or
    ///   `OverlengthValue` (permissive)
    pub fn decode(data: &[u8], policy: ScanPolicy) -> Result<BoundedInt, BoundedIntError> {
        if policy == ScanPolicy::Strict {
            if data.is_empty() {
                return Err(BoundedIntError::EmptyInput);
            }
            if data.len() > MAX_BYTE_LENGTH {
                return Err(BoundedIntError::OverlengthInput { len: data.len() });
            }
        }
        BoundedInt::from_bytes_be(data)
    }

    /// Decode a storage value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The source held bytes
    /// * `Ok(None)` - The source was NULL under the permissive policy
    /// * `Err(BoundedIntError)` - The source was rejected
    pub fn decode_value(
        src: &StorageValue,
        policy: ScanPolicy,
    ) -> Result<Option<BoundedInt>, BoundedIntError> {
        match src {
            StorageValue::Bytes(bytes) => Self::decode(bytes, policy).map(Some),
            StorageValue::Null => match policy {
                ScanPolicy::Strict => Err(BoundedIntError::NilSource),
                ScanPolicy::Permissive => Ok(None),
            },
            other => Err(BoundedIntError::UnsupportedSource { kind: other.kind() }),
        }
    }
}

impl Scan for BoundedInt {
    fn scan_with(&mut self, src: &StorageValue, policy: ScanPolicy) -> Result<(), BoundedIntError> {
        match BignumCodec::decode_value(src, policy)? {
            Some(value) => *self = value,
            None => log::trace!("null source left {} unchanged", self),
        }
        Ok(())
    }
}

impl Value for BoundedInt {
    fn value(&self) -> Result<StorageValue, BoundedIntError> {
        Ok(StorageValue::Bytes(BignumCodec::encode(self)))
    }
}

/// Nullable columns: NULL maps to `None` under either policy.
impl Scan for Option<BoundedInt> {
    fn scan_with(&mut self, src: &StorageValue, policy: ScanPolicy) -> Result<(), BoundedIntError> {
        *self = match src {
            StorageValue::Null => None,
            other => BignumCodec::decode_value(other, policy)?,
        };
        Ok(())
    }
}

impl Value for Option<BoundedInt> {
    fn value(&self) -> Result<StorageValue, BoundedIntError> {
        match self {
            Some(value) => value.value(),
            None => Ok(StorageValue::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bounded_int::{Base, ErrorKind};

    #[test]
    fn test_encode() {
        assert_eq!(BignumCodec::encode(&BoundedInt::zero()), Vec::<u8>::new());
        assert_eq!(
            BignumCodec::encode(&BoundedInt::from(2083236893u64)),
            vec![124, 43, 172, 29]
        );
        assert_eq!(BignumCodec::encode(&BoundedInt::max_value()), vec![0xff; 32]);
    }

    #[test]
    fn test_decode_strict() {
        assert_eq!(
            BignumCodec::decode(&[], ScanPolicy::Strict),
            Err(BoundedIntError::EmptyInput)
        );
        assert_eq!(
            BignumCodec::decode(&[0u8; 33], ScanPolicy::Strict),
            Err(BoundedIntError::OverlengthInput { len: 33 })
        );
        assert!(BignumCodec::decode(&[0], ScanPolicy::Strict).unwrap().is_zero());
        assert_eq!(
            BignumCodec::decode(&[0xff; 32], ScanPolicy::Strict).unwrap(),
            BoundedInt::max_value()
        );
    }

    #[test]
    fn test_decode_permissive() {
        assert!(BignumCodec::decode(&[], ScanPolicy::Permissive).unwrap().is_zero());
        assert!(BignumCodec::decode(&[0u8; 40], ScanPolicy::Permissive)
            .unwrap()
            .is_zero());

        let mut over = vec![1u8];
        over.extend_from_slice(&[0u8; 32]);
        assert_eq!(
            BignumCodec::decode(&over, ScanPolicy::Permissive),
            Err(BoundedIntError::OverlengthValue)
        );
    }

    #[test]
    fn test_decode_value_rejects_non_bytes() {
        for policy in [ScanPolicy::Strict, ScanPolicy::Permissive] {
            for src in [
                StorageValue::Integer(0),
                StorageValue::Text("string".into()),
                StorageValue::Real(1.0),
                StorageValue::Bool(false),
            ] {
                let err = BignumCodec::decode_value(&src, policy).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::UnsupportedSource);
            }
        }
    }

    #[test]
    fn test_scan_resets_base() {
        let mut value = BoundedInt::from_decimal_str("7").unwrap();
        value.scan(&StorageValue::Bytes(vec![124, 43, 172, 29])).unwrap();
        assert_eq!(value.base(), Base::Hexadecimal);
        assert_eq!(value.to_string(), "0x7c2bac1d");
    }

    #[test]
    fn test_scan_null() {
        let mut value = BoundedInt::from_decimal_str("7").unwrap();
        value.scan(&StorageValue::Null).unwrap();
        assert_eq!(value.to_string(), "7");

        assert_eq!(
            value.scan_with(&StorageValue::Null, ScanPolicy::Strict),
            Err(BoundedIntError::NilSource)
        );
        assert_eq!(value.to_string(), "7");
    }

    #[test]
    fn test_scan_failure_keeps_value() {
        let mut value = BoundedInt::from(42u32);
        assert!(value
            .scan_with(&StorageValue::Bytes(vec![]), ScanPolicy::Strict)
            .is_err());
        assert!(value.scan(&StorageValue::Text("42".into())).is_err());
        assert_eq!(value, BoundedInt::from(42u32));
    }

    #[test]
    fn test_option_scan_and_value() {
        let mut column: Option<BoundedInt> = Some(BoundedInt::from(1u32));
        column
            .scan_with(&StorageValue::Null, ScanPolicy::Strict)
            .unwrap();
        assert_eq!(column, None);
        assert_eq!(column.value().unwrap(), StorageValue::Null);

        column.scan(&StorageValue::Bytes(vec![1, 0])).unwrap();
        assert_eq!(column, Some(BoundedInt::from(256u32)));
        assert_eq!(column.value().unwrap(), StorageValue::Bytes(vec![1, 0]));
    }

    #[test]
    fn test_value() {
        let mut value = BoundedInt::from(2083236893u64);
        let hex = value.value().unwrap();
        value.set_base_to_decimal();
        assert_eq!(value.value().unwrap(), hex);
        assert_eq!(
            BoundedInt::zero().value().unwrap(),
            StorageValue::Bytes(vec![])
        );
    }
}
