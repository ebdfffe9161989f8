//! Storage Value Module
//!
//! Driver-neutral model of a single column value exchanged with a relational
//! storage layer, plus the two traits a storable type implements:
//!
//! - [`Scan`]: read the type back from a [`StorageValue`]
//! - [`Value`]: turn the type into a [`StorageValue`]
//!
//! A driver adapter only needs to map its own column representation onto
//! [`StorageValue`] to store any type implementing both traits.

use entities_bounded_int::BoundedIntError;

use crate::bignum_codec::ScanPolicy;

/// Opaque value read from or written to storage
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    /// Absent value (SQL NULL)
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
    /// Raw byte sequence (BLOB / BYTEA)
    Bytes(Vec<u8>),
}

impl StorageValue {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Integer(_) => "integer",
            StorageValue::Real(_) => "real",
            StorageValue::Text(_) => "text",
            StorageValue::Bool(_) => "bool",
            StorageValue::Bytes(_) => "bytes",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }

    /// Borrow the byte sequence, if this is one
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StorageValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(bytes: Vec<u8>) -> Self {
        StorageValue::Bytes(bytes)
    }
}

impl From<&[u8]> for StorageValue {
    fn from(bytes: &[u8]) -> Self {
        StorageValue::Bytes(bytes.to_vec())
    }
}

/// Types that can be read back from a storage value
pub trait Scan {
    /// Replace `self` with the value decoded from `src` under `policy`
    ///
    /// On error `self` must be left as it was.
    fn scan_with(&mut self, src: &StorageValue, policy: ScanPolicy) -> Result<(), BoundedIntError>;

    /// Replace `self` with the value decoded from `src` under the default policy
    fn scan(&mut self, src: &StorageValue) -> Result<(), BoundedIntError> {
        self.scan_with(src, ScanPolicy::default())
    }
}

/// Types that can be written to storage
pub trait Value {
    /// Storable representation of `self`
    fn value(&self) -> Result<StorageValue, BoundedIntError>;
}
