//! Entities Layer: Bounded Integer
//!
//! Provides the bounded integer value type:
//! - Non-negative magnitude of at most 256 bits
//! - Decimal and `0x`-prefixed hexadecimal text forms
//! - Minimal big-endian byte form
//! - JSON string interop through `serde`
//!
//! The storage driver integration lives in `infrastructure_bignum_encoding`.

pub mod bounded_int;
pub mod error;
pub mod json;
pub mod text;

pub use bounded_int::{Base, BoundedInt, MAX_BIT_LENGTH, MAX_BYTE_LENGTH};
pub use error::{BoundedIntError, ErrorKind};
