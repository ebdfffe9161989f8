//! Infrastructure Layer: Bignum Encoding
//!
//! Provides the binary storage form of bounded integers and the glue needed to
//! move them through a relational storage driver.
//!
//! ## Overview
//!
//! Values are stored as minimal big-endian unsigned bytes. Zero is the empty
//! byte sequence, and the same magnitude always produces the same bytes
//! whatever its preferred text base.
//!
//! ## Modules
//!
//! - **[`bignum_codec`]**: byte encoding and decoding under a [`ScanPolicy`],
//!   and the [`Scan`]/[`Value`] implementations for `BoundedInt`.
//! - **[`storage_value`]**: the driver-neutral [`StorageValue`] and the
//!   [`Scan`]/[`Value`] traits.
//!
//! ## See Also
//!
//! - `entities_bounded_int`: the `BoundedInt` value type and its text forms

pub mod bignum_codec;
pub mod storage_value;

pub use bignum_codec::{BignumCodec, ScanPolicy};
pub use storage_value::{Scan, StorageValue, Value};

// Re-export the value type so drivers need a single dependency
pub use entities_bounded_int::{BoundedInt, BoundedIntError, ErrorKind};
