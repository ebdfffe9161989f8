//! Bounded Integer Module
//!
//! Provides [`BoundedInt`], a non-negative integer of at most 256 bits that
//! remembers which textual base it prefers.
//!
//! The value is stored as a `malachite` [`Natural`], so it can never be
//! negative. The 256-bit bound is checked on every entry point: construction,
//! text parsing and byte decoding. The preferred base only changes how the
//! value is rendered as text; it never changes the magnitude, the byte form or
//! equality.
//!
//! # Examples
//!
//! ```rust
//! use entities_bounded_int::{Base, BoundedInt};
//!
//! let mut id: BoundedInt = "2083236893".parse().unwrap();
//! assert_eq!(id.base(), Base::Decimal);
//! assert_eq!(id.to_string(), "2083236893");
//!
//! id.set_base_to_hexadecimal();
//! assert_eq!(id.to_string(), "0x7c2bac1d");
//! assert_eq!(id.to_bytes_be(), vec![124, 43, 172, 29]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};

use crate::error::BoundedIntError;
use crate::text;

/// Maximum length of a value in bytes
pub const MAX_BYTE_LENGTH: usize = 32;

/// Maximum length of a value in bits
pub const MAX_BIT_LENGTH: u64 = (MAX_BYTE_LENGTH as u64) * 8;

/// Textual base a value is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// Unprefixed base-10 digits
    Decimal,
    /// `0x`-prefixed lowercase base-16 digits
    #[default]
    Hexadecimal,
}

impl Base {
    /// Numeric radix of this base
    pub fn radix(self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Decimal => write!(f, "decimal"),
            Base::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}

/// Non-negative integer of at most 256 bits with a preferred text base
///
/// Equality, ordering and hashing look at the magnitude only.
#[derive(Debug, Clone)]
pub struct BoundedInt {
    magnitude: Natural,
    base: Base,
}

impl BoundedInt {
    /// Wrap a natural number, rendering in hexadecimal
    ///
    /// # Arguments
    /// * `magnitude` - The value to wrap
    ///
    /// # Returns
    /// * `Ok(BoundedInt)` - The wrapped value
    /// * `Err(BoundedIntError::OverlengthValue)` - The value needs more than 256 bits
    pub fn new(magnitude: Natural) -> Result<Self, BoundedIntError> {
        let magnitude = text::check_bit_length(magnitude)?;
        Ok(Self {
            magnitude,
            base: Base::default(),
        })
    }

    /// Wrap a signed integer, rejecting negatives
    pub fn from_integer(value: &Integer) -> Result<Self, BoundedIntError> {
        if *value < 0 {
            return Err(BoundedIntError::NegativeValue);
        }
        let magnitude =
            Natural::try_from(value.clone()).map_err(|_| BoundedIntError::NegativeValue)?;
        Self::new(magnitude)
    }

    /// Zero, rendered in hexadecimal
    pub fn zero() -> Self {
        Self::default()
    }

    /// The largest representable value, 2^256 - 1
    pub fn max_value() -> Self {
        Self {
            magnitude: (Natural::from(1u32) << MAX_BIT_LENGTH) - Natural::from(1u32),
            base: Base::default(),
        }
    }

    /// Parse text in either base
    ///
    /// Text starting with `0x` is read as hexadecimal, anything else as
    /// decimal. The resulting base matches the form that was read.
    pub fn parse(s: &str) -> Result<Self, BoundedIntError> {
        let mut value = Self::zero();
        value.set_string(s)?;
        Ok(value)
    }

    /// Parse unprefixed decimal text; the result renders in decimal
    pub fn from_decimal_str(s: &str) -> Result<Self, BoundedIntError> {
        let mut value = Self::zero();
        value.set_decimal_string(s)?;
        Ok(value)
    }

    /// Parse `0x`-prefixed hexadecimal text; the result renders in hexadecimal
    pub fn from_hex_str(s: &str) -> Result<Self, BoundedIntError> {
        let mut value = Self::zero();
        value.set_hex_string(s)?;
        Ok(value)
    }

    /// Decode minimal (or zero-padded) big-endian bytes
    ///
    /// An empty slice is zero. Leading zero bytes are ignored, so the bound
    /// applies to the value, not to the slice length. The result renders in
    /// hexadecimal.
    ///
    /// # Returns
    /// * `Ok(BoundedInt)` - The decoded value
    /// * `Err(BoundedIntError::OverlengthValue)` - The value needs more than 256 bits
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, BoundedIntError> {
        let significant = match bytes.iter().position(|&b| b != 0) {
            Some(start) => &bytes[start..],
            None => &[][..],
        };
        if significant.len() > MAX_BYTE_LENGTH {
            return Err(BoundedIntError::OverlengthValue);
        }
        let magnitude = significant.iter().fold(Natural::from(0u32), |acc, &b| {
            (acc << 8u64) + Natural::from(b)
        });
        Self::new(magnitude)
    }

    /// Replace the value with parsed text in either base
    ///
    /// On failure the receiver keeps its previous value and base.
    pub fn set_string(&mut self, s: &str) -> Result<(), BoundedIntError> {
        if text::has_hex_prefix(s) {
            self.set_hex_string(s)
        } else {
            self.set_decimal_string(s)
        }
    }

    /// Replace the value with parsed decimal text and switch to decimal rendering
    ///
    /// On failure the receiver keeps its previous value and base.
    pub fn set_decimal_string(&mut self, s: &str) -> Result<(), BoundedIntError> {
        let magnitude = text::parse_decimal(s)?;
        self.magnitude = magnitude;
        self.base = Base::Decimal;
        Ok(())
    }

    /// Replace the value with parsed hexadecimal text and switch to hexadecimal rendering
    ///
    /// On failure the receiver keeps its previous value and base.
    pub fn set_hex_string(&mut self, s: &str) -> Result<(), BoundedIntError> {
        let magnitude = text::parse_hex(s)?;
        self.magnitude = magnitude;
        self.base = Base::Hexadecimal;
        Ok(())
    }

    /// Replace the value with decoded big-endian bytes and reset to hexadecimal rendering
    ///
    /// On failure the receiver is left untouched.
    pub fn set_bytes_be(&mut self, bytes: &[u8]) -> Result<(), BoundedIntError> {
        *self = Self::from_bytes_be(bytes)?;
        Ok(())
    }

    /// Preferred text base
    pub fn base(&self) -> Base {
        self.base
    }

    pub fn set_base_to_decimal(&mut self) {
        self.base = Base::Decimal;
    }

    pub fn set_base_to_hexadecimal(&mut self) {
        self.base = Base::Hexadecimal;
    }

    /// Same magnitude, rendered in `base`
    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    /// Number of significant bits (0 for zero)
    pub fn bit_length(&self) -> u64 {
        self.magnitude.significant_bits()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0u32
    }

    /// Borrow the underlying magnitude
    pub fn as_natural(&self) -> &Natural {
        &self.magnitude
    }

    /// Copy of the underlying magnitude
    pub fn to_natural(&self) -> Natural {
        self.magnitude.clone()
    }

    pub fn into_natural(self) -> Natural {
        self.magnitude
    }

    /// Minimal big-endian bytes, no sign and no padding. Zero is empty.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        PowerOf2Digits::<u8>::to_power_of_2_digits_desc(&self.magnitude, 8)
    }

    /// Render in the preferred base
    pub fn to_text(&self) -> String {
        match self.base {
            Base::Decimal => self.to_decimal_string(),
            Base::Hexadecimal => self.to_hex_string(),
        }
    }

    /// Render as decimal regardless of the preferred base
    pub fn to_decimal_string(&self) -> String {
        text::render_decimal(&self.magnitude)
    }

    /// Render as `0x`-prefixed hexadecimal regardless of the preferred base
    pub fn to_hex_string(&self) -> String {
        text::render_hex(&self.magnitude)
    }
}

impl Default for BoundedInt {
    fn default() -> Self {
        Self {
            magnitude: Natural::from(0u32),
            base: Base::default(),
        }
    }
}

impl PartialEq for BoundedInt {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for BoundedInt {}

impl PartialOrd for BoundedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoundedInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl Hash for BoundedInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl fmt::Display for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::LowerHex for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, text::HEX_PREFIX, &format!("{:x}", self.magnitude))
    }
}

impl FromStr for BoundedInt {
    type Err = BoundedIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Natural> for BoundedInt {
    type Error = BoundedIntError;

    fn try_from(value: Natural) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Integer> for BoundedInt {
    type Error = BoundedIntError;

    fn try_from(value: Integer) -> Result<Self, Self::Error> {
        Self::from_integer(&value)
    }
}

impl TryFrom<&str> for BoundedInt {
    type Error = BoundedIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<BoundedInt> for Natural {
    fn from(value: BoundedInt) -> Self {
        value.magnitude
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BoundedInt {
                fn from(value: $t) -> Self {
                    Self {
                        magnitude: Natural::from(value),
                        base: Base::default(),
                    }
                }
            }
        )*
    };
}

impl_from_primitive!(u8, u16, u32, u64, u128);
