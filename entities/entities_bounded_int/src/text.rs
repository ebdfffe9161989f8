//! Text Codec Module
//!
//! Parsing and rendering of the two textual forms of a bounded integer:
//!
//! - **Decimal**: unprefixed ASCII digits, e.g. `2083236893`.
//! - **Hexadecimal**: the literal `0x` followed by hex digits, e.g. `0x7c2bac1d`.
//!   Rendering always uses lowercase digits and renders zero as `0x0`.
//!
//! All parsers validate the 256-bit bound before returning, and none of them
//! touch an existing value: they produce a fresh `Natural` or an error.

use std::str::FromStr;

use malachite::base::num::conversion::traits::FromStringBase;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Natural;

use crate::bounded_int::MAX_BIT_LENGTH;
use crate::error::BoundedIntError;

/// Prefix that marks hexadecimal text. Matched case-sensitively.
pub const HEX_PREFIX: &str = "0x";

/// Number of decimal digits in 2^256 - 1.
const MAX_DECIMAL_DIGITS: usize = 78;

/// Number of hex digits in 2^256 - 1.
const MAX_HEX_DIGITS: usize = 64;

/// Check whether text carries the hexadecimal prefix
pub fn has_hex_prefix(s: &str) -> bool {
    s.starts_with(HEX_PREFIX)
}

/// Parse unprefixed decimal digits
///
/// # Arguments
/// * `s` - Decimal text, optionally with a single leading `-`
///
/// # Returns
/// * `Ok(natural)` - The parsed magnitude, at most 256 bits
/// * `Err(BoundedIntError::NegativeValue)` - Well-formed digits preceded by `-`
/// * `Err(BoundedIntError::OverlengthValue)` - More than 256 bits
/// * `Err(BoundedIntError::Parse)` - Anything else that is not plain digits
pub fn parse_decimal(s: &str) -> Result<Natural, BoundedIntError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    if digits.is_empty() {
        return Err(BoundedIntError::parse(s, "missing decimal digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoundedIntError::parse(s, "invalid decimal digit"));
    }
    if negative {
        return Err(BoundedIntError::NegativeValue);
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_DECIMAL_DIGITS {
        return Err(BoundedIntError::OverlengthValue);
    }
    if significant.is_empty() {
        return Ok(Natural::from(0u32));
    }

    let value = Natural::from_str(significant)
        .map_err(|_| BoundedIntError::parse(s, "invalid decimal digit"))?;
    check_bit_length(value)
}

/// Parse `0x`-prefixed hexadecimal text
///
/// The prefix is mandatory and case-sensitive. Digits may be upper or lower
/// case, leading zeros are allowed and an odd digit count is fine.
///
/// # Arguments
/// * `s` - Hexadecimal text such as `0x7c2bac1d`
///
/// # Returns
/// * `Ok(natural)` - The parsed magnitude, at most 256 bits
/// * `Err(BoundedIntError::Parse)` - Missing prefix, no digits or a non-hex digit
/// * `Err(BoundedIntError::OverlengthValue)` - More than 256 bits
pub fn parse_hex(s: &str) -> Result<Natural, BoundedIntError> {
    let digits = s
        .strip_prefix(HEX_PREFIX)
        .ok_or_else(|| BoundedIntError::parse(s, "invalid hex string"))?;

    if digits.is_empty() {
        return Err(BoundedIntError::parse(s, "missing hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BoundedIntError::parse(s, "invalid hex digit"));
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_HEX_DIGITS {
        return Err(BoundedIntError::OverlengthValue);
    }
    if significant.is_empty() {
        return Ok(Natural::from(0u32));
    }

    let value = Natural::from_string_base(16, &significant.to_ascii_lowercase())
        .ok_or_else(|| BoundedIntError::parse(s, "invalid hex digit"))?;
    check_bit_length(value)
}

/// Render as unprefixed decimal digits (`0` for zero)
pub fn render_decimal(value: &Natural) -> String {
    value.to_string()
}

/// Render as `0x` followed by lowercase hex digits (`0x0` for zero)
pub fn render_hex(value: &Natural) -> String {
    format!("{}{:x}", HEX_PREFIX, value)
}

/// Reject values wider than 256 bits.
pub(crate) fn check_bit_length(value: Natural) -> Result<Natural, BoundedIntError> {
    if value.significant_bits() > MAX_BIT_LENGTH {
        return Err(BoundedIntError::OverlengthValue);
    }
    Ok(value)
}
