//! JSON Interop
//!
//! A `BoundedInt` travels through JSON as a single string: unprefixed decimal
//! digits or `0x`-prefixed lowercase hex, depending on its preferred base.
//! Deserialization accepts either form and keeps the base it found.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::bounded_int::BoundedInt;

impl Serialize for BoundedInt {
    /// Serializes as a string in the preferred base
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for BoundedInt {
    /// Deserializes from a decimal or `0x`-prefixed hexadecimal string
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BoundedIntVisitor)
    }
}

struct BoundedIntVisitor;

impl<'de> Visitor<'de> for BoundedIntVisitor {
    type Value = BoundedInt;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal or 0x-prefixed hexadecimal integer string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BoundedInt::parse(v).map_err(E::custom)
    }
}
