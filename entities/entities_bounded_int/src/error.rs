//! Error Types
//!
//! Every failure the bounded integer can report, from text parsing through
//! storage decoding, is a variant of [`BoundedIntError`]. Callers branch on
//! [`BoundedIntError::kind`] rather than on message text.

use crate::bounded_int::{MAX_BIT_LENGTH, MAX_BYTE_LENGTH};

/// Longest input excerpt kept inside a [`BoundedIntError::Parse`].
const MAX_EXCERPT_CHARS: usize = 80;

/// Errors raised while building, parsing or decoding a `BoundedInt`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundedIntError {
    /// Text does not match the grammar of the selected base
    #[error("failed to parse {input:?}: {reason}")]
    Parse {
        /// Offending input (truncated when very long)
        input: String,
        /// Which rule was broken
        reason: &'static str,
    },

    /// The value is below zero
    #[error("the value must be 0 or more")]
    NegativeValue,

    /// The value needs more than 256 bits
    #[error("the length of the value in bits must be {} or less", MAX_BIT_LENGTH)]
    OverlengthValue,

    /// A strict scan received an absent (NULL) source
    #[error("the source must not be null")]
    NilSource,

    /// The storage source is not a byte sequence
    #[error("the type of the source must be bytes, got {kind}")]
    UnsupportedSource {
        /// Name of the storage value variant that was supplied
        kind: &'static str,
    },

    /// A strict scan received a zero-length byte sequence
    #[error("the length of the source in bytes must be greater than 0")]
    EmptyInput,

    /// A strict scan received more than 32 bytes
    #[error("the length of the source in bytes must be {} or less, got {len}", MAX_BYTE_LENGTH)]
    OverlengthInput {
        /// Number of bytes supplied
        len: usize,
    },
}

/// Fieldless discriminant of [`BoundedIntError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    NegativeValue,
    OverlengthValue,
    NilSource,
    UnsupportedSource,
    EmptyInput,
    OverlengthInput,
}

impl BoundedIntError {
    /// Build a parse error, keeping at most a short excerpt of the input.
    pub fn parse(input: &str, reason: &'static str) -> Self {
        let input = if input.chars().count() > MAX_EXCERPT_CHARS {
            let mut excerpt: String = input.chars().take(MAX_EXCERPT_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        } else {
            input.to_string()
        };
        BoundedIntError::Parse { input, reason }
    }

    /// Kind of this error, for matching without fields
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoundedIntError::Parse { .. } => ErrorKind::Parse,
            BoundedIntError::NegativeValue => ErrorKind::NegativeValue,
            BoundedIntError::OverlengthValue => ErrorKind::OverlengthValue,
            BoundedIntError::NilSource => ErrorKind::NilSource,
            BoundedIntError::UnsupportedSource { .. } => ErrorKind::UnsupportedSource,
            BoundedIntError::EmptyInput => ErrorKind::EmptyInput,
            BoundedIntError::OverlengthInput { .. } => ErrorKind::OverlengthInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoundedIntError::NegativeValue.to_string(),
            "the value must be 0 or more"
        );
        assert_eq!(
            BoundedIntError::OverlengthValue.to_string(),
            "the length of the value in bits must be 256 or less"
        );
        assert_eq!(
            BoundedIntError::OverlengthInput { len: 33 }.to_string(),
            "the length of the source in bytes must be 32 or less, got 33"
        );
        assert_eq!(
            BoundedIntError::UnsupportedSource { kind: "text" }.to_string(),
            "the type of the source must be bytes, got text"
        );
    }

    #[test]
    fn test_parse_error_truncates_long_input() {
        let long = "9".repeat(500);
        match BoundedIntError::parse(&long, "invalid decimal digit") {
            BoundedIntError::Parse { input, reason } => {
                assert_eq!(input.len(), MAX_EXCERPT_CHARS + 3);
                assert!(input.ends_with("..."));
                assert_eq!(reason, "invalid decimal digit");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(BoundedIntError::parse("x", "bad").kind(), ErrorKind::Parse);
        assert_eq!(BoundedIntError::NilSource.kind(), ErrorKind::NilSource);
        assert_eq!(BoundedIntError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            BoundedIntError::UnsupportedSource { kind: "integer" }.kind(),
            ErrorKind::UnsupportedSource
        );
    }
}
