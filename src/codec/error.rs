//! Parse error type.

use core::fmt::{self, Debug, Display};

/// Text parsing errors.
///
/// The variants deliberately carry no payload: no offending character, no
/// position, nothing derived from the input. Parsed text may hold key
/// material, and an error that quotes its input would leak it through panic
/// messages and logs.
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A character outside the expected digit alphabet was found.
    InvalidDigit,
    /// The input has more digits than the integer width can hold.
    InputTooLong,
}

impl Debug for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit => f.write_str("ParseError::InvalidDigit"),
            Self::InputTooLong => f.write_str("ParseError::InputTooLong"),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit => f.write_str("invalid digit"),
            Self::InputTooLong => f.write_str("input too long for the integer width"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
