// Arithmetic and parsing errors

use thiserror::Error;

/// Malformed decimal input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No digits after the optional sign
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character other than `0-9` (or `-` in first position)
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// Only decimal text is understood
    #[error("unsupported radix {0}, only base 10 is supported")]
    UnsupportedRadix(u32),
}

/// Errors raised by checked arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent must not be negative")]
    NegativeExponent,
}
