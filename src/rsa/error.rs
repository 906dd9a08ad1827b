// RSA layer errors

use thiserror::Error;

use crate::bigint::{self, ParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// Blocks must satisfy `0 <= m < n`
    #[error("message block must be non-negative and smaller than the modulus")]
    MessageOutOfRange,

    #[error("modulus must be greater than one")]
    InvalidModulus,

    #[error(transparent)]
    Arithmetic(#[from] bigint::Error),

    #[error("cannot encode character {found:?} at position {position}")]
    Encoding { position: usize, found: char },

    #[error("cannot decode digit block {block:?}")]
    Decoding { block: String },

    #[error("key generation failed: {0}")]
    KeyGeneration(String),
}

impl From<ParseError> for RsaError {
    fn from(e: ParseError) -> Self {
        RsaError::Arithmetic(e.into())
    }
}
