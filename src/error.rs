//! Public error type for the rijndael facade

use rijndael_algorithms::Error as PrimitiveError;
use thiserror::Error;

/// Errors returned by [`AesContext`](crate::AesContext) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is not 16, 24 or 32 bytes long
    #[error("invalid AES key length: expected 16, 24 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// A fixed-length input (block or IV) has the wrong length
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        /// What was being validated
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// An ECB or CBC buffer is not a whole number of blocks
    #[error("{context} length {actual} is not a multiple of the {block_size}-byte block size")]
    Misaligned {
        /// What was being validated
        context: &'static str,
        /// Block size in bytes
        block_size: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// A configuration parameter was rejected
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::KeyLength { actual } => Error::InvalidKeyLength(actual),
            PrimitiveError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidLength {
                context,
                expected,
                actual,
            },
            PrimitiveError::BlockAlignment {
                context,
                block_size,
                actual,
            } => Error::Misaligned {
                context,
                block_size,
                actual,
            },
            PrimitiveError::Parameter { name, reason } => Error::InvalidParameter { name, reason },
        }
    }
}

/// Result type for facade operations
pub type Result<T> = core::result::Result<T, Error>;
