//! Errors during parsing/handling/conversion of primitives.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// (expected, actual)
    #[error("invalid length (expected {0} bytes, got {1})")]
    InvalidLength(usize, usize),
}
