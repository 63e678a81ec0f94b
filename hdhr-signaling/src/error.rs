//! Error types for signaling decode operations.

use thiserror::Error;

/// Errors from the Base64 decoder.
///
/// The decoder is all-or-nothing: any of these aborts the decode with no
/// partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// Input length is not a multiple of four.
    #[error("Base64 length {0} is not a multiple of 4")]
    BadLength(usize),

    /// A byte outside the Base64 alphabet.
    #[error("invalid Base64 character {0:?} at offset {1}")]
    InvalidCharacter(char, usize),

    /// `=` somewhere other than the tail of the final quartet.
    #[error("misplaced Base64 padding at offset {0}")]
    BadPadding(usize),
}

/// An attempt to read past the end of a bit buffer.
///
/// The L1 decoder treats this as "signaling truncated": it stops emitting
/// fields and marks the report rather than reading undefined data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("bit buffer exhausted: {wanted} bits requested at offset {offset}, buffer holds {len}")]
pub struct BitsExhausted {
    /// Bit offset at which the read was attempted.
    pub offset: usize,
    /// Number of bits requested.
    pub wanted: usize,
    /// Total buffer length in bits.
    pub len: usize,
}
