//! Codec error types.

use thiserror::Error;

/// Errors raised while encoding or decoding Bech32 strings.
///
/// Every failure mode has its own variant so callers can react to the
/// precise cause without inspecting the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    /// Leftover bits after 5-to-8 repacking were too many or non-zero.
    #[error("invalid padding in word sequence")]
    InvalidPadding,

    #[error("word value {0} out of range")]
    InvalidWord(u8),

    #[error("encoded length {len} exceeds maximum {max}")]
    LengthExceeded { len: usize, max: usize },

    #[error("invalid human-readable part")]
    InvalidHrp,

    #[error("mixed-case string")]
    MixedCase,

    #[error("missing separator or data part too short")]
    NoSeparator,

    #[error("invalid character {ch:?} at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("checksum mismatch")]
    ChecksumMismatch,
}
