//! Address error types.

use ark_bech32::Bech32Error;
use thiserror::Error;

/// Errors raised while building or parsing an Ark address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid taproot script: {0}")]
    InvalidScript(&'static str),

    #[error("invalid server key: {0}")]
    InvalidKey(&'static str),

    #[error("unsupported address version {0}")]
    UnsupportedVersion(u8),

    #[error("unrecognized human-readable part {0:?}")]
    UnrecognizedHrp(String),

    #[error("invalid payload length: expected {expected}, got {got}")]
    InvalidPayload { expected: usize, got: usize },

    #[error(transparent)]
    Codec(#[from] Bech32Error),
}

/// Flat classification of [`AddressError`].
///
/// Callers that present a single message to users still need to branch on
/// the cause; this is the stable thing to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidScript,
    InvalidKey,
    LengthExceeded,
    InvalidHrp,
    MixedCase,
    NoSeparator,
    InvalidChar,
    ChecksumMismatch,
    UnsupportedVersion,
    UnrecognizedHrp,
    /// Payload of the wrong size, or words that do not repack into bytes.
    InvalidPayload,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidScript => "invalid_script",
            ErrorKind::InvalidKey => "invalid_key",
            ErrorKind::LengthExceeded => "length_exceeded",
            ErrorKind::InvalidHrp => "invalid_hrp",
            ErrorKind::MixedCase => "mixed_case",
            ErrorKind::NoSeparator => "no_separator",
            ErrorKind::InvalidChar => "invalid_char",
            ErrorKind::ChecksumMismatch => "checksum_mismatch",
            ErrorKind::UnsupportedVersion => "unsupported_version",
            ErrorKind::UnrecognizedHrp => "unrecognized_hrp",
            ErrorKind::InvalidPayload => "invalid_payload",
        }
    }
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::InvalidScript(_) => ErrorKind::InvalidScript,
            AddressError::InvalidKey(_) => ErrorKind::InvalidKey,
            AddressError::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            AddressError::UnrecognizedHrp(_) => ErrorKind::UnrecognizedHrp,
            AddressError::InvalidPayload { .. } => ErrorKind::InvalidPayload,
            AddressError::Codec(e) => match e {
                Bech32Error::LengthExceeded { .. } => ErrorKind::LengthExceeded,
                Bech32Error::InvalidHrp => ErrorKind::InvalidHrp,
                Bech32Error::MixedCase => ErrorKind::MixedCase,
                Bech32Error::NoSeparator => ErrorKind::NoSeparator,
                Bech32Error::InvalidChar { .. } => ErrorKind::InvalidChar,
                Bech32Error::ChecksumMismatch => ErrorKind::ChecksumMismatch,
                Bech32Error::InvalidPadding | Bech32Error::InvalidWord(_) => ErrorKind::InvalidPayload,
            },
        }
    }
}
