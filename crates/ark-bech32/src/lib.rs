#![forbid(unsafe_code)]

//! Bech32 / Bech32m codec.
//!
//! This crate provides:
//! - 8-bit to 5-bit word repacking
//! - The BCH checksum for both the original and the "m" variant
//! - Human-readable part expansion and validation
//! - String encoding and decoding with a caller-supplied maximum length

pub mod checksum;
pub mod codec;
pub mod convert;
pub mod error;
pub mod hrp;
pub mod word;

#[cfg(test)]
mod proptests;

pub use checksum::Variant;
pub use codec::{decode, decode_any, encode, Decoded, DEFAULT_MAX_LENGTH};
pub use convert::{bytes_to_words, words_to_bytes};
pub use error::Bech32Error;
pub use word::Word;
