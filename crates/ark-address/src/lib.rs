#![forbid(unsafe_code)]

//! Ark address format.
//!
//! An Ark address binds a Taproot output key to the Ark server that
//! co-signs for it:
//!
//! ```text
//! hrp ‖ "1" ‖ bech32m(version ‖ server x-only key ‖ output key)
//! ```
//!
//! with `hrp` = `ark` on mainnet and `tark` everywhere else. Everything here
//! is pure; the server key is supplied by the caller.

pub mod address;
pub mod error;
pub mod key;
pub mod network;
pub mod script;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use address::{decode_address, encode_address, ArkAddress, ADDRESS_VERSION, ARK_MAX_LENGTH, PAYLOAD_LEN};
pub use error::{AddressError, ErrorKind};
pub use key::{CompressedPubKey, XOnlyKey};
pub use network::Network;
pub use script::TaprootScript;
