//! Public key forms used in Ark addresses.

use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

pub const COMPRESSED_KEY_LEN: usize = 33;
pub const X_ONLY_KEY_LEN: usize = 32;

/// A 32-byte x-only public key (BIP-340).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XOnlyKey([u8; X_ONLY_KEY_LEN]);

impl XOnlyKey {
    pub const fn new(bytes: [u8; X_ONLY_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns `None` unless `bytes` is exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; X_ONLY_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for XOnlyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XOnlyKey({})", self.to_hex())
    }
}

impl fmt::Display for XOnlyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A 33-byte SEC1 compressed public key.
///
/// Only the encoding is checked: the leading byte must be a parity marker
/// (0x02 or 0x03). The x-coordinate is not verified to lie on the curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPubKey([u8; COMPRESSED_KEY_LEN]);

impl CompressedPubKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; COMPRESSED_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidKey("compressed key must be 33 bytes"))?;
        if !matches!(arr[0], 0x02 | 0x03) {
            return Err(AddressError::InvalidKey("parity byte must be 0x02 or 0x03"));
        }
        Ok(Self(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(s).map_err(|_| AddressError::InvalidKey("not valid hex"))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; COMPRESSED_KEY_LEN] {
        &self.0
    }

    /// Drop the parity byte.
    pub fn x_only(&self) -> XOnlyKey {
        let mut x = [0u8; X_ONLY_KEY_LEN];
        x.copy_from_slice(&self.0[1..]);
        XOnlyKey(x)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for CompressedPubKey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for CompressedPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPubKey({})", self.to_hex())
    }
}

impl fmt::Display for CompressedPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
