//! Pay-to-Taproot output scripts.

use crate::error::AddressError;
use crate::key::{XOnlyKey, X_ONLY_KEY_LEN};

/// OP_1 followed by a 32-byte push.
pub const TAPROOT_MARKER: [u8; 2] = [0x51, 0x20];
pub const TAPROOT_SCRIPT_LEN: usize = TAPROOT_MARKER.len() + X_ONLY_KEY_LEN;

/// A single-key P2TR output script: `OP_1 <32-byte output key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaprootScript {
    output_key: XOnlyKey,
}

impl TaprootScript {
    pub fn new(output_key: XOnlyKey) -> Self {
        Self { output_key }
    }

    /// Parse a hex script. The marker is checked before anything else, so a
    /// wrong script type is reported even when the rest is malformed.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let marker_ok = s
            .get(..TAPROOT_MARKER.len() * 2)
            .is_some_and(|p| p.eq_ignore_ascii_case("5120"));
        if !marker_ok {
            return Err(AddressError::InvalidScript("expected OP_1 push-32 marker"));
        }

        let bytes = hex::decode(s).map_err(|_| AddressError::InvalidScript("not valid hex"))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let key = bytes
            .strip_prefix(&TAPROOT_MARKER)
            .ok_or(AddressError::InvalidScript("expected OP_1 push-32 marker"))?;
        let output_key = XOnlyKey::from_slice(key)
            .ok_or(AddressError::InvalidScript("output key must be 32 bytes"))?;
        Ok(Self { output_key })
    }

    pub fn output_key(&self) -> &XOnlyKey {
        &self.output_key
    }

    pub fn to_bytes(&self) -> [u8; TAPROOT_SCRIPT_LEN] {
        let mut out = [0u8; TAPROOT_SCRIPT_LEN];
        out[..2].copy_from_slice(&TAPROOT_MARKER);
        out[2..].copy_from_slice(self.output_key.as_bytes());
        out
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_key() {
        let script = TaprootScript::from_hex(&format!("5120{}", "11".repeat(32))).unwrap();
        assert_eq!(script.output_key(), &XOnlyKey::new([0x11; 32]));
    }

    #[test]
    fn test_wrong_marker() {
        let err = TaprootScript::from_hex(&format!("5121{}", "11".repeat(32))).unwrap_err();
        assert!(matches!(err, AddressError::InvalidScript(_)));

        // P2WPKH: OP_0 push-20
        let err = TaprootScript::from_hex(&format!("0014{}", "11".repeat(20))).unwrap_err();
        assert!(matches!(err, AddressError::InvalidScript(_)));
    }

    #[test]
    fn test_wrong_key_length() {
        for n in [0, 31, 33] {
            let err = TaprootScript::from_hex(&format!("5120{}", "11".repeat(n))).unwrap_err();
            assert!(matches!(err, AddressError::InvalidScript(_)), "{n} bytes");
        }
    }

    #[test]
    fn test_short_or_odd_input() {
        let odd = format!("5120{}1", "11".repeat(32));
        for s in ["", "51", "512", odd.as_str()] {
            assert!(matches!(TaprootScript::from_hex(s), Err(AddressError::InvalidScript(_))), "{s:?}");
        }
    }

    #[test]
    fn test_hex_round_trip() {
        let hex = format!("5120{}", "ab".repeat(32));
        let script = TaprootScript::from_hex(&hex.to_ascii_uppercase()).unwrap();
        assert_eq!(script.to_hex(), hex);
    }
}
