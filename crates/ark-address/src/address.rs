//! Versioned Ark address encoding.

use std::str::FromStr;

use ark_bech32::{bytes_to_words, codec, Variant};

use crate::error::AddressError;
use crate::key::{CompressedPubKey, XOnlyKey, X_ONLY_KEY_LEN};
use crate::network::Network;
use crate::script::TaprootScript;

/// The only payload version currently defined.
pub const ADDRESS_VERSION: u8 = 0x00;

/// version ‖ server x-only key ‖ output key
pub const PAYLOAD_LEN: usize = 1 + 2 * X_ONLY_KEY_LEN;

/// Length limit for Ark addresses. The payload alone is 104 words, well
/// past the generic 90-character limit.
pub const ARK_MAX_LENGTH: usize = 1023;

/// A decoded Ark address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArkAddress {
    version: u8,
    network: Network,
    server_key: XOnlyKey,
    output_key: XOnlyKey,
}

impl ArkAddress {
    pub fn new(network: Network, server_key: XOnlyKey, output_key: XOnlyKey) -> Self {
        Self {
            version: ADDRESS_VERSION,
            network,
            server_key,
            output_key,
        }
    }

    pub fn from_script(script: &TaprootScript, server_key: &CompressedPubKey, network: Network) -> Self {
        Self::new(network, server_key.x_only(), *script.output_key())
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn is_testnet(&self) -> bool {
        self.network.is_testnet()
    }

    pub fn server_key(&self) -> &XOnlyKey {
        &self.server_key
    }

    pub fn output_key(&self) -> &XOnlyKey {
        &self.output_key
    }

    /// The P2TR script this address pays to.
    pub fn to_script(&self) -> TaprootScript {
        TaprootScript::new(self.output_key)
    }

    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        out[0] = self.version;
        out[1..1 + X_ONLY_KEY_LEN].copy_from_slice(self.server_key.as_bytes());
        out[1 + X_ONLY_KEY_LEN..].copy_from_slice(self.output_key.as_bytes());
        out
    }

    pub fn from_payload(network: Network, payload: &[u8]) -> Result<Self, AddressError> {
        let (server_key, output_key) = split_payload(payload)?;
        Ok(Self::new(network, server_key, output_key))
    }

    pub fn encode(&self) -> Result<String, AddressError> {
        let words = bytes_to_words(&self.payload());
        Ok(codec::encode(self.network.hrp(), &words, ARK_MAX_LENGTH, Variant::Bech32m)?)
    }

    pub fn decode(s: &str) -> Result<Self, AddressError> {
        let decoded = codec::decode(s, ARK_MAX_LENGTH, Variant::Bech32m)?;
        let payload = decoded.to_bytes()?;
        let (server_key, output_key) = split_payload(&payload)?;
        let network = Network::from_hrp(&decoded.hrp).ok_or(AddressError::UnrecognizedHrp(decoded.hrp))?;
        Ok(Self::new(network, server_key, output_key))
    }
}

impl FromStr for ArkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Check the version byte, then the length, and split out both keys.
fn split_payload(payload: &[u8]) -> Result<(XOnlyKey, XOnlyKey), AddressError> {
    let (&version, keys) = payload.split_first().ok_or(AddressError::InvalidPayload {
        expected: PAYLOAD_LEN,
        got: 0,
    })?;
    if version != ADDRESS_VERSION {
        return Err(AddressError::UnsupportedVersion(version));
    }
    if payload.len() != PAYLOAD_LEN {
        return Err(AddressError::InvalidPayload {
            expected: PAYLOAD_LEN,
            got: payload.len(),
        });
    }

    let (server, output) = keys.split_at(X_ONLY_KEY_LEN);
    match (XOnlyKey::from_slice(server), XOnlyKey::from_slice(output)) {
        (Some(s), Some(o)) => Ok((s, o)),
        _ => Err(AddressError::InvalidPayload {
            expected: PAYLOAD_LEN,
            got: payload.len(),
        }),
    }
}

/// Build the address for a P2TR `script_hex` co-signed by the server key
/// `server_pubkey_hex` (33-byte compressed, hex).
///
/// Validation runs script first, then key, so a bad script is reported as
/// such even when the key is also malformed.
pub fn encode_address(script_hex: &str, server_pubkey_hex: &str, is_testnet: bool) -> Result<String, AddressError> {
    let script = TaprootScript::from_hex(script_hex)?;
    let server_key = CompressedPubKey::from_hex(server_pubkey_hex)?;
    ArkAddress::from_script(&script, &server_key, Network::from_testnet_flag(is_testnet)).encode()
}

pub fn decode_address(s: &str) -> Result<ArkAddress, AddressError> {
    ArkAddress::decode(s)
}
