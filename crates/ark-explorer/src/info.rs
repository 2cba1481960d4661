//! Server info contract.

use ark_address::{AddressError, CompressedPubKey, Network};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from retrieving or validating server info.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InfoError {
    #[error("http error: {0}")]
    Http(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("malformed info response: {0}")]
    Decode(String),

    #[error("invalid signer key: {0}")]
    InvalidKey(#[source] AddressError),
}

/// The subset of the server's info response the explorer relies on.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspInfo {
    /// 33-byte compressed signer key, hex.
    pub signer_pubkey: String,
    /// Chain name, e.g. `bitcoin`, `testnet`, `signet`, `mutinynet`, `regtest`.
    pub network: String,
}

/// Validated server info: the only input the address codec needs from the
/// server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub server_pubkey: CompressedPubKey,
    pub network: Network,
    pub network_name: String,
}

impl NetworkInfo {
    pub fn new(server_pubkey: CompressedPubKey, network_name: impl Into<String>) -> Self {
        let network_name = network_name.into();
        Self {
            server_pubkey,
            network: Network::from_name(&network_name),
            network_name,
        }
    }

    pub fn is_testnet(&self) -> bool {
        self.network.is_testnet()
    }
}

impl TryFrom<AspInfo> for NetworkInfo {
    type Error = InfoError;

    fn try_from(raw: AspInfo) -> Result<Self, Self::Error> {
        let server_pubkey = CompressedPubKey::from_hex(&raw.signer_pubkey).map_err(InfoError::InvalidKey)?;
        Ok(NetworkInfo::new(server_pubkey, raw.network))
    }
}

impl From<&NetworkInfo> for AspInfo {
    fn from(info: &NetworkInfo) -> Self {
        AspInfo {
            signer_pubkey: info.server_pubkey.to_hex(),
            network: info.network_name.clone(),
        }
    }
}
