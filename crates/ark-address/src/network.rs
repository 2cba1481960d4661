//! Network selection and human-readable parts.

use std::fmt;

pub const HRP_MAINNET: &str = "ark";
pub const HRP_TESTNET: &str = "tark";

/// Network name an Ark server reports for Bitcoin mainnet.
pub const MAINNET_NAME: &str = "bitcoin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    /// Any non-mainnet chain (testnet, signet, mutinynet, regtest).
    Testnet,
}

impl Network {
    pub fn from_testnet_flag(is_testnet: bool) -> Self {
        if is_testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Map a server-reported network name. Only `"bitcoin"` is mainnet.
    pub fn from_name(name: &str) -> Self {
        Self::from_testnet_flag(name != MAINNET_NAME)
    }

    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            HRP_MAINNET => Some(Network::Mainnet),
            HRP_TESTNET => Some(Network::Testnet),
            _ => None,
        }
    }

    pub fn is_testnet(self) -> bool {
        self == Network::Testnet
    }

    pub fn hrp(self) -> &'static str {
        match self {
            Network::Mainnet => HRP_MAINNET,
            Network::Testnet => HRP_TESTNET,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}
