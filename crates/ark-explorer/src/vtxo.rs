//! VTXO records as served by the explorer backend.

use ark_address::{AddressError, ArkAddress, TaprootScript};
use serde::{Deserialize, Serialize};

use crate::info::NetworkInfo;

/// How a VTXO came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    /// Fresh funds entering the Ark.
    Onboard,
    /// Being settled on-chain.
    Offboard,
    /// Off-chain transfer or refresh.
    Virtual,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vtxo {
    pub txid: String,
    pub vout: u32,
    /// Satoshis.
    pub amount: u64,
    /// P2TR output script, hex.
    pub script: String,
    pub created_at: i64,
    pub expires_at: i64,
    pub is_spent: bool,
    #[serde(default)]
    pub spent_by: String,
    pub tx_type: TxType,
}

impl Vtxo {
    pub fn outpoint(&self) -> String {
        format!("{}:{}", self.txid, self.vout)
    }

    /// The address this VTXO is locked to under the server in `info`.
    pub fn ark_address(&self, info: &NetworkInfo) -> Result<ArkAddress, AddressError> {
        let script = TaprootScript::from_hex(&self.script)?;
        Ok(ArkAddress::from_script(&script, &info.server_pubkey, info.network))
    }
}
