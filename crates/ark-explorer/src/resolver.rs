//! Address resolution for display.
//!
//! Failures are returned as errors, never as a placeholder string in place
//! of an address. Callers show [`ResolveError::user_message`] and branch on
//! [`ResolveError::kind`].

use std::sync::Arc;

use ark_address::{AddressError, ArkAddress, ErrorKind, TaprootScript};
use thiserror::Error;
use tracing::debug;

use crate::cache::NetworkInfoCache;
use crate::info::InfoError;
use crate::source::NetworkInfoSource;
use crate::vtxo::Vtxo;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("network info unavailable: {0}")]
    Info(#[from] InfoError),

    #[error(transparent)]
    Address(#[from] AddressError),
}

impl ResolveError {
    /// The codec failure kind, if this is a codec failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ResolveError::Info(_) => None,
            ResolveError::Address(e) => Some(e.kind()),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ResolveError::Info(_) => "Server information is unavailable. Try again later.",
            ResolveError::Address(_) => "This output has no valid Ark address.",
        }
    }
}

pub struct AddressResolver<S> {
    cache: Arc<NetworkInfoCache<S>>,
}

impl<S> Clone for AddressResolver<S> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<S: NetworkInfoSource> AddressResolver<S> {
    pub fn new(cache: Arc<NetworkInfoCache<S>>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &NetworkInfoCache<S> {
        &self.cache
    }

    /// The script is validated before server info is fetched.
    pub async fn address_for_script(&self, script_hex: &str) -> Result<String, ResolveError> {
        let script = TaprootScript::from_hex(script_hex).inspect_err(|e| {
            debug!(kind = e.kind().as_str(), "script rejected");
        })?;
        let cached = self.cache.get().await?;
        let address = ArkAddress::from_script(&script, &cached.info.server_pubkey, cached.info.network);
        Ok(address.encode()?)
    }

    pub async fn address_for_vtxo(&self, vtxo: &Vtxo) -> Result<String, ResolveError> {
        self.address_for_script(&vtxo.script).await.inspect_err(|e| {
            debug!(outpoint = %vtxo.outpoint(), error = %e, "could not resolve vtxo address");
        })
    }
}
