//! Ark explorer support library.
//!
//! This crate implements the pieces of the explorer that sit around the
//! address codec:
//! - The server info contract (`GET /v1/info`) and its validation
//! - A TTL cache with single-flight, atomic refresh
//! - Persistence of the cached snapshot across sessions
//! - The VTXO record and address resolution for display
//! - Configuration loading

#![forbid(unsafe_code)]

// Server info
pub mod info;
pub mod source;
pub mod cache;
pub mod session;

// Records and display
pub mod vtxo;
pub mod resolver;

pub mod config;

#[cfg(feature = "http")]
pub mod http;

pub use cache::{CachedInfo, NetworkInfoCache, DEFAULT_INFO_TTL};
pub use config::{ConfigError, ExplorerConfig};
pub use info::{AspInfo, InfoError, NetworkInfo};
pub use resolver::{AddressResolver, ResolveError};
pub use session::{SessionError, SessionStore};
pub use source::NetworkInfoSource;
pub use vtxo::{TxType, Vtxo};
