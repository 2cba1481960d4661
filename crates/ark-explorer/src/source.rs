//! Network info source seam.

use async_trait::async_trait;

use crate::info::{AspInfo, InfoError};

/// Where server info comes from. Implementations perform the I/O; caching
/// and validation live in [`crate::cache::NetworkInfoCache`].
#[async_trait]
pub trait NetworkInfoSource: Send + Sync {
    async fn fetch(&self) -> Result<AspInfo, InfoError>;
}
