//! Server info over the Ark server's REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::cache::NetworkInfoCache;
use crate::config::ExplorerConfig;
use crate::info::{AspInfo, InfoError};
use crate::session::SessionStore;
use crate::source::NetworkInfoSource;

pub const INFO_PATH: &str = "/v1/info";

/// Reads server info from an Ark server's REST API.
#[derive(Clone)]
pub struct HttpInfoSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpInfoSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InfoError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| InfoError::Http(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn info_url(&self) -> String {
        format!("{}{}", self.base_url, INFO_PATH)
    }
}

#[async_trait]
impl NetworkInfoSource for HttpInfoSource {
    async fn fetch(&self) -> Result<AspInfo, InfoError> {
        let url = self.info_url();
        debug!(url = %url, "fetching server info");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| InfoError::Http(e.to_string()))?;

        match resp.status() {
            StatusCode::OK => resp.json::<AspInfo>().await.map_err(|e| InfoError::Decode(e.to_string())),
            other => Err(InfoError::BadResponse(format!(
                "status={} body={:?}",
                other,
                resp.text().await.ok()
            ))),
        }
    }
}

/// Build the HTTP-backed cache described by `config`, attaching session
/// persistence when a path is configured.
pub fn cache_from_config(config: &ExplorerConfig) -> Result<NetworkInfoCache<HttpInfoSource>, InfoError> {
    let source = HttpInfoSource::new(config.asp_url.clone(), config.request_timeout())?;
    let cache = NetworkInfoCache::new(source, config.info_ttl());
    Ok(match &config.session_path {
        Some(path) => cache.with_session(SessionStore::new(path)),
        None => cache,
    })
}
