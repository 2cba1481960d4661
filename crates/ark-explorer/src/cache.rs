//! TTL cache for server info.
//!
//! Readers clone an `Arc` out of a read lock, so a snapshot is always seen
//! whole. Refreshes are serialized by a separate mutex and the new snapshot
//! is swapped in only after fetch and validation succeed: a failed or
//! cancelled refresh leaves the previous snapshot in place.
//!
//! Callers queued behind a refresh take its outcome, failure included,
//! instead of fetching again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::info::{InfoError, NetworkInfo};
use crate::session::{SessionError, SessionStore};
use crate::source::NetworkInfoSource;

/// One hour.
pub const DEFAULT_INFO_TTL: Duration = Duration::from_secs(60 * 60);

/// A validated snapshot and the unix time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedInfo {
    pub info: NetworkInfo,
    pub fetched_at: u64,
}

impl CachedInfo {
    /// Snapshots dated in the future are treated as stale.
    pub fn is_fresh(&self, now: u64, ttl: Duration) -> bool {
        now.checked_sub(self.fetched_at)
            .is_some_and(|age| Duration::from_secs(age) < ttl)
    }
}

pub fn now_unix() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

pub struct NetworkInfoCache<S> {
    source: S,
    ttl: Duration,
    snapshot: RwLock<Option<Arc<CachedInfo>>>,
    /// Guards refreshes and holds the error of the last completed attempt.
    refresh: Mutex<Option<InfoError>>,
    /// Completed refresh attempts.
    attempts: AtomicU64,
    session: Option<SessionStore>,
}

impl<S: NetworkInfoSource> NetworkInfoCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: RwLock::new(None),
            refresh: Mutex::new(None),
            attempts: AtomicU64::new(0),
            session: None,
        }
    }

    /// Persist every successful refresh to `store`.
    pub fn with_session(mut self, store: SessionStore) -> Self {
        self.session = Some(store);
        self
    }

    /// Seed the cache with an existing snapshot.
    pub fn with_snapshot(self, cached: CachedInfo) -> Self {
        Self {
            snapshot: RwLock::new(Some(Arc::new(cached))),
            ..self
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Load the persisted snapshot, if any, regardless of its age. Freshness
    /// is checked on the next [`get`](Self::get). Returns whether a snapshot
    /// was restored.
    pub async fn restore(&self) -> Result<bool, SessionError> {
        let Some(store) = &self.session else {
            return Ok(false);
        };
        match store.load().await? {
            Some(cached) => {
                debug!(fetched_at = cached.fetched_at, path = %store.path().display(), "restored network info");
                *self.snapshot.write().await = Some(Arc::new(cached));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The current snapshot, fresh or not.
    pub async fn peek(&self) -> Option<Arc<CachedInfo>> {
        self.snapshot.read().await.clone()
    }

    /// Drop the snapshot so the next read refetches.
    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
    }

    pub async fn get(&self) -> Result<Arc<CachedInfo>, InfoError> {
        self.get_at(now_unix()).await
    }

    /// Return a snapshot fresh at `now`, refreshing if needed.
    pub async fn get_at(&self, now: u64) -> Result<Arc<CachedInfo>, InfoError> {
        if let Some(cached) = self.fresh(now).await {
            return Ok(cached);
        }

        let seen = self.attempts.load(Ordering::SeqCst);
        let mut last_error = self.refresh.lock().await;
        // Another caller may have refreshed while we waited.
        if let Some(cached) = self.fresh(now).await {
            return Ok(cached);
        }
        if self.attempts.load(Ordering::SeqCst) != seen {
            if let Some(e) = &*last_error {
                debug!(error = %e, "sharing failed refresh with waiting caller");
                return Err(e.clone());
            }
        }

        let result = self.source.fetch().await.and_then(NetworkInfo::try_from);
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let info = match result {
            Ok(info) => {
                *last_error = None;
                info
            }
            Err(e) => {
                warn!(error = %e, "network info refresh failed; keeping previous snapshot");
                *last_error = Some(e.clone());
                return Err(e);
            }
        };

        let cached = Arc::new(CachedInfo { info, fetched_at: now });
        *self.snapshot.write().await = Some(cached.clone());
        info!(
            network = %cached.info.network_name,
            signer = %cached.info.server_pubkey,
            "refreshed network info"
        );

        if let Some(store) = &self.session {
            if let Err(e) = store.save(&cached).await {
                warn!(error = %e, path = %store.path().display(), "failed to persist network info");
            }
        }

        Ok(cached)
    }

    async fn fresh(&self, now: u64) -> Option<Arc<CachedInfo>> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .filter(|c| c.is_fresh(now, self.ttl))
            .cloned()
    }
}
