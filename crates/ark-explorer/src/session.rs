//! Persistence of the cached server info across sessions.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::CachedInfo;
use crate::info::{AspInfo, InfoError, NetworkInfo};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid session record: {0}")]
    Invalid(#[from] InfoError),
}

/// On-disk form: the server contract plus the fetch time.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    #[serde(flatten)]
    info: AspInfo,
    fetched_at: u64,
}

/// A JSON file holding the last good snapshot.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write via a uniquely named sibling temp file and rename, so readers
    /// never see a partial record and concurrent writers never share a
    /// temp file.
    pub async fn save(&self, cached: &CachedInfo) -> Result<(), SessionError> {
        let record = SessionRecord {
            info: AspInfo::from(&cached.info),
            fetched_at: cached.fetched_at,
        };
        let bytes = serde_json::to_vec_pretty(&record)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir).await?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub async fn load(&self) -> Result<Option<CachedInfo>, SessionError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: SessionRecord = serde_json::from_slice(&bytes)?;
        Ok(Some(CachedInfo {
            info: NetworkInfo::try_from(record.info)?,
            fetched_at: record.fetched_at,
        }))
    }

    pub async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
