//! Durable storage for the session record
//!
//! Exactly one record (key `user`) is kept. The record is opaque JSON text;
//! parsing is the session service's job.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;
use tradarts_common::Result;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stored record, if any
    async fn load(&self) -> Result<Option<String>>;

    /// Replace the stored record
    async fn save(&self, record: &str) -> Result<()>;

    /// Remove the stored record; removing an absent record is not an error
    async fn clear(&self) -> Result<()>;
}

/// Record kept as a JSON file (`user.json`) in the data folder
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, record: &str) -> Result<()> {
        // Write then rename so a crash never leaves a half-written record
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, record).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Session record written to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `record`
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(record.into())),
        }
    }

    pub async fn snapshot(&self) -> Option<String> {
        self.record.lock().await.clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.record.lock().await.clone())
    }

    async fn save(&self, record: &str) -> Result<()> {
        *self.record.lock().await = Some(record.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.record.lock().await = None;
        Ok(())
    }
}
