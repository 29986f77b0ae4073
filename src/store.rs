//! JSON document store.
//!
//! This module is the sole point of contact with durable storage. Each
//! collection lives in its own JSON document under the data directory
//! (`leads.json`, `customers.json`, ...), holding a single top-level key
//! that maps to an ordered array of records.
//!
//! Documents are always read and written whole: there is no partial update.
//! Writes go to a temporary file first and are renamed over the target, so a
//! crash mid-save leaves the previous document intact rather than a
//! truncated one.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::OwnedMutexGuard;

use crate::error::AppError;

/// Whole-document JSON storage rooted at a data directory.
///
/// # Concurrency
///
/// The store keeps one async mutex per document name. Mutating callers
/// acquire it around their load-mutate-save cycle so that two requests
/// writing the same document are serialized instead of silently dropping
/// one another's changes. This only guards a single process; nothing
/// coordinates across processes.
pub struct JsonStore {
    /// Directory holding the `<document>.json` files
    dir: PathBuf,

    /// Per-document write locks, created lazily on first use
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl JsonStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn path(&self, document: &str) -> PathBuf {
        self.dir.join(format!("{document}.json"))
    }

    /// Acquire the write lock for a document.
    ///
    /// The guard is owned so it can be held across await points for the
    /// duration of a load-mutate-save cycle.
    pub async fn lock(&self, document: &str) -> OwnedMutexGuard<()> {
        let mutex = {
            let mut locks = self.locks.lock().expect("document lock map poisoned");
            Arc::clone(locks.entry(document.to_string()).or_default())
        };
        mutex.lock_owned().await
    }

    /// Read and parse an entire document.
    ///
    /// # Errors
    ///
    /// - `Storage` if the file is missing or unreadable
    /// - `Malformed` if the contents are not valid JSON
    pub async fn load(&self, document: &str) -> Result<Value, AppError> {
        let contents = tokio::fs::read_to_string(self.path(document)).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Read a document, substituting `default` when the file does not exist.
    ///
    /// Any other I/O failure, and malformed contents, still propagate.
    pub async fn load_or_default(&self, document: &str, default: Value) -> Result<Value, AppError> {
        match tokio::fs::read_to_string(self.path(document)).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(default),
            Err(err) => Err(err.into()),
        }
    }

    /// Serialize and persist an entire document, replacing what was there.
    ///
    /// # Process
    ///
    /// 1. Ensure the data directory exists
    /// 2. Write the pretty-printed JSON to `<document>.json.tmp`
    /// 3. Atomically rename the temp file over `<document>.json`
    pub async fn save(&self, document: &str, value: &Value) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let serialized = serde_json::to_string_pretty(value)?;

        let tmp = self.dir.join(format!("{document}.json.tmp"));
        tokio::fs::write(&tmp, serialized).await?;
        tokio::fs::rename(&tmp, self.path(document)).await?;

        Ok(())
    }

    /// Verify the data directory is usable (used by the health endpoint).
    pub async fn health(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }
}
