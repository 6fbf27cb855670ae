//! # File Storage
//!
//! JSON-file adapter for [`KeyValueStorage`].
//!
//! ## File Layout
//! ```text
//! ~/.local/share/storefront/credentials.json        (Linux)
//! ~/Library/Application Support/market.atelier.storefront/credentials.json
//! %APPDATA%\atelier\storefront\data\credentials.json (Windows)
//!
//! {
//!   "authToken": "…opaque…",
//!   "user": "{\"emailId\":\"a@b.com\"}"
//! }
//! ```
//!
//! ## Durability
//! The whole map is loaded once at [`FileStorage::open`] and every mutation
//! rewrites the file: write to a sibling temp file, then rename over the
//! original. A crash mid-write leaves either the old or the new file, never
//! a torn one.
//!
//! A malformed file is treated as empty (and logged); it is replaced on the
//! next write. Session hydration then sees no entries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::KeyValueStorage;

/// File name of the credential mirror inside the data directory.
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";

/// Key-value storage persisted as a single JSON object file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens (or lazily creates) the storage file at `path`.
    ///
    /// The file itself is only created on first write.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            match Self::parse(&path, &contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(?path, error = %e, "Storage file unreadable, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            debug!(?path, "Storage file not found, starting empty");
            BTreeMap::new()
        };

        Ok(FileStorage { path, entries })
    }

    /// Opens the storage file in the platform data directory.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(Self::default_path()?)
    }

    /// Returns the default credential file path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/market.atelier.storefront/credentials.json`
    /// - **Windows**: `%APPDATA%\atelier\storefront\data\credentials.json`
    /// - **Linux**: `~/.local/share/storefront/credentials.json`
    pub fn default_path() -> StoreResult<PathBuf> {
        let dirs = ProjectDirs::from("market", "atelier", "storefront")
            .ok_or(StoreError::DataDirUnavailable)?;
        Ok(dirs.data_dir().join(CREDENTIALS_FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(path: &Path, contents: &str) -> StoreResult<BTreeMap<String, String>> {
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let value: serde_json::Value = serde_json::from_str(contents)?;
        let serde_json::Value::Object(map) = value else {
            return Err(StoreError::InvalidFile {
                path: path.to_path_buf(),
            });
        };

        // Non-string values cannot have been written by us; drop them.
        Ok(map
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect())
    }

    /// Writes `entries` to disk. Callers commit them to memory only on success.
    fn flush(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(path = ?self.path, entries = entries.len(), "Storage file written");
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
