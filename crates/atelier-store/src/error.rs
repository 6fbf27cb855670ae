//! # Storage Error Types
//!
//! Error types for credential mirror operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ├──► SessionStore: logged, session call still succeeds           │
//! │       │                                                                 │
//! │       └──► ApiError (in storefront app) at startup                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    /// - Parent directory cannot be created
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be (de)serialized.
    #[error("Storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No platform data directory could be determined for the default path.
    #[error("Could not determine app data directory")]
    DataDirUnavailable,

    /// The backing file exists but is not a storage file.
    #[error("Storage file {path} is not a JSON object")]
    InvalidFile { path: PathBuf },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
