//! Error types for chart storage

use std::path::{Path, PathBuf};

/// Errors from loading, saving, or configuring a chart store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error on a chart file
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored file exceeds the configured limit
    #[error("chart file {path} is too large: {size} bytes (max: {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    /// Community id cannot name a file
    #[error("invalid community id: {0:?}")]
    InvalidCommunityId(String),

    /// Configuration could not be read or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
