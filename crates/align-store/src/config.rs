//! Store configuration

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default upper bound for a single chart file (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Where and how chart files are kept
///
/// Every field has a default, so a TOML file only needs the keys it wants
/// to change:
///
/// ```toml
/// data_dir = "/var/lib/alignchart"
/// max_file_size = 65536
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding one file per community
    pub data_dir: PathBuf,
    /// Extension of chart files, without the dot
    pub file_extension: String,
    /// Files larger than this are refused on load
    pub max_file_size: u64,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// With file extension
    #[inline]
    #[must_use]
    pub fn with_file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = ext.into();
        self
    }

    /// With max file size
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// [`StoreError::Config`] on TOML errors, unknown keys, or an invalid
    /// extension.
    pub fn from_toml_str(text: &str) -> Result<Self, StoreError> {
        let config: Self = toml::from_str(text).map_err(|e| StoreError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// [`StoreError::Io`] if the file cannot be read, otherwise as
    /// [`StoreConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Check field constraints
    ///
    /// # Errors
    /// [`StoreError::Config`] when the extension is empty or contains
    /// anything but ASCII alphanumerics.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.file_extension.is_empty()
            || !self.file_extension.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(StoreError::config(format!(
                "invalid file extension: {:?}",
                self.file_extension
            )));
        }
        if self.max_file_size == 0 {
            return Err(StoreError::config("max_file_size must be positive"));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_extension: "yaml".to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StoreConfig::new();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.file_extension, "yaml");
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let config = StoreConfig::new()
            .with_data_dir("/tmp/charts")
            .with_file_extension("yml")
            .with_max_file_size(10);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/charts"));
        assert_eq!(config.file_extension, "yml");
        assert_eq!(config.max_file_size, 10);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml_str("data_dir = \"charts\"\n").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("charts"));
        assert_eq!(config.file_extension, "yaml");
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = StoreConfig::from_toml_str("colour = \"red\"\n").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn toml_rejects_bad_extension() {
        let err = StoreConfig::from_toml_str("file_extension = \"../x\"\n").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));

        let err = StoreConfig::from_toml_str("max_file_size = 0\n").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StoreConfig::from_toml_file("/nonexistent/alignchart.toml").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
