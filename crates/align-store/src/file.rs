//! Filesystem-backed chart store
//!
//! Layout: `<data_dir>/<community_id>.<file_extension>`. A missing file
//! reads as empty bytes. Saves go to a temporary file in the same directory
//! which is then renamed over the target, so readers see either the old or
//! the new chart, never a partial one.

use crate::community::CommunityId;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::ChartStore;
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// One YAML file per community under a data directory
#[derive(Debug, Clone)]
pub struct FileChartStore {
    config: StoreConfig,
}

impl FileChartStore {
    /// Create store from configuration
    #[inline]
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store with default settings rooted at `dir`
    #[inline]
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new().with_data_dir(dir))
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// File backing a community's chart
    #[must_use]
    pub fn path_for(&self, community: &CommunityId) -> PathBuf {
        self.config
            .data_dir
            .join(format!("{}.{}", community, self.config.file_extension))
    }
}

#[async_trait]
impl ChartStore for FileChartStore {
    async fn load(&self, community: &CommunityId) -> StoreResult<Vec<u8>> {
        let path = self.path_for(community);

        let size = match tokio::fs::metadata(&path).await {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(%community, "no chart file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io_error(&path, e)),
        };

        if size > self.config.max_file_size {
            tracing::warn!(%community, size, max = self.config.max_file_size, "chart file too large");
            return Err(StoreError::TooLarge {
                path,
                size,
                max: self.config.max_file_size,
            });
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            // Removed between metadata and read
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::io_error(&path, e)),
        }
    }

    async fn save(&self, community: &CommunityId, bytes: &[u8]) -> StoreResult<()> {
        let dir = self.config.data_dir.clone();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io_error(&dir, e))?;

        let path = self.path_for(community);
        let data = bytes.to_vec();
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &data))
            .await
            .map_err(|e| StoreError::io_error(&path, std::io::Error::other(e)))??;

        tracing::debug!(%community, bytes = bytes.len(), "chart file written");
        Ok(())
    }
}

fn write_atomic(dir: &Path, path: &Path, data: &[u8]) -> StoreResult<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io_error(dir, e))?;
    tmp.write_all(data).map_err(|e| StoreError::io_error(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io_error(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::io_error(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_id_and_extension() {
        let store = FileChartStore::new(
            StoreConfig::new()
                .with_data_dir("/srv/charts")
                .with_file_extension("yml"),
        );
        let path = store.path_for(&CommunityId::from(1234_u64));
        assert_eq!(path, PathBuf::from("/srv/charts/1234.yml"));
    }

    #[test]
    fn in_dir_keeps_default_extension() {
        let store = FileChartStore::in_dir("charts");
        assert_eq!(
            store.path_for(&CommunityId::from(5_u64)),
            PathBuf::from("charts/5.yaml")
        );
    }
}
