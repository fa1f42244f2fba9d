//! In-process chart store for tests and dry runs

use crate::community::CommunityId;
use crate::error::StoreResult;
use crate::store::ChartStore;
use async_trait::async_trait;
use dashmap::DashMap;

/// Chart bytes held in a concurrent map
#[derive(Debug, Default)]
pub struct MemoryChartStore {
    charts: DashMap<CommunityId, Vec<u8>>,
}

impl MemoryChartStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of communities with stored bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// True when nothing has been saved
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Copy of the stored bytes, if any
    #[must_use]
    pub fn get(&self, community: &CommunityId) -> Option<Vec<u8>> {
        self.charts.get(community).map(|bytes| bytes.clone())
    }
}

#[async_trait]
impl ChartStore for MemoryChartStore {
    async fn load(&self, community: &CommunityId) -> StoreResult<Vec<u8>> {
        Ok(self.get(community).unwrap_or_default())
    }

    async fn save(&self, community: &CommunityId, bytes: &[u8]) -> StoreResult<()> {
        self.charts.insert(community.clone(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_community_loads_empty() {
        let store = MemoryChartStore::new();
        let bytes = store.load(&CommunityId::from(1_u64)).await.unwrap();
        assert!(bytes.is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn save_replaces_bytes() {
        let store = MemoryChartStore::new();
        let id = CommunityId::from(1_u64);

        store.save(&id, b"first").await.unwrap();
        store.save(&id, b"second").await.unwrap();

        assert_eq!(store.load(&id).await.unwrap(), b"second");
        assert_eq!(store.len(), 1);
    }
}
