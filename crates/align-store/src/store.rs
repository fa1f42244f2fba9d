//! Storage trait
//!
//! A store moves opaque bytes keyed by [`CommunityId`]. It knows nothing
//! about chart structure; decoding happens in the model.

use crate::community::CommunityId;
use crate::error::StoreResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Byte-level load/save of one chart per community
#[async_trait]
pub trait ChartStore: Send + Sync {
    /// Stored bytes for the community; empty when nothing is stored yet
    async fn load(&self, community: &CommunityId) -> StoreResult<Vec<u8>>;

    /// Replace the stored bytes for the community
    async fn save(&self, community: &CommunityId, bytes: &[u8]) -> StoreResult<()>;
}

#[async_trait]
impl<S> ChartStore for Arc<S>
where
    S: ChartStore + ?Sized,
{
    async fn load(&self, community: &CommunityId) -> StoreResult<Vec<u8>> {
        (**self).load(community).await
    }

    async fn save(&self, community: &CommunityId, bytes: &[u8]) -> StoreResult<()> {
        (**self).save(community, bytes).await
    }
}
