//! Per-community write serialization
//!
//! A read-modify-write of one community's chart must not interleave with
//! another on the same community, or one of the two updates is lost.
//! [`CommunityLocks`] hands out one async mutex per community; different
//! communities never contend.
//!
//! The locks live in this process only. Two processes writing the same data
//! directory are not serialized against each other: each save still replaces
//! the file atomically, but the later writer wins.

use crate::community::CommunityId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-community mutexes
#[derive(Debug, Default)]
pub struct CommunityLocks {
    slots: DashMap<CommunityId, Arc<Mutex<()>>>,
}

impl CommunityLocks {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a community
    ///
    /// The guard is owned, so it can be held across `.await` points and
    /// dropped to release.
    pub async fn lock(&self, community: &CommunityId) -> OwnedMutexGuard<()> {
        // Clone the slot out so the map shard is not held while waiting
        let slot = Arc::clone(&self.slots.entry(community.clone()).or_default());
        slot.lock_owned().await
    }

    /// Drop slots that no guard or waiter currently holds
    ///
    /// Slots are cloned out under the map's shard lock, and `retain` takes
    /// the same lock, so a slot observed with a single owner is idle.
    pub fn prune(&self) {
        self.slots.retain(|_, slot| Arc::strong_count(slot) > 1);
    }

    /// Number of communities with a live slot
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no community has been locked yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_community_is_exclusive() {
        let locks = CommunityLocks::new();
        let id = CommunityId::from(1_u64);

        let guard = locks.lock(&id).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.lock(&id)).await;
        assert!(second.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(50), locks.lock(&id)).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn different_communities_do_not_contend() {
        let locks = CommunityLocks::new();
        let _a = locks.lock(&CommunityId::from(1_u64)).await;
        let b = tokio::time::timeout(
            Duration::from_millis(50),
            locks.lock(&CommunityId::from(2_u64)),
        )
        .await;
        assert!(b.is_ok());
        assert_eq!(locks.len(), 2);
    }

    #[tokio::test]
    async fn prune_drops_only_idle_slots() {
        let locks = CommunityLocks::new();
        let held = locks.lock(&CommunityId::from(1_u64)).await;
        drop(locks.lock(&CommunityId::from(2_u64)).await);
        drop(locks.lock(&CommunityId::from(3_u64)).await);
        assert_eq!(locks.len(), 3);

        locks.prune();
        assert_eq!(locks.len(), 1);

        drop(held);
        locks.prune();
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn prune_while_held_keeps_exclusion() {
        let locks = CommunityLocks::new();
        let id = CommunityId::from(1_u64);
        let held = locks.lock(&id).await;

        locks.prune();
        let second = tokio::time::timeout(Duration::from_millis(50), locks.lock(&id)).await;
        assert!(second.is_err());

        drop(held);
        locks.prune();
        let third = tokio::time::timeout(Duration::from_millis(50), locks.lock(&id)).await;
        assert!(third.is_ok());
    }
}
