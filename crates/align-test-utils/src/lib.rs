//! Testing utilities for the alignment chart workspace
//!
//! Shared fixtures for members, contexts, charts and services.

#![allow(missing_docs)]

use align_commands::{AlignmentService, CommandContext, Member};
use align_model::{parse, set_user, AlignmentCategory, Chart};
use align_store::{ChartStore, CommunityId, FileChartStore, MemoryChartStore};
use tempfile::TempDir;

pub const TEST_COMMUNITY: u64 = 12345;

pub fn community() -> CommunityId {
    CommunityId::from(TEST_COMMUNITY)
}

pub fn member(id: &str, name: &str) -> Member {
    Member::new(id, name)
}

pub fn ctx(id: &str, name: &str) -> CommandContext {
    CommandContext::in_community(community(), member(id, name))
}

pub fn ctx_in(community: u64, id: &str, name: &str) -> CommandContext {
    CommandContext::in_community(CommunityId::from(community), member(id, name))
}

pub fn direct_ctx(id: &str, name: &str) -> CommandContext {
    CommandContext::direct(member(id, name))
}

/// Two users, `"111"` is admin
pub fn sample_chart() -> Chart {
    let chart = Chart::new().with_admins(["111"]);
    let chart = set_user(
        &chart,
        "111",
        AlignmentCategory::ChaoticGood,
        "EpicUser",
        Some("https://cdn.example/a.png".to_string()),
    );
    set_user(&chart, "222", AlignmentCategory::LawfulEvil, "Other", None)
}

pub fn memory_service() -> AlignmentService<MemoryChartStore> {
    AlignmentService::new(MemoryChartStore::new())
}

/// File-backed service; keep the `TempDir` alive for the test's duration
pub fn file_service() -> (TempDir, AlignmentService<FileChartStore>) {
    let dir = tempfile::tempdir().unwrap();
    let service = AlignmentService::new(FileChartStore::in_dir(dir.path()));
    (dir, service)
}

/// Seed raw bytes for a community
pub async fn seed<S: ChartStore>(store: &S, community: &CommunityId, bytes: &[u8]) {
    store.save(community, bytes).await.unwrap();
}

/// Decode whatever the store currently holds for `community`
pub async fn stored_chart<S: ChartStore>(store: &S, community: &CommunityId) -> Chart {
    let bytes = store.load(community).await.unwrap();
    parse(&bytes).unwrap()
}
