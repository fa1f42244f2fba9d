//! Alignment chart storage
//!
//! Byte-level persistence of one chart per community. The store never
//! interprets the bytes it moves.
//!
//! # Architecture
//!
//! ```text
//! caller ──lock──▶ CommunityLocks
//!   │
//!   ├─ load(community) ──▶ ChartStore ──▶ <data_dir>/<community>.yaml
//!   └─ save(community, bytes) ──▶ temp file ──rename──▶ <data_dir>/<community>.yaml
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use align_store::{ChartStore, CommunityId, FileChartStore, StoreConfig};
//!
//! # async fn example() -> Result<(), align_store::StoreError> {
//! let store = FileChartStore::new(StoreConfig::new().with_data_dir("data"));
//! let id = CommunityId::from(1234_u64);
//!
//! let bytes = store.load(&id).await?; // empty if never saved
//! store.save(&id, &bytes).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod community;
pub mod config;
pub mod error;
pub mod file;
pub mod locks;
pub mod memory;
pub mod store;

// Re-exports for convenience
pub use community::CommunityId;
pub use config::{StoreConfig, DEFAULT_MAX_FILE_SIZE};
pub use error::{StoreError, StoreResult};
pub use file::FileChartStore;
pub use locks::CommunityLocks;
pub use memory::MemoryChartStore;
pub use store::ChartStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
