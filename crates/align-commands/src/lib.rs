//! Alignment chart commands
//!
//! Glue between a chat front end and the chart model: resolve the community,
//! serialize access per community, load, mutate, save, and produce a reply.
//!
//! # Commands
//!
//! | Command      | Method                            |
//! |--------------|-----------------------------------|
//! | show chart   | [`AlignmentService::show`]        |
//! | set own      | [`AlignmentService::set`]         |
//! | remove own   | [`AlignmentService::remove`]      |
//! | set other    | [`AlignmentService::set_other`]   |
//!
//! # Example
//!
//! ```rust,ignore
//! use align_commands::{AlignmentService, CommandContext, Member};
//! use align_model::AlignmentCategory;
//! use align_store::{CommunityId, MemoryChartStore};
//!
//! # async fn example() -> Result<(), align_commands::CommandError> {
//! let service = AlignmentService::new(MemoryChartStore::new());
//! let ctx = CommandContext::in_community(
//!     CommunityId::from(1_u64),
//!     Member::new("123", "Tester"),
//! );
//!
//! service.set(&ctx, AlignmentCategory::ChaoticGood).await?;
//! println!("{}", service.show(&ctx).await?.text);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod context;
pub mod error;
pub mod service;

// Re-exports for convenience
pub use context::{CommandContext, Member, Reply};
pub use error::{CommandError, CommandResult, GENERIC_FAILURE_TEXT, NOT_IN_COMMUNITY_TEXT};
pub use service::AlignmentService;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
