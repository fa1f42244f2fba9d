//! Alignment chart model
//!
//! Record types for a per-community alignment chart plus the pure functions
//! that decode, change and encode it.
//!
//! # Core Operations
//!
//! - **Decode**: [`parse`] stored bytes into a normalized [`Chart`]
//! - **Transform**: [`set_user`] / [`remove_user`] return a new chart
//! - **Encode**: [`serialize`] back to bytes
//!
//! None of these touch storage or check permissions. The overwrite rule
//! lives in [`policy::authorize_set`] and is applied by callers.
//!
//! # Example
//!
//! ```rust
//! use align_model::{parse, serialize, set_user, AlignmentCategory};
//!
//! let chart = parse(b"")?;
//! let updated = set_user(&chart, "123", AlignmentCategory::LawfulGood, "Tester", None);
//! assert!(chart.is_empty());
//!
//! let bytes = serialize(&updated)?;
//! assert_eq!(parse(&bytes)?, updated);
//! # Ok::<(), align_model::ChartError>(())
//! ```

#![warn(unreachable_pub)]

pub mod alignment;
pub mod chart;
pub mod codec;
pub mod error;
pub mod ids;
pub mod policy;
pub mod render;

// Re-exports for convenience
pub use alignment::{AlignmentCategory, MoralAxis, OrderAxis, ParseAlignmentError};
pub use chart::{remove_user, set_user, Chart, UserEntry};
pub use codec::{normalize, parse, serialize, RawChart};
pub use error::{ChartError, PolicyError};
pub use ids::UserId;
pub use policy::authorize_set;
pub use render::{render_lines, render_tally, EMPTY_CHART_TEXT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
