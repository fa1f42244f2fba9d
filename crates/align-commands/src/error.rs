//! Error types for alignment commands
//!
//! [`CommandError::user_message`] is what the invoker gets to see. Storage
//! and decoding failures collapse to one generic sentence so that file paths
//! and internal details stay in the logs.

use align_model::{ChartError, PolicyError};
use align_store::StoreError;

/// Shown for any chart or storage failure
pub const GENERIC_FAILURE_TEXT: &str = "Something went wrong with the alignment chart. Please try again later.";

/// Shown when a command is used outside a community
pub const NOT_IN_COMMUNITY_TEXT: &str = "This command must be used in a server.";

/// Main command error type
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Command needs a community but was invoked outside one
    #[error("command must be used inside a community")]
    NotInCommunityContext,

    /// Overwrite of another member's entry was refused
    #[error("unauthorized mutation for {target_name}: {source}")]
    UnauthorizedMutation {
        /// Display name of the member whose entry was protected
        target_name: String,
        #[source]
        source: PolicyError,
    },

    /// Stored chart could not be decoded or encoded
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// Storage failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CommandError {
    /// Text safe to show to the invoker
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotInCommunityContext => NOT_IN_COMMUNITY_TEXT.to_string(),
            Self::UnauthorizedMutation { target_name, .. } => format!(
                "{target_name} already has an alignment set. You cannot change it."
            ),
            Self::Chart(_) | Self::Store(_) => GENERIC_FAILURE_TEXT.to_string(),
        }
    }

    /// Whether the error is the invoker's doing rather than a system fault
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotInCommunityContext | Self::UnauthorizedMutation { .. }
        )
    }
}

/// Result type alias for command operations
pub type CommandResult<T> = Result<T, CommandError>;
