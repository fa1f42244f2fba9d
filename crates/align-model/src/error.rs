//! Error types for the chart model
//!
//! - [`ChartError`]: decoding/encoding of stored charts
//! - [`PolicyError`]: the overwrite rule for setting someone else's entry

use crate::ids::UserId;

/// Errors while decoding or encoding a chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Stored bytes are not a decodable chart
    #[error("malformed chart: {0}")]
    MalformedChart(String),

    /// YAML encoder failed
    #[error("chart serialization failed: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

impl ChartError {
    /// Create malformed chart error
    #[inline]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedChart(message.into())
    }

    pub(crate) fn from_yaml(err: serde_yaml::Error) -> Self {
        Self::MalformedChart(err.to_string())
    }
}

/// Rejections from [`crate::policy::authorize_set`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// Actor tried to overwrite another member's existing entry without
    /// being an admin
    #[error("{actor} may not overwrite the existing alignment of {target}")]
    UnauthorizedMutation {
        /// Member issuing the change
        actor: UserId,
        /// Member whose entry would be overwritten
        target: UserId,
    },
}
