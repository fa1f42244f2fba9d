//! Community identifiers

use crate::error::StoreError;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Identifier of a community (a server, a guild, ...)
///
/// Used verbatim as a file stem, so it is restricted to a non-empty run of
/// ASCII alphanumerics, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CommunityId(String);

impl CommunityId {
    /// Validate and wrap an identifier
    ///
    /// # Errors
    /// [`StoreError::InvalidCommunityId`] for empty input or any character
    /// outside `[A-Za-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if valid {
            Ok(Self(id))
        } else {
            Err(StoreError::InvalidCommunityId(id))
        }
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CommunityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CommunityId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<u64> for CommunityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}
