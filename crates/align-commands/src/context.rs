//! Who is invoking a command, and where

use align_model::UserId;
use align_store::CommunityId;

/// A community member as seen by the chat front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Stable member id
    pub id: UserId,
    /// Current display name
    pub display_name: String,
    /// Current avatar, if the platform reports one
    pub avatar_url: Option<String>,
}

impl Member {
    /// Create member without avatar
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: None,
        }
    }

    /// With avatar
    #[inline]
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// Invocation context of a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Community the command was issued in; `None` for direct messages
    pub community: Option<CommunityId>,
    /// Member issuing the command
    pub invoker: Member,
}

impl CommandContext {
    /// Command issued inside a community
    #[inline]
    #[must_use]
    pub fn in_community(community: CommunityId, invoker: Member) -> Self {
        Self {
            community: Some(community),
            invoker,
        }
    }

    /// Command issued outside any community
    #[inline]
    #[must_use]
    pub fn direct(invoker: Member) -> Self {
        Self {
            community: None,
            invoker,
        }
    }
}

/// Text sent back to the invoker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message body
    pub text: String,
    /// Only visible to the invoker
    pub ephemeral: bool,
}

impl Reply {
    /// Reply visible only to the invoker
    #[inline]
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ephemeral: true,
        }
    }
}
