//! Chart record and its pure mutations
//!
//! A [`Chart`] is a plain value. [`set_user`] and [`remove_user`] borrow the
//! input and return a fresh chart; the input is never modified, nested maps
//! included.

use crate::alignment::AlignmentCategory;
use crate::codec::RawChart;
use crate::ids::UserId;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// One member's recorded state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Chosen alignment
    pub alignment: AlignmentCategory,
    /// Name shown in the chart, as last supplied by the caller
    pub display_name: String,
    /// Avatar reference; `None` when no avatar is known
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserEntry {
    /// Create entry
    #[inline]
    #[must_use]
    pub fn new(
        alignment: AlignmentCategory,
        display_name: impl Into<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            alignment,
            display_name: display_name.into(),
            avatar_url,
        }
    }
}

/// What a member id maps to in the `users` section
///
/// Entries that fail to decode are carried as their raw YAML so that one bad
/// entry neither blocks the rest of the chart nor gets lost on the next save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum Slot {
    Entry(UserEntry),
    Unreadable(Value),
}

impl Slot {
    pub(crate) fn entry(&self) -> Option<&UserEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Unreadable(_) => None,
        }
    }
}

/// Full alignment record of one community
///
/// # Invariants
/// - At most one entry per [`UserId`]
/// - Entries keep their insertion slot, so serialization is deterministic
/// - Equality ignores ordering of both `users` and `admins`
/// - Undecodable entries stay in place and are written back unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawChart")]
pub struct Chart {
    pub(crate) users: IndexMap<UserId, Slot>,
    pub(crate) admins: IndexSet<UserId>,
}

impl Chart {
    /// Canonical empty chart (`users = {}`, `admins = []`)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With the given admin ids added
    #[must_use]
    pub fn with_admins<I, U>(mut self, admins: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        self.admins.extend(admins.into_iter().map(Into::into));
        self
    }

    /// Number of recorded members, unreadable entries included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the `users` section is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Entry for a member, if any
    #[inline]
    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<&UserEntry> {
        self.users.get(user_id).and_then(Slot::entry)
    }

    /// Whether the member has an entry, readable or not
    #[inline]
    #[must_use]
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.users.contains_key(user_id)
    }

    /// Whether the member is listed as an admin
    #[inline]
    #[must_use]
    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admins.contains(user_id)
    }

    /// Readable entries in stored order
    pub fn users(&self) -> impl Iterator<Item = (&UserId, &UserEntry)> {
        self.users
            .iter()
            .filter_map(|(id, slot)| slot.entry().map(|entry| (id, entry)))
    }

    /// Ids whose stored entry could not be decoded, in stored order
    pub fn unreadable_ids(&self) -> impl Iterator<Item = &UserId> {
        self.users
            .iter()
            .filter(|(_, slot)| slot.entry().is_none())
            .map(|(id, _)| id)
    }

    /// Admin ids in stored order
    pub fn admins(&self) -> impl Iterator<Item = &UserId> {
        self.admins.iter()
    }

    /// Member count per category, in chart order
    #[must_use]
    pub fn tally(&self) -> Vec<(AlignmentCategory, usize)> {
        AlignmentCategory::ALL
            .into_iter()
            .map(|a| (a, self.users().filter(|(_, e)| e.alignment == a).count()))
            .collect()
    }
}

/// Return a chart where `user_id` maps to a freshly built entry
///
/// An existing entry, readable or not, is replaced wholesale (no field
/// merge) and keeps its position. `admins` is carried over unchanged.
#[must_use]
pub fn set_user(
    chart: &Chart,
    user_id: impl Into<UserId>,
    alignment: AlignmentCategory,
    display_name: impl Into<String>,
    avatar_url: Option<String>,
) -> Chart {
    let mut next = chart.clone();
    next.users.insert(
        user_id.into(),
        Slot::Entry(UserEntry::new(alignment, display_name, avatar_url)),
    );
    next
}

/// Return a chart without `user_id`
///
/// Removing an absent id yields an equal chart.
#[must_use]
pub fn remove_user(chart: &Chart, user_id: &str) -> Chart {
    let mut next = chart.clone();
    next.users.shift_remove(user_id);
    next
}
