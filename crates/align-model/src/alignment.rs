//! The nine alignment categories
//!
//! Each category is the cross product of an [`OrderAxis`] and a
//! [`MoralAxis`]. The set is closed: there is no way to construct an
//! [`AlignmentCategory`] outside of these nine values.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Lawful/chaotic axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderAxis {
    /// Lawful
    Lawful,
    /// Neutral
    Neutral,
    /// Chaotic
    Chaotic,
}

/// Good/evil axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoralAxis {
    /// Good
    Good,
    /// Neutral
    Neutral,
    /// Evil
    Evil,
}

/// One of the nine fixed chart cells
///
/// Serialized as its human label (`"Lawful Good"`, `"True Neutral"`, ...).
/// Deserialization goes through [`FromStr`], so hand-edited spellings such
/// as `lawful good` are read back as the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AlignmentCategory {
    /// Lawful Good
    #[serde(rename = "Lawful Good")]
    LawfulGood,
    /// Neutral Good
    #[serde(rename = "Neutral Good")]
    NeutralGood,
    /// Chaotic Good
    #[serde(rename = "Chaotic Good")]
    ChaoticGood,
    /// Lawful Neutral
    #[serde(rename = "Lawful Neutral")]
    LawfulNeutral,
    /// True Neutral
    #[serde(rename = "True Neutral")]
    TrueNeutral,
    /// Chaotic Neutral
    #[serde(rename = "Chaotic Neutral")]
    ChaoticNeutral,
    /// Lawful Evil
    #[serde(rename = "Lawful Evil")]
    LawfulEvil,
    /// Neutral Evil
    #[serde(rename = "Neutral Evil")]
    NeutralEvil,
    /// Chaotic Evil
    #[serde(rename = "Chaotic Evil")]
    ChaoticEvil,
}

impl AlignmentCategory {
    /// All categories in chart order (Good row, Neutral row, Evil row)
    pub const ALL: [Self; 9] = [
        Self::LawfulGood,
        Self::NeutralGood,
        Self::ChaoticGood,
        Self::LawfulNeutral,
        Self::TrueNeutral,
        Self::ChaoticNeutral,
        Self::LawfulEvil,
        Self::NeutralEvil,
        Self::ChaoticEvil,
    ];

    /// Build a category from its two axes
    #[inline]
    #[must_use]
    pub const fn from_axes(order: OrderAxis, moral: MoralAxis) -> Self {
        match (order, moral) {
            (OrderAxis::Lawful, MoralAxis::Good) => Self::LawfulGood,
            (OrderAxis::Neutral, MoralAxis::Good) => Self::NeutralGood,
            (OrderAxis::Chaotic, MoralAxis::Good) => Self::ChaoticGood,
            (OrderAxis::Lawful, MoralAxis::Neutral) => Self::LawfulNeutral,
            (OrderAxis::Neutral, MoralAxis::Neutral) => Self::TrueNeutral,
            (OrderAxis::Chaotic, MoralAxis::Neutral) => Self::ChaoticNeutral,
            (OrderAxis::Lawful, MoralAxis::Evil) => Self::LawfulEvil,
            (OrderAxis::Neutral, MoralAxis::Evil) => Self::NeutralEvil,
            (OrderAxis::Chaotic, MoralAxis::Evil) => Self::ChaoticEvil,
        }
    }

    /// Position on the lawful/chaotic axis
    #[must_use]
    pub const fn order(self) -> OrderAxis {
        match self {
            Self::LawfulGood | Self::LawfulNeutral | Self::LawfulEvil => OrderAxis::Lawful,
            Self::NeutralGood | Self::TrueNeutral | Self::NeutralEvil => OrderAxis::Neutral,
            Self::ChaoticGood | Self::ChaoticNeutral | Self::ChaoticEvil => OrderAxis::Chaotic,
        }
    }

    /// Position on the good/evil axis
    #[must_use]
    pub const fn moral(self) -> MoralAxis {
        match self {
            Self::LawfulGood | Self::NeutralGood | Self::ChaoticGood => MoralAxis::Good,
            Self::LawfulNeutral | Self::TrueNeutral | Self::ChaoticNeutral => MoralAxis::Neutral,
            Self::LawfulEvil | Self::NeutralEvil | Self::ChaoticEvil => MoralAxis::Evil,
        }
    }

    /// Human label, identical to the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LawfulGood => "Lawful Good",
            Self::NeutralGood => "Neutral Good",
            Self::ChaoticGood => "Chaotic Good",
            Self::LawfulNeutral => "Lawful Neutral",
            Self::TrueNeutral => "True Neutral",
            Self::ChaoticNeutral => "Chaotic Neutral",
            Self::LawfulEvil => "Lawful Evil",
            Self::NeutralEvil => "Neutral Evil",
            Self::ChaoticEvil => "Chaotic Evil",
        }
    }
}

impl Display for AlignmentCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input did not name one of the nine categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alignment: '{0}'")]
pub struct ParseAlignmentError(pub String);

impl FromStr for AlignmentCategory {
    type Err = ParseAlignmentError;

    /// Accepts the label in any case, with spaces, dashes or underscores
    /// between the words (`"lawful-good"`, `"CHAOTIC_EVIL"`). A bare
    /// `"neutral"` is read as True Neutral.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<String> = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();

        let key = words.join(" ");
        if key == "neutral" {
            return Ok(Self::TrueNeutral);
        }

        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseAlignmentError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for AlignmentCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}
