//! Reaction domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFINED_REACTIONS, REACTION_CHEER, REACTION_HUG, REACTION_SMILE};
use crate::error::{DomainError, DomainResult};

/// Reaction vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionKind {
    Hug,
    Smile,
    Cheer,
}

impl ReactionKind {
    /// Every kind, in vocabulary order
    pub const ALL: [ReactionKind; 3] = [ReactionKind::Hug, ReactionKind::Smile, ReactionKind::Cheer];

    /// Match a label against the vocabulary, ignoring case
    pub fn parse(label: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| DomainError::invalid_value(label))
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Hug => REACTION_HUG,
            ReactionKind::Smile => REACTION_SMILE,
            ReactionKind::Cheer => REACTION_CHEER,
        }
    }

    /// Canonical spellings of the whole vocabulary
    pub fn labels() -> &'static [&'static str] {
        DEFINED_REACTIONS
    }
}

impl TryFrom<&str> for ReactionKind {
    type Error = DomainError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        ReactionKind::parse(label)
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One user's reaction to one item.
///
/// `reaction` holds the label exactly as the caller supplied it; only the
/// validity check ignores case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user: Uuid,
    pub item: Uuid,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Vocabulary entry the stored label maps to
    pub fn kind(&self) -> DomainResult<ReactionKind> {
        ReactionKind::parse(&self.reaction)
    }
}

/// Reaction creation data transfer object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReaction {
    pub user: Uuid,
    pub item: Uuid,
    pub reaction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(ReactionKind::parse("hug").unwrap(), ReactionKind::Hug);
        assert_eq!(ReactionKind::parse("HUG").unwrap(), ReactionKind::Hug);
        assert_eq!(ReactionKind::parse("sMiLe").unwrap(), ReactionKind::Smile);
        assert_eq!(ReactionKind::try_from("Cheer").unwrap(), ReactionKind::Cheer);
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = ReactionKind::parse("Laugh").unwrap_err();
        assert_eq!(err, DomainError::InvalidValue("Laugh".to_string()));
        assert_eq!(err.to_string(), "Laugh is not Allowed");
    }

    #[test]
    fn test_labels_match_kinds() {
        let labels: Vec<&str> = ReactionKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(labels, ReactionKind::labels());
    }

    #[test]
    fn test_kind_of_raw_label() {
        let reaction = Reaction {
            id: Uuid::new_v4(),
            user: Uuid::new_v4(),
            item: Uuid::new_v4(),
            reaction: "cHeEr".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(reaction.kind().unwrap(), ReactionKind::Cheer);
        assert_eq!(reaction.reaction, "cHeEr");
    }
}
