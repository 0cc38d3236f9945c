//! Errors raised by championship operations.

use thiserror::Error;

/// What kind of entity a lookup failed to find.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Entity {
    Group,
    Match,
    Competitor,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Group => write!(f, "Group"),
            Entity::Match => write!(f, "Match"),
            Entity::Competitor => write!(f, "Competitor"),
        }
    }
}

/// Errors that can occur during championship operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ChampionshipError {
    /// Malformed input: empty roster, zero group count, bad goal values.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced group/match/competitor id does not exist in the aggregate.
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    /// Fewer than 2 qualifiers came out of the group stage.
    #[error("Not enough qualifiers to build a bracket (need 2, found {found})")]
    InsufficientQualifiers { found: usize },
}

impl ChampionshipError {
    pub fn group_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Group,
            id: id.into(),
        }
    }

    pub fn match_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Match,
            id: id.into(),
        }
    }

    pub fn competitor_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Competitor,
            id: id.into(),
        }
    }
}
