//! Knockout bracket built from group-stage qualifiers.

use crate::models::competitor::Competitor;
use crate::models::game::Match;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a knockout bracket.
pub type BracketId = Uuid;

/// Shape of the bracket, decided by the number of qualifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketFormat {
    /// 4 or more qualifiers: two semifinals.
    Semifinals,
    /// 2 or 3 qualifiers: a single final.
    FinalOnly,
}

/// Single-elimination structure. Results here never touch group records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnockoutBracket {
    pub id: BracketId,
    pub name: String,
    pub format: BracketFormat,
    /// Snapshots of the qualifiers in seeding order (for name lookup).
    pub qualifiers: Vec<Competitor>,
    pub matches: Vec<Match>,
    pub created_at: DateTime<Utc>,
}

impl KnockoutBracket {
    pub fn get_match(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: &str) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    pub fn qualifier(&self, id: &str) -> Option<&Competitor> {
        self.qualifiers.iter().find(|c| c.id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_played)
    }
}
