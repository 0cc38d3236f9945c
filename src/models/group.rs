//! Group and GroupStage.

use crate::models::competitor::Competitor;
use crate::models::game::Match;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a group within a stage (`group-1`, `group-2`, ...).
pub type GroupId = String;

/// Unique identifier for a group stage.
pub type StageId = Uuid;

/// A partition of competitors with its own round-robin fixture.
///
/// `competitors` are owned snapshots: edits to the external roster after the stage is
/// created do not reach them. They are kept in standings order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub competitors: Vec<Competitor>,
    pub matches: Vec<Match>,
}

impl Group {
    pub fn competitor(&self, id: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == id)
    }

    pub fn competitor_mut(&mut self, id: &str) -> Option<&mut Competitor> {
        self.competitors.iter_mut().find(|c| c.id == id)
    }

    pub fn get_match(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: &str) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// The fixture between two competitors with the given home/away sides.
    pub fn find_pairing(&self, home: &str, away: &str) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| m.home == home && m.away == away)
    }

    /// True once every fixture in the group has a result.
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_played)
    }
}

/// Progress of a group stage. `Complete` is advisory and never enforced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    #[default]
    InProgress,
    Complete,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::InProgress => write!(f, "In progress"),
            StageStatus::Complete => write!(f, "Complete"),
        }
    }
}

/// All groups of one championship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupStage {
    pub id: StageId,
    pub name: String,
    /// Requested group count; `groups.len()` may be smaller for small rosters.
    pub group_count: usize,
    pub groups: Vec<Group>,
    pub status: StageStatus,
    pub created_at: DateTime<Utc>,
}

impl GroupStage {
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn all_matches_played(&self) -> bool {
        self.groups.iter().all(Group::is_complete)
    }
}
