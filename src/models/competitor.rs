//! Competitor and Record data structures.

use crate::models::error::ChampionshipError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier for a competitor, supplied by the roster provider.
pub type CompetitorId = String;

/// Cumulative performance of one competitor within one group.
///
/// Only [`Record::add_result`] changes a record, so `played == won + drawn + lost`
/// and `points == won * 3 + drawn` always hold.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
}

impl Record {
    pub const POINTS_FOR_WIN: u32 = 3;
    pub const POINTS_FOR_DRAW: u32 = 1;

    /// Add one played match seen from this competitor's side.
    ///
    /// Fails with `InvalidInput` when a total would leave the `u32` range; the record is
    /// left as it was.
    pub fn add_result(&mut self, scored: u32, conceded: u32) -> Result<(), ChampionshipError> {
        let mut next = self.clone();
        next.played = checked(self.played, 1)?;
        next.goals_for = checked(self.goals_for, scored)?;
        next.goals_against = checked(self.goals_against, conceded)?;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => next.won = checked(self.won, 1)?,
            std::cmp::Ordering::Less => next.lost = checked(self.lost, 1)?,
            std::cmp::Ordering::Equal => next.drawn = checked(self.drawn, 1)?,
        }
        next.points = next
            .won
            .checked_mul(Self::POINTS_FOR_WIN)
            .and_then(|p| p.checked_add(next.drawn.checked_mul(Self::POINTS_FOR_DRAW)?))
            .ok_or_else(out_of_range)?;
        *self = next;
        Ok(())
    }

    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn won(&self) -> u32 {
        self.won
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn lost(&self) -> u32 {
        self.lost
    }

    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

fn checked(total: u32, add: u32) -> Result<u32, ChampionshipError> {
    total.checked_add(add).ok_or_else(out_of_range)
}

fn out_of_range() -> ChampionshipError {
    ChampionshipError::InvalidInput("Record totals exceed the supported range".to_string())
}

/// A team taking part in a championship.
///
/// Anything beyond id and name (color, coach, players...) lives in `details` and is
/// carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    #[serde(default)]
    pub record: Record,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Competitor {
    /// Create a competitor with an empty record and no extra details.
    pub fn new(id: impl Into<CompetitorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            record: Record::default(),
            details: Map::new(),
        }
    }

    /// Attach an opaque descriptive field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Owned copy for a group: same identity and details, zeroed record.
    pub fn snapshot(&self) -> Self {
        Self {
            record: Record::default(),
            ..self.clone()
        }
    }
}
