//! Match, Outcome and Score for group and knockout fixtures.

use crate::models::competitor::CompetitorId;
use crate::models::error::ChampionshipError;
use serde::{Deserialize, Serialize};

/// Identifier for a match, unique within its group or bracket.
pub type MatchId = String;

/// Which side won the match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Home,
    Away,
    Draw,
}

impl Outcome {
    pub fn from_goals(home_goals: u32, away_goals: u32) -> Self {
        match home_goals.cmp(&away_goals) {
            std::cmp::Ordering::Greater => Outcome::Home,
            std::cmp::Ordering::Less => Outcome::Away,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// A validated pair of goal counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    /// Validate raw goal values: both must be integers in `0..=u32::MAX`.
    pub fn new(home: i64, away: i64) -> Result<Self, ChampionshipError> {
        Ok(Self {
            home: goals_from_raw(home, "home")?,
            away: goals_from_raw(away, "away")?,
        })
    }

    /// Parse goal values typed into a form, e.g. `"2"` and `" 0 "`.
    pub fn parse(home: &str, away: &str) -> Result<Self, ChampionshipError> {
        let parse_side = |raw: &str, side: &str| {
            raw.trim().parse::<i64>().map_err(|_| {
                ChampionshipError::InvalidInput(format!(
                    "{side} goals must be a non-negative integer, got {raw:?}"
                ))
            })
        };
        Self::new(parse_side(home, "home")?, parse_side(away, "away")?)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_goals(self.home, self.away)
    }
}

fn goals_from_raw(goals: i64, side: &str) -> Result<u32, ChampionshipError> {
    u32::try_from(goals).map_err(|_| {
        ChampionshipError::InvalidInput(format!(
            "{side} goals must be a non-negative integer, got {goals}"
        ))
    })
}

/// A single fixture between two competitors.
///
/// Result fields are private so `played`, the goals and `outcome` can never disagree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Round name for knockout matches ("Semifinal 1", "Final"); None in group play.
    pub label: Option<String>,
    pub home: CompetitorId,
    pub away: CompetitorId,
    home_goals: Option<u32>,
    away_goals: Option<u32>,
    played: bool,
    outcome: Option<Outcome>,
}

impl Match {
    /// Create an unplayed match.
    pub fn new(id: impl Into<MatchId>, home: CompetitorId, away: CompetitorId) -> Self {
        Self {
            id: id.into(),
            label: None,
            home,
            away,
            home_goals: None,
            away_goals: None,
            played: false,
            outcome: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Record (or overwrite) the result.
    pub fn set_score(&mut self, score: Score) {
        self.home_goals = Some(score.home);
        self.away_goals = Some(score.away);
        self.outcome = Some(score.outcome());
        self.played = true;
    }

    pub fn score(&self) -> Option<Score> {
        match (self.home_goals, self.away_goals) {
            (Some(home), Some(away)) => Some(Score { home, away }),
            _ => None,
        }
    }

    pub fn home_goals(&self) -> Option<u32> {
        self.home_goals
    }

    pub fn away_goals(&self) -> Option<u32> {
        self.away_goals
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn involves(&self, competitor_id: &str) -> bool {
        self.home == competitor_id || self.away == competitor_id
    }

    /// Winning side's id; None while unplayed or after a draw.
    pub fn winner(&self) -> Option<&CompetitorId> {
        match self.outcome? {
            Outcome::Home => Some(&self.home),
            Outcome::Away => Some(&self.away),
            Outcome::Draw => None,
        }
    }
}
