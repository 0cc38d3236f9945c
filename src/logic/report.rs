//! Championship report: group tables plus knockout results in one view.

use crate::logic::group_stage::stage_standings;
use crate::logic::standings::GroupStandings;
use crate::models::{BracketFormat, GroupStage, KnockoutBracket, Outcome, StageStatus};
use serde::{Deserialize, Serialize};

/// Overall progress, derived from which stages exist.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipStatus {
    /// No group stage yet.
    Preparing,
    InProgress,
    /// Every knockout match has a result.
    Finished,
}

impl std::fmt::Display for ChampionshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChampionshipStatus::Preparing => write!(f, "Preparing"),
            ChampionshipStatus::InProgress => write!(f, "In progress"),
            ChampionshipStatus::Finished => write!(f, "Finished"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupPhaseReport {
    pub status: StageStatus,
    pub groups: Vec<GroupStandings>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffMatchReport {
    pub label: String,
    pub home: String,
    pub away: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub outcome: Option<Outcome>,
    pub played: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffPhaseReport {
    /// `Complete` once every knockout match has a result.
    pub status: StageStatus,
    pub format: BracketFormat,
    pub matches: Vec<PlayoffMatchReport>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipReport {
    pub name: String,
    pub status: ChampionshipStatus,
    pub total_competitors: usize,
    pub group_phase: Option<GroupPhaseReport>,
    pub playoff_phase: Option<PlayoffPhaseReport>,
    pub summary: String,
}

pub fn championship_status(
    stage: Option<&GroupStage>,
    bracket: Option<&KnockoutBracket>,
) -> ChampionshipStatus {
    match (stage, bracket) {
        (_, Some(b)) if b.is_complete() => ChampionshipStatus::Finished,
        (None, None) => ChampionshipStatus::Preparing,
        _ => ChampionshipStatus::InProgress,
    }
}

pub fn generate_report(
    name: &str,
    total_competitors: usize,
    stage: Option<&GroupStage>,
    bracket: Option<&KnockoutBracket>,
) -> ChampionshipReport {
    let status = championship_status(stage, bracket);

    let group_phase = stage.map(|s| GroupPhaseReport {
        status: s.status,
        groups: stage_standings(s),
    });

    let playoff_phase = bracket.map(|b| {
        // Qualifier snapshots carry the names; fall back to the id.
        let name_of = |id: &str| {
            b.qualifier(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string())
        };
        PlayoffPhaseReport {
            status: if b.is_complete() {
                StageStatus::Complete
            } else {
                StageStatus::InProgress
            },
            format: b.format,
            matches: b
                .matches
                .iter()
                .map(|m| PlayoffMatchReport {
                    label: m.label.clone().unwrap_or_else(|| m.id.clone()),
                    home: name_of(m.home.as_str()),
                    away: name_of(m.away.as_str()),
                    home_goals: m.home_goals(),
                    away_goals: m.away_goals(),
                    outcome: m.outcome(),
                    played: m.is_played(),
                })
                .collect(),
        }
    });

    ChampionshipReport {
        name: name.to_string(),
        status,
        total_competitors,
        group_phase,
        playoff_phase,
        summary: format!("{} - {}", name, status),
    }
}
