//! Group stage: partitioning, fixtures, result recording and standings queries.

use crate::logic::fixture::{generate_fixture, pairing_match_id};
use crate::logic::standings::{rank, rank_group, GroupStandings};
use crate::logic::statistics::{apply_result, apply_score};
use crate::models::{
    ChampionshipError, Competitor, CompetitorId, Group, GroupStage, Match, MatchId, Record, Score,
    StageStatus,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// A result known up front, addressed by its home/away pairing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeedResult {
    pub home: CompetitorId,
    pub away: CompetitorId,
    pub score: Score,
}

impl SeedResult {
    pub fn new(
        home: impl Into<CompetitorId>,
        away: impl Into<CompetitorId>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            score: Score {
                home: home_goals,
                away: away_goals,
            },
        }
    }
}

/// Group name for a 0-based index: A..Z, then AA, AB, ...
pub fn group_letters(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Split the roster into groups and build each group's round-robin fixture.
///
/// Groups are contiguous slices of `ceil(n / group_count)` competitors in roster order.
/// Slices that come out empty are dropped, so a small roster may produce fewer groups
/// than requested. Ids containing `-` can make two pairings share a match id (`x-y` vs
/// `z` and `x` vs `y-z`); such rosters are rejected.
pub fn create_group_stage(
    name: impl Into<String>,
    competitors: &[Competitor],
    group_count: usize,
) -> Result<GroupStage, ChampionshipError> {
    if competitors.is_empty() {
        return Err(ChampionshipError::InvalidInput(
            "No competitors to create groups from".to_string(),
        ));
    }
    if group_count < 1 {
        return Err(ChampionshipError::InvalidInput(
            "Group count must be at least 1".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = competitors.iter().find(|c| !seen.insert(c.id.as_str())) {
        return Err(ChampionshipError::InvalidInput(format!(
            "Competitor id {} appears more than once",
            dup.id
        )));
    }

    let per_group = competitors.len().div_ceil(group_count);
    let groups = competitors
        .chunks(per_group)
        .enumerate()
        .map(|(i, slice)| {
            let snapshots: Vec<Competitor> = slice.iter().map(Competitor::snapshot).collect();
            let matches = generate_fixture(&snapshots);
            if let Some(m) = shared_match_id(&matches) {
                return Err(ChampionshipError::InvalidInput(format!(
                    "Competitor ids {} and {} produce the same match id {} as another pairing",
                    m.home, m.away, m.id
                )));
            }
            Ok(Group {
                id: format!("group-{}", i + 1),
                name: format!("Group {}", group_letters(i)),
                competitors: snapshots,
                matches,
            })
        })
        .collect::<Result<Vec<Group>, ChampionshipError>>()?;

    let stage = GroupStage {
        id: Uuid::new_v4(),
        name: name.into(),
        group_count,
        groups,
        status: StageStatus::InProgress,
        created_at: Utc::now(),
    };
    log::info!(
        "Created group stage {} with {} group(s) for {} competitors (requested {})",
        stage.id,
        stage.groups.len(),
        competitors.len(),
        group_count
    );
    Ok(stage)
}

/// First match whose id was already taken by an earlier pairing.
fn shared_match_id(matches: &[Match]) -> Option<&Match> {
    let mut seen = HashSet::new();
    matches.iter().find(|m| !seen.insert(m.id.as_str()))
}

/// Create a stage and apply results that are already known.
pub fn create_group_stage_with_results(
    name: impl Into<String>,
    competitors: &[Competitor],
    group_count: usize,
    results: &[SeedResult],
) -> Result<GroupStage, ChampionshipError> {
    let mut stage = create_group_stage(name, competitors, group_count)?;
    for result in results {
        let (group, match_id) = stage
            .groups
            .iter_mut()
            .find_map(|g| {
                let id = g.find_pairing(&result.home, &result.away)?.id.clone();
                Some((g, id))
            })
            .ok_or_else(|| {
                ChampionshipError::match_not_found(pairing_match_id(&result.home, &result.away))
            })?;
        apply_score(group, &match_id, result.score)?;
    }
    for group in &mut stage.groups {
        rank_group(group);
    }
    Ok(stage)
}

/// Record a group match result, then re-rank that group.
pub fn record_group_result(
    stage: &mut GroupStage,
    group_id: &str,
    match_id: &str,
    home_goals: i64,
    away_goals: i64,
) -> Result<Match, ChampionshipError> {
    let group = stage
        .group_mut(group_id)
        .ok_or_else(|| ChampionshipError::group_not_found(group_id))?;
    let updated = apply_result(group, match_id, home_goals, away_goals)?;
    rank_group(group);
    log::debug!(
        "{} {}: {} {}-{} {}",
        group_id,
        match_id,
        updated.home,
        home_goals,
        away_goals,
        updated.away
    );
    Ok(updated)
}

/// Mark the stage complete. Advisory only: results can still be recorded afterwards.
pub fn complete_group_stage(stage: &mut GroupStage) {
    if !stage.all_matches_played() {
        log::warn!(
            "Group stage {} marked complete with unplayed matches",
            stage.id
        );
    }
    stage.status = StageStatus::Complete;
}

/// The ranked table of one group.
pub fn group_standings(
    stage: &GroupStage,
    group_id: &str,
) -> Result<GroupStandings, ChampionshipError> {
    let group = stage
        .group(group_id)
        .ok_or_else(|| ChampionshipError::group_not_found(group_id))?;
    Ok(ranked_table(group))
}

/// Ranked tables of every group, in group order.
pub fn stage_standings(stage: &GroupStage) -> Vec<GroupStandings> {
    stage.groups.iter().map(ranked_table).collect()
}

fn ranked_table(group: &Group) -> GroupStandings {
    let ranked = Group {
        competitors: rank(group.competitors.clone()),
        ..group.clone()
    };
    GroupStandings::from_group(&ranked)
}

/// One fixture seen from a competitor's side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamFixture {
    pub match_id: MatchId,
    pub opponent_id: CompetitorId,
    pub opponent_name: String,
    pub is_home: bool,
    pub played: bool,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
}

/// A competitor's group, record and fixtures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub competitor: Competitor,
    pub group_id: String,
    pub group_name: String,
    pub record: Record,
    pub fixtures: Vec<TeamFixture>,
}

/// Look a competitor up across all groups.
pub fn team_summary(
    stage: &GroupStage,
    competitor_id: &str,
) -> Result<TeamSummary, ChampionshipError> {
    let (group, competitor) = stage
        .groups
        .iter()
        .find_map(|g| g.competitor(competitor_id).map(|c| (g, c)))
        .ok_or_else(|| ChampionshipError::competitor_not_found(competitor_id))?;

    let fixtures = group
        .matches
        .iter()
        .filter(|m| m.involves(competitor_id))
        .map(|m| {
            let is_home = m.home == competitor_id;
            let opponent_id = if is_home { &m.away } else { &m.home };
            let (goals_for, goals_against) = if is_home {
                (m.home_goals(), m.away_goals())
            } else {
                (m.away_goals(), m.home_goals())
            };
            TeamFixture {
                match_id: m.id.clone(),
                opponent_id: opponent_id.clone(),
                opponent_name: group
                    .competitor(opponent_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                is_home,
                played: m.is_played(),
                goals_for,
                goals_against,
            }
        })
        .collect();

    Ok(TeamSummary {
        competitor: competitor.clone(),
        group_id: group.id.clone(),
        group_name: group.name.clone(),
        record: competitor.record.clone(),
        fixtures,
    })
}

/// A group match with both sides' current records.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub group_name: String,
    pub fixture: Match,
    pub home_record: Record,
    pub away_record: Record,
}

pub fn match_details(
    stage: &GroupStage,
    group_id: &str,
    match_id: &str,
) -> Result<MatchDetails, ChampionshipError> {
    let group = stage
        .group(group_id)
        .ok_or_else(|| ChampionshipError::group_not_found(group_id))?;
    let fixture = group
        .get_match(match_id)
        .ok_or_else(|| ChampionshipError::match_not_found(match_id))?;
    let record_of = |id: &str| {
        group
            .competitor(id)
            .map(|c| c.record.clone())
            .ok_or_else(|| ChampionshipError::competitor_not_found(id))
    };
    Ok(MatchDetails {
        group_name: group.name.clone(),
        fixture: fixture.clone(),
        home_record: record_of(fixture.home.as_str())?,
        away_record: record_of(fixture.away.as_str())?,
    })
}
