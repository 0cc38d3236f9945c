//! Standings order: points, then goal difference, then goals scored.

use crate::models::{Competitor, CompetitorId, Group, GroupId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Better competitor sorts first. Equal on all three keys compares `Equal`.
pub fn compare_standing(a: &Competitor, b: &Competitor) -> Ordering {
    b.record
        .points()
        .cmp(&a.record.points())
        .then_with(|| b.record.goal_difference().cmp(&a.record.goal_difference()))
        .then_with(|| b.record.goals_for().cmp(&a.record.goals_for()))
}

/// Order competitors by standing. Full ties keep their input order (stable sort).
pub fn rank(mut competitors: Vec<Competitor>) -> Vec<Competitor> {
    competitors.sort_by(compare_standing);
    competitors
}

/// Re-sort a group's competitors in place.
pub fn rank_group(group: &mut Group) {
    group.competitors.sort_by(compare_standing);
}

/// One line of a standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    /// 1-based.
    pub position: usize,
    pub competitor_id: CompetitorId,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingRow {
    pub fn from_competitor(position: usize, c: &Competitor) -> Self {
        let r = &c.record;
        Self {
            position,
            competitor_id: c.id.clone(),
            name: c.name.clone(),
            played: r.played(),
            won: r.won(),
            drawn: r.drawn(),
            lost: r.lost(),
            goals_for: r.goals_for(),
            goals_against: r.goals_against(),
            goal_difference: r.goal_difference(),
            points: r.points(),
        }
    }
}

/// A group's table in standings order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group_id: GroupId,
    pub group_name: String,
    pub rows: Vec<StandingRow>,
}

impl GroupStandings {
    /// Build the table from the group's current competitor order.
    pub fn from_group(group: &Group) -> Self {
        Self {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            rows: group
                .competitors
                .iter()
                .enumerate()
                .map(|(i, c)| StandingRow::from_competitor(i + 1, c))
                .collect(),
        }
    }
}
