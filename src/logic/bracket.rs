//! Knockout stage: qualifier selection, semifinal/final pairing and result recording.

use crate::logic::standings::rank;
use crate::models::{
    BracketFormat, ChampionshipError, Competitor, Group, KnockoutBracket, Match, MatchId, Score,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many competitors each group sends to the knockout stage.
pub const QUALIFIERS_PER_GROUP: usize = 2;

/// Top two of every group, in group order, rank 1 before rank 2.
///
/// Groups are re-ranked on a copy; the groups passed in are left as they are.
pub fn select_qualifiers(groups: &[Group]) -> Vec<Competitor> {
    groups
        .iter()
        .flat_map(|g| {
            rank(g.competitors.clone())
                .into_iter()
                .take(QUALIFIERS_PER_GROUP)
        })
        .collect()
}

/// Build the knockout bracket from ranked groups.
///
/// - 4+ qualifiers: two semifinals, 1st vs 4th and 2nd vs 3rd. Qualifiers past the
///   fourth are not used.
/// - 2 or 3 qualifiers: one final between the first two.
///
/// `groups` is not reordered; qualifiers are picked from ranked copies.
pub fn build_bracket(
    name: impl Into<String>,
    groups: &[Group],
) -> Result<KnockoutBracket, ChampionshipError> {
    let qualifiers = select_qualifiers(groups);
    let found = qualifiers.len();
    if found < 2 {
        return Err(ChampionshipError::InsufficientQualifiers { found });
    }

    let q = &qualifiers;
    let (format, matches, used) = if found >= 4 {
        if found > 4 {
            log::warn!("{} qualifiers, only the first 4 enter the semifinals", found);
        }
        let matches = vec![
            Match::new("elim-1", q[0].id.clone(), q[3].id.clone()).with_label("Semifinal 1"),
            Match::new("elim-2", q[1].id.clone(), q[2].id.clone()).with_label("Semifinal 2"),
        ];
        (BracketFormat::Semifinals, matches, 4)
    } else {
        if found == 3 {
            log::warn!(
                "3 qualifiers, {} ({}) is left out of the final",
                q[2].name,
                q[2].id
            );
        }
        let matches =
            vec![Match::new("elim-1", q[0].id.clone(), q[1].id.clone()).with_label("Final")];
        (BracketFormat::FinalOnly, matches, 2)
    };

    let bracket = KnockoutBracket {
        id: Uuid::new_v4(),
        name: name.into(),
        format,
        qualifiers: qualifiers.into_iter().take(used).collect(),
        matches,
        created_at: Utc::now(),
    };
    log::info!(
        "Built {:?} bracket {} from {} qualifier(s)",
        bracket.format,
        bracket.id,
        found
    );
    Ok(bracket)
}

/// Record a knockout result. Only the match changes; no records are touched.
pub fn record_bracket_result(
    bracket: &mut KnockoutBracket,
    match_id: &str,
    home_goals: i64,
    away_goals: i64,
) -> Result<Match, ChampionshipError> {
    let m = bracket
        .get_match_mut(match_id)
        .ok_or_else(|| ChampionshipError::match_not_found(match_id))?;
    m.set_score(Score::new(home_goals, away_goals)?);
    log::debug!(
        "{} {}: {} {}-{} {}",
        m.label.as_deref().unwrap_or("knockout"),
        match_id,
        m.home,
        home_goals,
        away_goals,
        m.away
    );
    Ok(m.clone())
}

/// A knockout result known up front.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketSeedResult {
    pub match_id: MatchId,
    pub score: Score,
}

impl BracketSeedResult {
    pub fn new(match_id: impl Into<MatchId>, home_goals: u32, away_goals: u32) -> Self {
        Self {
            match_id: match_id.into(),
            score: Score {
                home: home_goals,
                away: away_goals,
            },
        }
    }
}

/// Build a bracket and apply knockout results that are already known.
pub fn build_bracket_with_results(
    name: impl Into<String>,
    groups: &[Group],
    results: &[BracketSeedResult],
) -> Result<KnockoutBracket, ChampionshipError> {
    let mut bracket = build_bracket(name, groups)?;
    for result in results {
        bracket
            .get_match_mut(&result.match_id)
            .ok_or_else(|| ChampionshipError::match_not_found(result.match_id.clone()))?
            .set_score(result.score);
    }
    Ok(bracket)
}
