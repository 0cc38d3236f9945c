//! Group-stage result application and record accumulation.

use crate::models::{ChampionshipError, Group, Match, Record, Score};

/// Apply raw goal values to a group match and refresh every record in the group.
///
/// Re-recording a played match overwrites its score; records are rebuilt from all
/// played matches, so nothing is counted twice.
pub fn apply_result(
    group: &mut Group,
    match_id: &str,
    home_goals: i64,
    away_goals: i64,
) -> Result<Match, ChampionshipError> {
    if group.get_match(match_id).is_none() {
        return Err(ChampionshipError::match_not_found(match_id));
    }
    let score = Score::new(home_goals, away_goals)?;
    apply_score(group, match_id, score)
}

/// Same as [`apply_result`] for an already validated score.
///
/// If the new score would push a record total out of range, the match keeps its previous
/// score and the records are not touched.
pub fn apply_score(
    group: &mut Group,
    match_id: &str,
    score: Score,
) -> Result<Match, ChampionshipError> {
    let m = group
        .get_match_mut(match_id)
        .ok_or_else(|| ChampionshipError::match_not_found(match_id))?;
    let previous = m.clone();
    m.set_score(score);
    let updated = m.clone();

    if let Err(e) = recompute_records(group) {
        log::warn!("{}: result {}-{} rejected: {}", match_id, score.home, score.away, e);
        if let Some(m) = group.get_match_mut(match_id) {
            *m = previous;
        }
        return Err(e);
    }
    if let Some(replaced) = previous.score() {
        log::debug!(
            "{}: replaced {}-{} with {}-{}",
            match_id,
            replaced.home,
            replaced.away,
            score.home,
            score.away
        );
    }
    Ok(updated)
}

/// Rebuild every record in the group from its played matches.
///
/// Records are tallied on the side and only written back when every match fits, so an
/// error leaves the group's records as they were.
pub fn recompute_records(group: &mut Group) -> Result<(), ChampionshipError> {
    let mut records = vec![Record::default(); group.competitors.len()];
    let position = |id: &str| group.competitors.iter().position(|c| c.id == id);

    for m in &group.matches {
        let Some(score) = m.score() else {
            continue;
        };
        match position(&m.home) {
            Some(i) => records[i].add_result(score.home, score.away)?,
            None => log::warn!("{}: home competitor {} is not in the group", group.id, m.home),
        }
        match position(&m.away) {
            Some(i) => records[i].add_result(score.away, score.home)?,
            None => log::warn!("{}: away competitor {} is not in the group", group.id, m.away),
        }
    }

    for (c, record) in group.competitors.iter_mut().zip(records) {
        c.record = record;
    }
    Ok(())
}
