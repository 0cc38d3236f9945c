//! Round-robin fixture generation.

use crate::models::{Competitor, Match, MatchId};

/// Match id for a home/away pairing. The same pair always yields the same id.
///
/// Different pairs can collide when ids contain `-`; `create_group_stage` rejects those.
pub fn pairing_match_id(home: &str, away: &str) -> MatchId {
    format!("match-{home}-{away}")
}

/// Single round-robin: one match per unordered pair, `n * (n - 1) / 2` in total.
///
/// Pairs follow input order: `competitors[i]` hosts `competitors[j]` for every `i < j`.
/// Fewer than two competitors give an empty fixture.
pub fn generate_fixture(competitors: &[Competitor]) -> Vec<Match> {
    let matches: Vec<Match> = competitors
        .iter()
        .enumerate()
        .flat_map(|(i, home)| {
            competitors[i + 1..].iter().map(move |away| {
                Match::new(
                    pairing_match_id(&home.id, &away.id),
                    home.id.clone(),
                    away.id.clone(),
                )
            })
        })
        .collect();
    log::debug!(
        "Generated {} fixtures for {} competitors",
        matches.len(),
        competitors.len()
    );
    matches
}
