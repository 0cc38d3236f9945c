//! Integration tests for round-robin fixture generation.

use championship_engine::{generate_fixture, Competitor};
use std::collections::HashSet;

fn roster(ids: &[&str]) -> Vec<Competitor> {
    ids.iter()
        .map(|id| Competitor::new(*id, id.to_uppercase()))
        .collect()
}

#[test]
fn four_competitors_play_six_matches_in_input_order() {
    let matches = generate_fixture(&roster(&["a", "b", "c", "d"]));
    let pairs: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.home.as_str(), m.away.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a", "b"),
            ("a", "c"),
            ("a", "d"),
            ("b", "c"),
            ("b", "d"),
            ("c", "d"),
        ]
    );
    assert!(matches.iter().all(|m| !m.is_played()));
    assert!(matches.iter().all(|m| m.outcome().is_none()));
}

#[test]
fn every_pair_appears_exactly_once() {
    for n in 0usize..=9 {
        let ids: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
        let competitors: Vec<Competitor> =
            ids.iter().map(|id| Competitor::new(id.clone(), id.clone())).collect();
        let matches = generate_fixture(&competitors);
        assert_eq!(matches.len(), n * n.saturating_sub(1) / 2, "n = {n}");

        let mut seen = HashSet::new();
        for m in &matches {
            assert_ne!(m.home, m.away);
            let pair = if m.home < m.away {
                (m.home.clone(), m.away.clone())
            } else {
                (m.away.clone(), m.home.clone())
            };
            assert!(seen.insert(pair), "duplicate pairing for n = {n}");
        }
    }
}

#[test]
fn degenerate_rosters_give_empty_fixture() {
    assert!(generate_fixture(&[]).is_empty());
    assert!(generate_fixture(&roster(&["solo"])).is_empty());
}

#[test]
fn match_ids_are_derived_from_the_pair() {
    let competitors = roster(&["red", "blue", "green"]);
    let first = generate_fixture(&competitors);
    let second = generate_fixture(&competitors);

    let ids: Vec<&str> = first.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["match-red-blue", "match-red-green", "match-blue-green"]);
    assert_eq!(first, second);
}
