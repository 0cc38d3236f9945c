//! Integration tests for applying group results to competitor records.

use championship_engine::{
    apply_result, create_group_stage, ChampionshipError, Competitor, Entity, Group, Outcome,
    Record, Score,
};
use pretty_assertions::assert_eq;

fn roster(ids: &[&str]) -> Vec<Competitor> {
    ids.iter()
        .map(|id| Competitor::new(*id, id.to_uppercase()))
        .collect()
}

fn single_group(ids: &[&str]) -> Group {
    create_group_stage("Test", &roster(ids), 1)
        .unwrap()
        .groups
        .remove(0)
}

/// (played, won, drawn, lost, goals_for, goals_against, points)
fn line(group: &Group, id: &str) -> (u32, u32, u32, u32, u32, u32, u32) {
    let r = &group.competitor(id).unwrap().record;
    (
        r.played(),
        r.won(),
        r.drawn(),
        r.lost(),
        r.goals_for(),
        r.goals_against(),
        r.points(),
    )
}

fn assert_invariants(group: &Group) {
    for c in &group.competitors {
        let r = &c.record;
        assert_eq!(r.played(), r.won() + r.drawn() + r.lost(), "{}", c.id);
        assert_eq!(r.points(), r.won() * 3 + r.drawn(), "{}", c.id);
    }
}

#[test]
fn record_add_result_counts_win_draw_loss() {
    let mut r = Record::default();
    r.add_result(3, 1).unwrap();
    r.add_result(0, 0).unwrap();
    r.add_result(1, 2).unwrap();
    assert_eq!(
        (r.played(), r.won(), r.drawn(), r.lost()),
        (3, 1, 1, 1)
    );
    assert_eq!((r.goals_for(), r.goals_against()), (4, 3));
    assert_eq!(r.goal_difference(), 1);
    assert_eq!(r.points(), 4);
}

#[test]
fn apply_result_sets_score_and_outcome() {
    let mut group = single_group(&["a", "b", "c"]);

    let home_win = apply_result(&mut group, "match-a-b", 2, 1).unwrap();
    assert!(home_win.is_played());
    assert_eq!(home_win.score(), Some(Score { home: 2, away: 1 }));
    assert_eq!(home_win.outcome(), Some(Outcome::Home));

    let away_win = apply_result(&mut group, "match-a-c", 0, 4).unwrap();
    assert_eq!(away_win.outcome(), Some(Outcome::Away));

    let draw = apply_result(&mut group, "match-b-c", 1, 1).unwrap();
    assert_eq!(draw.outcome(), Some(Outcome::Draw));
    assert_eq!(draw.winner(), None);

    assert_eq!(group.get_match("match-a-b"), Some(&home_win));
}

#[test]
fn apply_result_updates_both_records() {
    let mut group = single_group(&["a", "b"]);
    apply_result(&mut group, "match-a-b", 3, 1).unwrap();

    assert_eq!(line(&group, "a"), (1, 1, 0, 0, 3, 1, 3));
    assert_eq!(line(&group, "b"), (1, 0, 0, 1, 1, 3, 0));
}

#[test]
fn unknown_match_is_not_found() {
    let mut group = single_group(&["a", "b"]);
    let err = apply_result(&mut group, "match-b-a", 1, 0).unwrap_err();
    assert_eq!(
        err,
        ChampionshipError::NotFound {
            entity: Entity::Match,
            id: "match-b-a".to_string()
        }
    );
}

#[test]
fn negative_goals_are_rejected_without_touching_the_match() {
    let mut group = single_group(&["a", "b"]);
    let err = apply_result(&mut group, "match-a-b", -1, 2).unwrap_err();
    assert!(matches!(err, ChampionshipError::InvalidInput(_)));

    let m = group.get_match("match-a-b").unwrap();
    assert!(!m.is_played());
    assert_eq!(m.home_goals(), None);
    assert_eq!(line(&group, "a"), (0, 0, 0, 0, 0, 0, 0));
}

#[test]
fn score_parse_rejects_non_integers() {
    assert_eq!(Score::parse(" 2", "0 ").unwrap(), Score { home: 2, away: 0 });
    assert!(matches!(
        Score::parse("1.5", "0"),
        Err(ChampionshipError::InvalidInput(_))
    ));
    assert!(matches!(
        Score::parse("two", "0"),
        Err(ChampionshipError::InvalidInput(_))
    ));
    assert!(matches!(
        Score::parse("1", "-3"),
        Err(ChampionshipError::InvalidInput(_))
    ));
    assert!(matches!(
        Score::new(i64::from(u32::MAX) + 1, 0),
        Err(ChampionshipError::InvalidInput(_))
    ));
}

#[test]
fn record_totals_out_of_range_are_rejected() {
    let mut r = Record::default();
    r.add_result(u32::MAX, 0).unwrap();
    let before = r.clone();

    assert!(matches!(
        r.add_result(1, 0),
        Err(ChampionshipError::InvalidInput(_))
    ));
    assert_eq!(r, before);
    assert_eq!(r.goal_difference(), i64::from(u32::MAX));
}

#[test]
fn goal_totals_out_of_range_leave_the_group_unchanged() {
    let mut group = single_group(&["a", "b", "c"]);
    apply_result(&mut group, "match-a-b", i64::from(u32::MAX), 0).unwrap();
    assert_eq!(line(&group, "a"), (1, 1, 0, 0, u32::MAX, 0, 3));
    let before = group.clone();

    let err = apply_result(&mut group, "match-a-c", 1, 0).unwrap_err();
    assert!(matches!(err, ChampionshipError::InvalidInput(_)));
    assert_eq!(group, before);
    assert!(!group.get_match("match-a-c").unwrap().is_played());

    // A rejected correction keeps the old score.
    apply_result(&mut group, "match-b-c", 0, u32::MAX.into()).unwrap();
    apply_result(&mut group, "match-a-c", 0, 0).unwrap();
    let err = apply_result(&mut group, "match-a-c", 0, 1).unwrap_err();
    assert!(matches!(err, ChampionshipError::InvalidInput(_)));
    assert_eq!(
        group.get_match("match-a-c").unwrap().score(),
        Some(Score { home: 0, away: 0 })
    );
    assert_eq!(line(&group, "c"), (2, 1, 1, 0, u32::MAX, 0, 4));
    assert_invariants(&group);

    // Values that fit are still accepted afterwards.
    apply_result(&mut group, "match-a-b", 2, 0).unwrap();
    apply_result(&mut group, "match-a-c", 1, 0).unwrap();
    assert_eq!(line(&group, "a"), (2, 2, 0, 0, 3, 0, 6));
}

#[test]
fn reapplying_the_same_result_is_idempotent() {
    let mut once = single_group(&["a", "b", "c"]);
    apply_result(&mut once, "match-a-b", 2, 2).unwrap();

    let mut twice = single_group(&["a", "b", "c"]);
    apply_result(&mut twice, "match-a-b", 2, 2).unwrap();
    apply_result(&mut twice, "match-a-b", 2, 2).unwrap();

    assert_eq!(once.competitors, twice.competitors);
    assert_eq!(line(&twice, "a"), (1, 0, 1, 0, 2, 2, 1));
}

#[test]
fn correcting_a_result_replaces_the_old_one() {
    let mut group = single_group(&["a", "b"]);
    apply_result(&mut group, "match-a-b", 2, 1).unwrap();
    apply_result(&mut group, "match-a-b", 0, 3).unwrap();

    assert_eq!(line(&group, "a"), (1, 0, 0, 1, 0, 3, 0));
    assert_eq!(line(&group, "b"), (1, 1, 0, 0, 3, 0, 3));
    assert_invariants(&group);
}

#[test]
fn invariants_hold_after_every_result() {
    let mut group = single_group(&["a", "b", "c", "d"]);
    let results = [
        ("match-a-b", 1, 0),
        ("match-c-d", 2, 2),
        ("match-a-c", 0, 5),
        ("match-b-d", 3, 3),
        ("match-a-b", 1, 1),
        ("match-a-d", 4, 0),
        ("match-b-c", 0, 1),
    ];
    for (id, home, away) in results {
        apply_result(&mut group, id, home, away).unwrap();
        assert_invariants(&group);
    }
    let total_played: u32 = group.competitors.iter().map(|c| c.record.played()).sum();
    let played_matches = group.matches.iter().filter(|m| m.is_played()).count() as u32;
    assert_eq!(total_played, played_matches * 2);
}

#[test]
fn roster_outside_the_group_is_untouched() {
    let roster = roster(&["a", "b"]);
    let mut stage = create_group_stage("Test", &roster, 1).unwrap();
    apply_result(&mut stage.groups[0], "match-a-b", 5, 0).unwrap();

    assert_eq!(roster[0].record, Record::default());
    assert_eq!(roster[1].record, Record::default());
}
