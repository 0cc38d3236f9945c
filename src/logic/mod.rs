//! Championship business logic: fixtures, results, standings, knockout bracket.

mod bracket;
mod fixture;
mod group_stage;
mod report;
mod standings;
mod statistics;

pub use bracket::{
    build_bracket, build_bracket_with_results, record_bracket_result, select_qualifiers,
    BracketSeedResult, QUALIFIERS_PER_GROUP,
};
pub use fixture::{generate_fixture, pairing_match_id};
pub use group_stage::{
    complete_group_stage, create_group_stage, create_group_stage_with_results, group_letters,
    group_standings, match_details, record_group_result, stage_standings, team_summary,
    MatchDetails, SeedResult, TeamFixture, TeamSummary,
};
pub use report::{
    championship_status, generate_report, ChampionshipReport, ChampionshipStatus,
    GroupPhaseReport, PlayoffMatchReport, PlayoffPhaseReport,
};
pub use standings::{compare_standing, rank, rank_group, GroupStandings, StandingRow};
pub use statistics::{apply_result, apply_score, recompute_records};
