//! Championship organizer: library with models and the standings/bracket engine.
//!
//! Everything here is synchronous and does no I/O. Callers load an aggregate, call one
//! operation, and save the result; concurrent mutations of one aggregate must be
//! serialized by the caller.

pub mod logic;
pub mod models;

pub use logic::{
    apply_result, apply_score, build_bracket, build_bracket_with_results, championship_status,
    complete_group_stage, create_group_stage, create_group_stage_with_results, generate_fixture,
    generate_report, group_standings, match_details, rank, rank_group, recompute_records,
    record_bracket_result, record_group_result, select_qualifiers, stage_standings, team_summary,
    BracketSeedResult, ChampionshipReport, ChampionshipStatus, GroupStandings, MatchDetails,
    SeedResult, StandingRow, TeamFixture, TeamSummary,
};
pub use models::{
    BracketFormat, BracketId, ChampionshipError, Competitor, CompetitorId, Entity, Group, GroupId,
    GroupStage, KnockoutBracket, Match, MatchId, Outcome, Record, Score, StageId, StageStatus,
};
