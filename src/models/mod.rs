//! Data structures for a championship: competitors, matches, groups, brackets.

mod bracket;
mod competitor;
mod error;
mod game;
mod group;

pub use bracket::{BracketFormat, BracketId, KnockoutBracket};
pub use competitor::{Competitor, CompetitorId, Record};
pub use error::{ChampionshipError, Entity};
pub use game::{Match, MatchId, Outcome, Score};
pub use group::{Group, GroupId, GroupStage, StageId, StageStatus};
