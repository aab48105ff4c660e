//! Data structures for the tournament: scoring rules, teams, phases, matches.

mod game;
mod phase;
mod scoring_rules;
mod team;
mod tournament;
mod validation;

pub use game::{
    sort_answer_counts, AnswerCount, GameResult, Match, MatchId, MatchPlayer, MatchTeam, Side,
};
pub use phase::{AdvancementRule, Phase, PhaseType, Pool, Round};
pub use scoring_rules::{AnswerType, CommonRuleSet, ScoringRules};
pub use team::{Player, PlayerId, Registration, Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId};
pub use validation::{
    MatchValidationCollection, MatchValidationMessage, MatchValidationType, ValidationStatus,
};
