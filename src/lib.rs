//! Quiz bowl tournament statistics: data model, standings engine, and
//! report rendering.
//!
//! The surrounding desktop application owns the GUI and all file I/O; this
//! crate owns the tournament object graph, [`Tournament::compile_stats`],
//! and the report pages built from the compiled stats.

pub mod logic;
pub mod models;
pub mod reports;

pub use logic::{CumulativeStats, PhaseStandings, PlayerStats, PoolStats, PoolTeamStats, RoundStats};
pub use models::{
    AdvancementRule, AnswerCount, AnswerType, CommonRuleSet, GameResult, Match, MatchId,
    MatchPlayer, MatchTeam, MatchValidationType, Phase, PhaseType, Player, PlayerId, Pool,
    Registration, Round, ScoringRules, Side, Team, TeamId, Tournament, TournamentError,
    TournamentId, ValidationStatus,
};
pub use reports::{HtmlReportGenerator, ReportPage};
