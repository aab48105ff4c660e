//! Statistics compilation: accumulators, ranking, and advancement.

pub mod standings;
pub mod stats;

pub use standings::{CumulativeStats, PhaseStandings, PoolStats};
pub use stats::{MatchLine, PlayerStats, PoolTeamStats, RoundStats};
