//! Phases, rounds, and pools: the schedule structure of a tournament.

use crate::models::game::{Match, MatchId};
use crate::models::team::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// What kind of stage a phase is. Only prelims and playoffs ("full" phases)
/// feed the statistics engine; finals and tiebreakers decide placement but
/// never count toward stats.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    Prelim,
    Playoff,
    Finals,
    Tiebreaker,
}

impl PhaseType {
    pub fn is_full_phase(self) -> bool {
        matches!(self, PhaseType::Prelim | PhaseType::Playoff)
    }
}

/// One numbered round of matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    /// Display name for rounds that aren't just a number ("Finals").
    pub name: Option<String>,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            name: None,
            matches: Vec::new(),
        }
    }

    pub fn display_name(&self, abbreviated: bool) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if abbreviated {
            format!("Rd. {}", self.number)
        } else {
            format!("Round {}", self.number)
        }
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }
}

/// The top `count` unclaimed finishers of a pool advance to the given tier
/// of the next phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AdvancementRule {
    pub tier: u32,
    pub count: usize,
}

/// A named bracket within a phase. Partitions the phase's teams: a team is
/// in at most one pool per phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub name: String,
    /// Tier position within the phase; 1 is the top bracket.
    pub position: u32,
    /// How many teams this pool is built for.
    pub size: usize,
    /// For seeded schedules, the fixed seed numbers this pool draws from.
    pub seed_numbers: Vec<u32>,
    pub team_ids: Vec<TeamId>,
    /// In finish order: which next-phase tiers this pool feeds.
    pub auto_advance: Vec<AdvancementRule>,
}

impl Pool {
    pub fn new(name: impl Into<String>, position: u32, size: usize) -> Self {
        Self {
            name: name.into(),
            position,
            size,
            seed_numbers: Vec::new(),
            team_ids: Vec::new(),
            auto_advance: Vec::new(),
        }
    }

    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.team_ids.contains(&team_id)
    }

    pub fn add_team(&mut self, team_id: TeamId) {
        if !self.has_team(team_id) {
            self.team_ids.push(team_id);
        }
    }

    pub fn remove_team(&mut self, team_id: TeamId) {
        self.team_ids.retain(|id| *id != team_id);
    }

    /// Next-phase tier for the team finishing in the given 1-indexed
    /// position, per the auto-advance rules. `None` past every cutoff.
    pub fn tier_for_finish(&self, finish: usize) -> Option<u32> {
        let mut claimed = 0;
        for rule in &self.auto_advance {
            claimed += rule.count;
            if finish <= claimed {
                return Some(rule.tier);
            }
        }
        None
    }

    /// 1-indexed finish positions after which an advancement cutoff falls.
    pub fn advancement_cutoffs(&self) -> Vec<usize> {
        let mut cutoffs = Vec::new();
        let mut claimed = 0;
        for rule in &self.auto_advance {
            claimed += rule.count;
            cutoffs.push(claimed);
        }
        cutoffs
    }
}

/// A named stage of the tournament: an ordered sequence of rounds plus a set
/// of pools partitioning the teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub phase_type: PhaseType,
    pub rounds: Vec<Round>,
    pub pools: Vec<Pool>,
}

impl Phase {
    pub fn new(name: impl Into<String>, phase_type: PhaseType) -> Self {
        Self {
            name: name.into(),
            phase_type,
            rounds: Vec::new(),
            pools: Vec::new(),
        }
    }

    /// A full phase with rounds `first_round..=last_round`, no pools yet.
    pub fn with_rounds(
        name: impl Into<String>,
        phase_type: PhaseType,
        first_round: u32,
        last_round: u32,
    ) -> Self {
        let mut phase = Self::new(name, phase_type);
        phase.rounds = (first_round..=last_round).map(Round::new).collect();
        phase
    }

    pub fn is_full_phase(&self) -> bool {
        self.phase_type.is_full_phase()
    }

    /// Full phases display rounds by number; finals and tiebreakers use names.
    pub fn uses_numeric_rounds(&self) -> bool {
        self.is_full_phase()
    }

    pub fn includes_round(&self, round_no: u32) -> bool {
        self.rounds.iter().any(|r| r.number == round_no)
    }

    pub fn round(&self, round_no: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == round_no)
    }

    pub fn round_mut(&mut self, round_no: u32) -> Option<&mut Round> {
        self.rounds.iter_mut().find(|r| r.number == round_no)
    }

    pub fn any_matches_exist(&self) -> bool {
        self.rounds.iter().any(|r| !r.matches.is_empty())
    }

    pub fn any_teams_assigned(&self) -> bool {
        self.pools.iter().any(|p| !p.team_ids.is_empty())
    }

    pub fn find_pool_with_team(&self, team_id: TeamId) -> Option<&Pool> {
        self.pools.iter().find(|p| p.has_team(team_id))
    }

    /// Put a newly seeded team into the pool holding its seed number.
    pub fn add_seeded_team(&mut self, team_id: TeamId, seed_no: u32) {
        for pool in &mut self.pools {
            if pool.seed_numbers.contains(&seed_no) {
                pool.add_team(team_id);
                return;
            }
        }
    }

    pub fn remove_team(&mut self, team_id: TeamId) {
        for pool in &mut self.pools {
            pool.remove_team(team_id);
        }
    }

    /// Rebuild pool membership from the seed list (seed 1 first).
    pub fn set_team_list(&mut self, seeds: &[TeamId]) {
        for pool in &mut self.pools {
            pool.team_ids.clear();
        }
        for (idx, team_id) in seeds.iter().enumerate() {
            self.add_seeded_team(*team_id, idx as u32 + 1);
        }
    }

    pub fn add_match(&mut self, game: Match, round_no: u32) -> bool {
        match self.round_mut(round_no) {
            Some(round) => {
                round.matches.push(game);
                true
            }
            None => false,
        }
    }

    pub fn delete_match(&mut self, match_id: MatchId, round_no: u32) {
        if let Some(round) = self.round_mut(round_no) {
            round.matches.retain(|m| m.id != match_id);
        }
    }

    /// Matches in this phase involving teams of the given pool, or all of
    /// this phase's matches when no pool is given. Used for tiebreaker and
    /// finals listings.
    pub fn matches_for_pool(&self, pool: Option<&Pool>) -> Vec<&Match> {
        let mut result = Vec::new();
        for round in &self.rounds {
            for m in &round.matches {
                let relevant = match pool {
                    None => true,
                    Some(p) => [&m.left_team, &m.right_team]
                        .iter()
                        .any(|mt| mt.team_id.is_some_and(|id| p.has_team(id))),
                };
                if relevant {
                    result.push(m);
                }
            }
        }
        result
    }

    pub fn team_has_played_any_matches(&self, team_id: TeamId) -> bool {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .any(|m| m.side_of_team(team_id).is_some())
    }

    /// Players of the given team with at least one scored appearance here.
    pub fn players_with_data(&self, team_id: TeamId) -> Vec<PlayerId> {
        let mut players = Vec::new();
        for round in &self.rounds {
            for m in &round.matches {
                let Some(side) = m.side_of_team(team_id) else {
                    continue;
                };
                for mp in m.match_team(side).active_match_players() {
                    if !players.contains(&mp.player_id) {
                        players.push(mp.player_id);
                    }
                }
            }
        }
        players
    }
}
