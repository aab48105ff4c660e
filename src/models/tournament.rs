//! Tournament: the aggregate owning registrations, phases, seeds, scoring
//! rules, and the compiled statistics.

use crate::logic::standings::{CumulativeStats, PhaseStandings};
use crate::models::game::{Match, MatchId, MatchTeam};
use crate::models::phase::{Phase, PhaseType, Pool};
use crate::models::scoring_rules::{CommonRuleSet, ScoringRules};
use crate::models::team::{Player, PlayerId, Registration, Team, TeamId};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Errors that can occur during tournament mutations. Statistics compilation
/// itself never fails; it produces a best-effort result over whatever data
/// exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    TeamNotFound(TeamId),
    PlayerNotFound(PlayerId),
    MatchNotFound(MatchId),
    /// No phase contains the given round number.
    RoundNotFound(u32),
    PhaseNotFound(String),
    RegistrationNotFound(String),
    /// Team names are unique within a tournament (case-insensitive).
    DuplicateTeamName(String),
    /// Seed number outside the current seed list.
    InvalidSeed(u32),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::RoundNotFound(no) => write!(f, "No phase contains round {no}"),
            TournamentError::PhaseNotFound(name) => write!(f, "No phase named {name}"),
            TournamentError::RegistrationNotFound(name) => {
                write!(f, "No registration named {name}")
            }
            TournamentError::DuplicateTeamName(name) => {
                write!(f, "A team named {name} already exists")
            }
            TournamentError::InvalidSeed(no) => write!(f, "Seed {no} is out of range"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// The full data for one tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub site_name: String,
    pub question_set: String,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub scoring_rules: ScoringRules,
    /// The schools/organizations entered, each owning its teams.
    pub registrations: Vec<Registration>,
    pub phases: Vec<Phase>,
    /// Teams ordered by initial seed (seed 1 first). Not the source of truth
    /// for which teams exist; that's the registrations.
    pub seeds: Vec<TeamId>,
    pub track_player_year: bool,
    pub track_small_school: bool,
    pub track_jv: bool,
    pub track_ug: bool,
    pub track_d2: bool,
    /// Sequence for team/player/match IDs. Monotonic, never reused.
    next_entity_id: u32,
    /// One entry per full phase, rebuilt by [`Tournament::compile_stats`].
    #[serde(skip)]
    pub stats: Vec<PhaseStandings>,
    /// All full phases merged, rebuilt by [`Tournament::compile_stats`].
    #[serde(skip)]
    pub cumulative_stats: Option<CumulativeStats>,
}

impl Tournament {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            site_name: String::new(),
            question_set: String::new(),
            start_date: None,
            end_date: None,
            scoring_rules: ScoringRules::default(),
            registrations: Vec::new(),
            phases: Vec::new(),
            seeds: Vec::new(),
            track_player_year: true,
            track_small_school: false,
            track_jv: false,
            track_ug: false,
            track_d2: false,
            next_entity_id: 0,
            stats: Vec::new(),
            cumulative_stats: None,
        }
    }

    /// Replace the scoring rules with a well-known rule set.
    pub fn apply_rule_set(&mut self, rule_set: CommonRuleSet) {
        self.scoring_rules = ScoringRules::new(rule_set);
    }

    fn next_id(&mut self) -> u32 {
        self.next_entity_id += 1;
        self.next_entity_id
    }

    // ---- lookups ----------------------------------------------------------

    pub fn team_list(&self) -> Vec<&Team> {
        self.registrations
            .iter()
            .flat_map(|reg| reg.teams.iter())
            .collect()
    }

    pub fn number_of_teams(&self) -> usize {
        self.registrations.iter().map(|reg| reg.teams.len()).sum()
    }

    /// How many teams there's room for, based on the prelim pools.
    /// `None` if there's not enough information to calculate.
    pub fn expected_number_of_teams(&self) -> Option<usize> {
        let prelim = self.prelim_phase()?;
        Some(prelim.pools.iter().map(|p| p.size).sum())
    }

    pub fn find_team(&self, id: TeamId) -> Option<&Team> {
        self.registrations.iter().find_map(|reg| reg.find_team(id))
    }

    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.registrations
            .iter()
            .flat_map(|reg| reg.teams.iter())
            .find(|t| t.name == name)
    }

    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.registrations
            .iter()
            .flat_map(|reg| reg.teams.iter())
            .find_map(|t| t.find_player(id))
    }

    /// The team owning the given player.
    pub fn find_team_of_player(&self, id: PlayerId) -> Option<&Team> {
        self.registrations
            .iter()
            .flat_map(|reg| reg.teams.iter())
            .find(|t| t.find_player(id).is_some())
    }

    pub fn find_registration_by_team(&self, team_id: TeamId) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|reg| reg.find_team(team_id).is_some())
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.phases
            .iter()
            .flat_map(|ph| ph.rounds.iter())
            .flat_map(|r| r.matches.iter())
            .find(|m| m.id == id)
    }

    // ---- phase navigation -------------------------------------------------

    pub fn prelim_phase(&self) -> Option<&Phase> {
        self.phases
            .iter()
            .find(|ph| ph.phase_type == PhaseType::Prelim)
    }

    pub fn full_phases(&self) -> Vec<&Phase> {
        self.phases.iter().filter(|ph| ph.is_full_phase()).collect()
    }

    pub fn finals_phases(&self) -> Vec<&Phase> {
        self.phases
            .iter()
            .filter(|ph| ph.phase_type == PhaseType::Finals)
            .collect()
    }

    /// The next full phase after the one at `phase_idx`, i.e. the playoff
    /// stage that phase feeds into.
    pub fn next_full_phase(&self, phase_idx: usize) -> Option<&Phase> {
        self.phases
            .iter()
            .skip(phase_idx + 1)
            .find(|ph| ph.phase_type == PhaseType::Playoff)
    }

    /// The tiebreaker phase directly following the given phase, if any.
    pub fn tiebreaker_phase_for(&self, phase_idx: usize) -> Option<&Phase> {
        let next = self.phases.get(phase_idx + 1)?;
        if next.phase_type == PhaseType::Tiebreaker {
            Some(next)
        } else {
            None
        }
    }

    pub fn find_phase_by_name(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|ph| ph.name == name)
    }

    pub fn phase_for_round(&self, round_no: u32) -> Option<&Phase> {
        self.phases.iter().find(|ph| ph.includes_round(round_no))
    }

    fn phase_for_round_mut(&mut self, round_no: u32) -> Option<&mut Phase> {
        self.phases
            .iter_mut()
            .find(|ph| ph.includes_round(round_no))
    }

    pub fn find_pool_with_team(&self, team_id: TeamId, round_no: u32) -> Option<&Pool> {
        self.phase_for_round(round_no)?.find_pool_with_team(team_id)
    }

    pub fn has_any_carryover(&self) -> bool {
        self.phases
            .iter()
            .flat_map(|ph| ph.rounds.iter())
            .flat_map(|r| r.matches.iter())
            .any(|m| !m.carryover_phases.is_empty())
    }

    pub fn any_match_data_exists(&self) -> bool {
        self.prelim_phase().is_some_and(|ph| ph.any_matches_exist())
    }

    pub fn team_has_played_any_match(&self, team_id: TeamId) -> bool {
        self.phases
            .iter()
            .any(|ph| ph.team_has_played_any_matches(team_id))
    }

    /// Which players on this team have played, in any phase?
    pub fn players_with_data(&self, team_id: TeamId) -> Vec<PlayerId> {
        let mut players = Vec::new();
        for ph in &self.phases {
            for id in ph.players_with_data(team_id) {
                if !players.contains(&id) {
                    players.push(id);
                }
            }
        }
        players
    }

    // ---- registrations and teams ------------------------------------------

    /// Add a registration, keeping the list sorted by name.
    pub fn add_registration(&mut self, reg: Registration) {
        self.registrations.push(reg);
        self.registrations.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn find_registration(&self, name: &str) -> Option<&Registration> {
        self.registrations.iter().find(|reg| reg.name == name)
    }

    /// Add a new registration together with its first team. The team is
    /// seeded at the end of the seed list. Returns the new team's id.
    pub fn add_reg_and_team(
        &mut self,
        reg_name: impl Into<String>,
        team_name: impl Into<String>,
    ) -> Result<TeamId, TournamentError> {
        let team_name = team_name.into();
        if self
            .team_list()
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(&team_name))
        {
            return Err(TournamentError::DuplicateTeamName(team_name));
        }
        let team_id = TeamId(self.next_id());
        let mut reg = Registration::new(reg_name);
        reg.teams.push(Team::new(team_id, team_name));
        self.add_registration(reg);
        self.seed_and_assign_new_team(team_id);
        Ok(team_id)
    }

    /// Add another team to an existing registration, seeding it at the end.
    pub fn add_team(
        &mut self,
        reg_name: &str,
        team_name: impl Into<String>,
    ) -> Result<TeamId, TournamentError> {
        let team_name = team_name.into();
        if self
            .team_list()
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(&team_name))
        {
            return Err(TournamentError::DuplicateTeamName(team_name));
        }
        let team_id = TeamId(self.next_id());
        let reg = self
            .registrations
            .iter_mut()
            .find(|reg| reg.name == reg_name)
            .ok_or_else(|| TournamentError::RegistrationNotFound(reg_name.to_string()))?;
        reg.teams.push(Team::new(team_id, team_name));
        self.seed_and_assign_new_team(team_id);
        Ok(team_id)
    }

    pub fn add_player(
        &mut self,
        team_id: TeamId,
        name: impl Into<String>,
    ) -> Result<PlayerId, TournamentError> {
        let player_id = PlayerId(self.next_id());
        let team = self
            .registrations
            .iter_mut()
            .flat_map(|reg| reg.teams.iter_mut())
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.players.push(Player::new(player_id, name));
        Ok(player_id)
    }

    pub fn delete_registration(&mut self, name: &str) {
        let team_ids: Vec<TeamId> = self
            .registrations
            .iter()
            .filter(|reg| reg.name == name)
            .flat_map(|reg| reg.teams.iter().map(|t| t.id))
            .collect();
        for id in team_ids {
            self.delete_team_from_seeds(id);
        }
        self.registrations.retain(|reg| reg.name != name);
    }

    /// Remove a team entirely: from its registration, the seed list, and
    /// every pool. A registration left with no teams is removed too.
    pub fn delete_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        let reg = self
            .registrations
            .iter_mut()
            .find(|reg| reg.find_team(team_id).is_some())
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        reg.delete_team(team_id);
        self.registrations.retain(|r| !r.teams.is_empty());
        self.delete_team_from_seeds(team_id);
        Ok(())
    }

    // ---- seeds ------------------------------------------------------------

    /// Give a new team the last seed and put it in the matching prelim pool.
    /// Returns the 1-indexed seed number.
    pub fn seed_and_assign_new_team(&mut self, team_id: TeamId) -> u32 {
        self.seeds.push(team_id);
        let seed_no = self.seeds.len() as u32;
        if let Some(prelim) = self
            .phases
            .iter_mut()
            .find(|ph| ph.phase_type == PhaseType::Prelim)
        {
            prelim.add_seeded_team(team_id, seed_no);
        }
        seed_no
    }

    fn delete_team_from_seeds(&mut self, team_id: TeamId) {
        self.seeds.retain(|id| *id != team_id);
        for ph in &mut self.phases {
            ph.remove_team(team_id);
        }
        self.distribute_seeds();
    }

    /// Swap the team at the given seed with the team above it.
    /// Seed numbers are 1-indexed.
    pub fn shift_seed_up(&mut self, seed_no: u32) -> Result<(), TournamentError> {
        if seed_no < 2 || seed_no as usize > self.seeds.len() {
            return Err(TournamentError::InvalidSeed(seed_no));
        }
        let idx = seed_no as usize - 1;
        self.seeds.swap(idx, idx - 1);
        self.distribute_seeds();
        Ok(())
    }

    /// Swap the team at the given seed with the team below it.
    pub fn shift_seed_down(&mut self, seed_no: u32) -> Result<(), TournamentError> {
        if seed_no < 1 || seed_no as usize >= self.seeds.len() {
            return Err(TournamentError::InvalidSeed(seed_no));
        }
        let idx = seed_no as usize - 1;
        self.seeds.swap(idx, idx + 1);
        self.distribute_seeds();
        Ok(())
    }

    /// Move a seed to a new position, shifting the seeds between.
    pub fn insert_seed_at_position(
        &mut self,
        seed_to_move: u32,
        new_position: u32,
    ) -> Result<(), TournamentError> {
        let len = self.seeds.len() as u32;
        if seed_to_move < 1 || seed_to_move > len {
            return Err(TournamentError::InvalidSeed(seed_to_move));
        }
        if new_position < 1 || new_position > len {
            return Err(TournamentError::InvalidSeed(new_position));
        }
        if seed_to_move == new_position {
            return Ok(());
        }
        let team = self.seeds.remove(seed_to_move as usize - 1);
        self.seeds.insert(new_position as usize - 1, team);
        self.distribute_seeds();
        Ok(())
    }

    pub fn swap_seeds(&mut self, seed_a: u32, seed_b: u32) -> Result<(), TournamentError> {
        let len = self.seeds.len() as u32;
        for seed in [seed_a, seed_b] {
            if seed < 1 || seed > len {
                return Err(TournamentError::InvalidSeed(seed));
            }
        }
        if seed_a != seed_b {
            self.seeds.swap(seed_a as usize - 1, seed_b as usize - 1);
            self.distribute_seeds();
        }
        Ok(())
    }

    /// Repopulate the prelim pools from the seed list.
    pub fn distribute_seeds(&mut self) {
        let seeds = self.seeds.clone();
        if let Some(prelim) = self
            .phases
            .iter_mut()
            .find(|ph| ph.phase_type == PhaseType::Prelim)
        {
            prelim.set_team_list(&seeds);
        }
    }

    // ---- matches ----------------------------------------------------------

    /// Build a match between two rostered teams, with player slots for both
    /// rosters. The match isn't scheduled until passed to [`Self::add_match`].
    pub fn create_match(
        &mut self,
        left_team_id: TeamId,
        right_team_id: TeamId,
    ) -> Result<Match, TournamentError> {
        let answer_types = self.scoring_rules.answer_types.clone();
        let left = self
            .find_team(left_team_id)
            .ok_or(TournamentError::TeamNotFound(left_team_id))?;
        let left_mt = MatchTeam::from_team(left, &answer_types);
        let right = self
            .find_team(right_team_id)
            .ok_or(TournamentError::TeamNotFound(right_team_id))?;
        let right_mt = MatchTeam::from_team(right, &answer_types);
        Ok(Match::new(MatchId(self.next_id()), left_mt, right_mt))
    }

    pub fn add_match(&mut self, game: Match, round_no: u32) -> Result<(), TournamentError> {
        let phase = self
            .phase_for_round_mut(round_no)
            .ok_or(TournamentError::RoundNotFound(round_no))?;
        phase.add_match(game, round_no);
        Ok(())
    }

    pub fn delete_match(&mut self, match_id: MatchId, round_no: u32) -> Result<(), TournamentError> {
        let phase = self
            .phase_for_round_mut(round_no)
            .ok_or(TournamentError::RoundNotFound(round_no))?;
        phase.delete_match(match_id, round_no);
        Ok(())
    }

    /// Run data-entry validation on one match and return its messages with
    /// team names attached. The messages also stay on the match teams.
    pub fn validate_match(&mut self, match_id: MatchId) -> Result<Vec<String>, TournamentError> {
        let rules = self.scoring_rules.clone();
        let mut names: Vec<Option<String>> = Vec::new();
        {
            let game = self
                .find_match(match_id)
                .ok_or(TournamentError::MatchNotFound(match_id))?;
            for mt in [&game.left_team, &game.right_team] {
                names.push(
                    mt.team_id
                        .and_then(|id| self.find_team(id))
                        .map(|t| t.name.clone()),
                );
            }
        }
        let game = self
            .phases
            .iter_mut()
            .flat_map(|ph| ph.rounds.iter_mut())
            .flat_map(|r| r.matches.iter_mut())
            .find(|m| m.id == match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        game.validate_all(&rules);

        let mut messages = Vec::new();
        for (mt, name) in [&game.left_team, &game.right_team].iter().zip(&names) {
            for msg in mt.error_messages(false) {
                match name {
                    Some(n) => messages.push(format!("{n}: {msg}")),
                    None => messages.push(msg),
                }
            }
        }
        Ok(messages)
    }

    // ---- statistics -------------------------------------------------------

    /// Rebuild all statistics from the raw match data. Idempotent; call again
    /// after any mutation to match, team, or player data.
    pub fn compile_stats(&mut self) {
        let mut stats = Vec::new();
        for (idx, phase) in self.phases.iter().enumerate() {
            if phase.is_full_phase() {
                stats.push(PhaseStandings::compile(self, idx));
            }
        }
        self.cumulative_stats = if stats.is_empty() {
            None
        } else {
            Some(CumulativeStats::compile(self, &stats))
        };
        self.stats = stats;
        debug!(
            "compiled stats for {} phase(s), {} team(s)",
            self.stats.len(),
            self.number_of_teams()
        );
    }
}
