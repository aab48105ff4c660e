//! Per-entity stat accumulators: team, player, and round totals built up
//! match by match within a phase.
//!
//! Accumulators are pure derived data, rebuilt from the raw match graph on
//! every compile. They are never persisted and never edited in place.

use crate::models::{AnswerCount, Match, MatchId, PlayerId, ScoringRules, Side, TeamId};

/// Where one accumulated game came from: enough to find the match again
/// without holding a reference into the tournament graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchLine {
    /// Index of the phase that owns the match (which, for carryover games,
    /// is not the phase being compiled).
    pub phase_idx: usize,
    pub round_number: u32,
    pub match_id: MatchId,
    pub side: Side,
}

fn add_answer_counts(totals: &mut Vec<AnswerCount>, source: &[AnswerCount]) {
    for ac in source {
        match totals
            .iter_mut()
            .find(|t| t.answer_type.value == ac.answer_type.value)
        {
            Some(t) => t.number = Some(t.number.unwrap_or(0) + ac.number.unwrap_or(0)),
            None => totals.push(AnswerCount {
                answer_type: ac.answer_type.clone(),
                number: Some(ac.number.unwrap_or(0)),
            }),
        }
    }
}

/// One team's accumulated record and scoring within a phase (or across all
/// phases, for the cumulative table).
#[derive(Clone, Debug, PartialEq)]
pub struct PoolTeamStats {
    pub team_id: TeamId,
    /// Index into the phase's pool list; `None` for teams playing without a
    /// pool assignment, and for cumulative stats.
    pub pool_idx: Option<usize>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Points counting toward per-tossup rates (overtime-adjusted).
    pub total_points_for_ppg: i64,
    /// Tossups heard in regulation, team-level (one per tossup read).
    pub tuh_regulation: u32,
    /// Tossups heard including overtime.
    pub tuh_total: u32,
    pub tossup_counts: Vec<AnswerCount>,
    pub bonus_points: i64,
    pub bonuses_heard: u32,
    pub bounceback_points: i64,
    pub bounceback_parts_heard: f64,
    /// Every game that fed this accumulator, in schedule order.
    pub matches: Vec<MatchLine>,
    /// Position-based rank within the pool; tied teams share a rank and the
    /// following rank numbers are skipped.
    pub rank: u32,
    pub rank_tie: bool,
    /// Provisional next-phase tier from the standing order, when the next
    /// phase hasn't been populated yet.
    pub advance_to_tier: Option<u32>,
    /// The team is tied at an advancement cutoff, so whether it advances is
    /// ambiguous until a tiebreaker is played.
    pub record_tie_for_advancement: bool,
    /// Set from the next phase's actual pools once they're populated.
    pub did_not_advance: bool,
}

impl PoolTeamStats {
    pub fn new(team_id: TeamId, pool_idx: Option<usize>, rules: &ScoringRules) -> Self {
        Self {
            team_id,
            pool_idx,
            wins: 0,
            losses: 0,
            ties: 0,
            total_points_for_ppg: 0,
            tuh_regulation: 0,
            tuh_total: 0,
            tossup_counts: rules
                .answer_types
                .iter()
                .map(|at| AnswerCount {
                    answer_type: at.clone(),
                    number: Some(0),
                })
                .collect(),
            bonus_points: 0,
            bonuses_heard: 0,
            bounceback_points: 0,
            bounceback_parts_heard: 0.0,
            matches: Vec::new(),
            rank: 0,
            rank_tie: false,
            advance_to_tier: None,
            record_tie_for_advancement: false,
            did_not_advance: false,
        }
    }

    /// Fold one game into the totals. Forfeits count toward the record only;
    /// they contribute nothing to any per-question figure or denominator.
    pub fn add_match(&mut self, line: MatchLine, game: &Match, rules: &ScoringRules) {
        use crate::models::GameResult::*;
        let side = line.side;
        self.matches.push(line);
        match game.result_for(side) {
            Some(Win) => self.wins += 1,
            Some(Loss) => self.losses += 1,
            Some(Tie) => self.ties += 1,
            None => {}
        }
        if game.is_forfeit() {
            return;
        }

        let mt = game.match_team(side);
        self.total_points_for_ppg += i64::from(mt.points_for_ppg(rules));
        let tossups_read = game.tossups_read.unwrap_or(0);
        self.tuh_total += tossups_read;
        self.tuh_regulation += tossups_read.saturating_sub(game.overtime_tossups_read);
        add_answer_counts(&mut self.tossup_counts, &mt.answer_counts());
        self.bonus_points += i64::from(mt.bonus_points());
        self.bonuses_heard += mt.bonuses_heard(rules);
        self.bounceback_points += i64::from(mt.bonus_bounceback_points.unwrap_or(0));
        if let Some(parts) = game.bounceback_parts_heard(side, rules) {
            self.bounceback_parts_heard += parts;
        }
    }

    /// Fold another accumulator for the same team into this one (cumulative
    /// stats): raw counts are summed, never re-derived ratios.
    pub fn merge(&mut self, other: &PoolTeamStats) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
        self.total_points_for_ppg += other.total_points_for_ppg;
        self.tuh_regulation += other.tuh_regulation;
        self.tuh_total += other.tuh_total;
        add_answer_counts(&mut self.tossup_counts, &other.tossup_counts);
        self.bonus_points += other.bonus_points;
        self.bonuses_heard += other.bonuses_heard;
        self.bounceback_points += other.bounceback_points;
        self.bounceback_parts_heard += other.bounceback_parts_heard;
        self.matches.extend(other.matches.iter().copied());
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// `None` until the team has played a game.
    pub fn win_pct(&self) -> Option<f64> {
        let games = self.games();
        if games == 0 {
            return None;
        }
        Some((f64::from(self.wins) + 0.5 * f64::from(self.ties)) / f64::from(games))
    }

    /// Two records compare equal only when both teams have actually played;
    /// exact rational comparison, no float equality.
    pub fn record_equal(&self, other: &PoolTeamStats) -> bool {
        let (ga, gb) = (self.games(), other.games());
        if ga == 0 || gb == 0 {
            return false;
        }
        u64::from(2 * self.wins + self.ties) * u64::from(gb)
            == u64::from(2 * other.wins + other.ties) * u64::from(ga)
    }

    /// "12-3" or "12-3-1" once any ties exist.
    pub fn record(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }

    pub fn pts_per_reg_tuh(&self) -> Option<f64> {
        if self.tuh_regulation == 0 {
            return None;
        }
        Some(self.total_points_for_ppg as f64 / f64::from(self.tuh_regulation))
    }

    pub fn pts_per_bonus(&self) -> Option<f64> {
        if self.bonuses_heard == 0 {
            return None;
        }
        Some(self.bonus_points as f64 / f64::from(self.bonuses_heard))
    }

    pub fn bounceback_conv_pct(&self, rules: &ScoringRules) -> Option<f64> {
        if self.bounceback_parts_heard <= 0.0 || rules.bonus_divisor == 0 {
            return None;
        }
        Some(
            self.bounceback_points as f64
                / (self.bounceback_parts_heard * f64::from(rules.bonus_divisor))
                * 100.0,
        )
    }

    pub fn tossup_count(&self, value: i32) -> u32 {
        self.tossup_counts
            .iter()
            .find(|ac| ac.answer_type.value == value)
            .and_then(|ac| ac.number)
            .unwrap_or(0)
    }

    /// "3" or "3=" when sharing the rank.
    pub fn rank_string(&self) -> String {
        if self.rank_tie {
            format!("{}=", self.rank)
        } else {
            self.rank.to_string()
        }
    }
}

/// One player's accumulated line within a phase or across the tournament.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    /// Fractional: a player who heard half a game's tossups played 0.5 games.
    pub games_played: f64,
    pub tossups_heard: u32,
    pub tossup_counts: Vec<AnswerCount>,
    pub matches: Vec<MatchLine>,
    pub rank: u32,
    pub rank_tie: bool,
}

impl PlayerStats {
    pub fn new(player_id: PlayerId, team_id: TeamId, rules: &ScoringRules) -> Self {
        Self {
            player_id,
            team_id,
            games_played: 0.0,
            tossups_heard: 0,
            tossup_counts: rules
                .answer_types
                .iter()
                .map(|at| AnswerCount {
                    answer_type: at.clone(),
                    number: Some(0),
                })
                .collect(),
            matches: Vec::new(),
            rank: 0,
            rank_tie: false,
        }
    }

    pub fn add_match(&mut self, line: MatchLine, game: &Match) {
        let mt = game.match_team(line.side);
        let Some(mp) = mt
            .match_players
            .iter()
            .find(|mp| mp.player_id == self.player_id)
        else {
            return;
        };
        self.matches.push(line);
        if game.is_forfeit() {
            return;
        }
        let heard = mp.tossups_heard.unwrap_or(0);
        self.tossups_heard += heard;
        if let Some(read) = game.tossups_read.filter(|r| *r > 0) {
            self.games_played += f64::from(heard) / f64::from(read);
        }
        add_answer_counts(&mut self.tossup_counts, &mp.answer_counts);
    }

    pub fn total_points(&self) -> i64 {
        self.tossup_counts.iter().map(|ac| i64::from(ac.points())).sum()
    }

    /// Points per tossup heard. `None` until the player has heard one.
    pub fn pptuh(&self) -> Option<f64> {
        if self.tossups_heard == 0 {
            return None;
        }
        Some(self.total_points() as f64 / f64::from(self.tossups_heard))
    }

    /// Exact comparison of scoring rates; players who haven't played never
    /// compare equal.
    pub fn pptuh_equal(&self, other: &PlayerStats) -> bool {
        if self.tossups_heard == 0 || other.tossups_heard == 0 {
            return false;
        }
        self.total_points() * i64::from(other.tossups_heard)
            == other.total_points() * i64::from(self.tossups_heard)
    }

    pub fn tossup_count(&self, value: i32) -> u32 {
        self.tossup_counts
            .iter()
            .find(|ac| ac.answer_type.value == value)
            .and_then(|ac| ac.number)
            .unwrap_or(0)
    }

    pub fn rank_string(&self) -> String {
        if self.rank_tie {
            format!("{}=", self.rank)
        } else {
            self.rank.to_string()
        }
    }
}

/// Aggregate difficulty/pace figures for one round (or, merged, for the
/// whole tournament).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundStats {
    /// Owning phase, if this row is for one round rather than the totals.
    pub phase_idx: Option<usize>,
    pub round_number: u32,
    /// Non-forfeit games only.
    pub games: u32,
    pub total_points_for_ppg: i64,
    /// Team-level regulation tossups heard (two teams per tossup read).
    pub tuh_team_regulation: u32,
    /// Tossups read across games, including overtime.
    pub tossups_read: u32,
    pub powers: u32,
    /// Tossups answered for positive points.
    pub converted: u32,
    pub negs: u32,
    pub bonus_points: i64,
    pub bonuses_heard: u32,
    pub bounceback_points: i64,
    pub bounceback_parts_heard: f64,
}

impl RoundStats {
    pub fn new(phase_idx: Option<usize>, round_number: u32) -> Self {
        Self {
            phase_idx,
            round_number,
            ..Self::default()
        }
    }

    pub fn add_match(&mut self, game: &Match, rules: &ScoringRules) {
        if game.is_forfeit() {
            return;
        }
        self.games += 1;
        let tossups_read = game.tossups_read.unwrap_or(0);
        self.tossups_read += tossups_read;
        self.tuh_team_regulation +=
            2 * tossups_read.saturating_sub(game.overtime_tossups_read);
        let power_value = rules.power_value();
        for side in [Side::Left, Side::Right] {
            let mt = game.match_team(side);
            self.total_points_for_ppg += i64::from(mt.points_for_ppg(rules));
            for ac in mt.answer_counts() {
                let n = ac.number.unwrap_or(0);
                if ac.answer_type.value > 0 {
                    self.converted += n;
                }
                if Some(ac.answer_type.value) == power_value {
                    self.powers += n;
                }
                if ac.answer_type.is_neg() {
                    self.negs += n;
                }
            }
            self.bonus_points += i64::from(mt.bonus_points());
            self.bonuses_heard += mt.bonuses_heard(rules);
            self.bounceback_points += i64::from(mt.bonus_bounceback_points.unwrap_or(0));
            if let Some(parts) = game.bounceback_parts_heard(side, rules) {
                self.bounceback_parts_heard += parts;
            }
        }
    }

    pub fn merge(&mut self, other: &RoundStats) {
        self.games += other.games;
        self.total_points_for_ppg += other.total_points_for_ppg;
        self.tuh_team_regulation += other.tuh_team_regulation;
        self.tossups_read += other.tossups_read;
        self.powers += other.powers;
        self.converted += other.converted;
        self.negs += other.negs;
        self.bonus_points += other.bonus_points;
        self.bonuses_heard += other.bonuses_heard;
        self.bounceback_points += other.bounceback_points;
        self.bounceback_parts_heard += other.bounceback_parts_heard;
    }

    /// Average points per team per `regulation_tossup_count` tossups heard.
    pub fn points_per_x_tuh(&self, rules: &ScoringRules) -> Option<f64> {
        if self.tuh_team_regulation == 0 {
            return None;
        }
        Some(
            self.total_points_for_ppg as f64 / f64::from(self.tuh_team_regulation)
                * f64::from(rules.regulation_tossup_count),
        )
    }

    pub fn power_pct(&self) -> Option<f64> {
        if self.tossups_read == 0 {
            return None;
        }
        Some(f64::from(self.powers) / f64::from(self.tossups_read) * 100.0)
    }

    pub fn tossup_conversion_pct(&self) -> Option<f64> {
        if self.tossups_read == 0 {
            return None;
        }
        Some(f64::from(self.converted) / f64::from(self.tossups_read) * 100.0)
    }

    pub fn negs_per_x_tuh(&self, rules: &ScoringRules) -> Option<f64> {
        if self.tuh_team_regulation == 0 {
            return None;
        }
        Some(
            f64::from(self.negs) / f64::from(self.tuh_team_regulation)
                * f64::from(rules.regulation_tossup_count),
        )
    }

    pub fn points_per_bonus(&self) -> Option<f64> {
        if self.bonuses_heard == 0 {
            return None;
        }
        Some(self.bonus_points as f64 / f64::from(self.bonuses_heard))
    }

    pub fn bounceback_conv_pct(&self, rules: &ScoringRules) -> Option<f64> {
        if self.bounceback_parts_heard <= 0.0 || rules.bonus_divisor == 0 {
            return None;
        }
        Some(
            self.bounceback_points as f64
                / (self.bounceback_parts_heard * f64::from(rules.bonus_divisor))
                * 100.0,
        )
    }

    /// Share of available bonus points that were converted.
    pub fn total_bonus_conv_pct(&self, rules: &ScoringRules) -> Option<f64> {
        if self.bonuses_heard == 0 || rules.maximum_bonus_score == 0 {
            return None;
        }
        Some(
            self.bonus_points as f64
                / (f64::from(self.bonuses_heard) * f64::from(rules.maximum_bonus_score))
                * 100.0,
        )
    }
}
