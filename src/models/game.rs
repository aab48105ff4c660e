//! Matches: the box score entered for one game between two teams.
//!
//! Everything derivable from the raw entered numbers (tossup points, bonus
//! points, points per bonus) is computed on demand and never stored, so the
//! derived values can't drift out of sync with the data.

use crate::models::scoring_rules::{AnswerType, ScoringRules};
use crate::models::team::{PlayerId, Team, TeamId};
use crate::models::validation::{
    MatchValidationCollection, MatchValidationMessage, MatchValidationType, ValidationStatus,
};
use serde::{Deserialize, Serialize};

/// Identifier of a match within one tournament.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u32);

/// Which slot of the match a team occupies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// How many buzzes of one answer type were recorded. `None` means the field
/// hasn't been filled in, which is distinct from an explicit zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerCount {
    pub answer_type: AnswerType,
    pub number: Option<u32>,
}

impl AnswerCount {
    pub fn new(answer_type: AnswerType) -> Self {
        Self {
            answer_type,
            number: None,
        }
    }

    pub fn points(&self) -> i32 {
        self.number.unwrap_or(0) as i32 * self.answer_type.value
    }
}

/// Sort counts the way the rules list answer types: by value, descending.
pub fn sort_answer_counts(counts: &mut [AnswerCount]) {
    counts.sort_by(|a, b| b.answer_type.value.cmp(&a.answer_type.value));
}

/// One player's performance in one match. A player being listed doesn't mean
/// they actually played; `tossups_heard == 0` entries are filtered from
/// active-player views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub player_id: PlayerId,
    pub tossups_heard: Option<u32>,
    pub answer_counts: Vec<AnswerCount>,
    pub validation: MatchValidationCollection,
}

impl MatchPlayer {
    pub fn new(player_id: PlayerId, answer_types: &[AnswerType]) -> Self {
        Self {
            player_id,
            tossups_heard: None,
            answer_counts: answer_types.iter().cloned().map(AnswerCount::new).collect(),
            validation: MatchValidationCollection::default(),
        }
    }

    /// Points scored on tossups: the sum of buzz counts times their values.
    pub fn points(&self) -> i32 {
        self.answer_counts.iter().map(|ac| ac.points()).sum()
    }

    pub fn total_buzzes(&self, positive_only: bool) -> u32 {
        self.answer_counts
            .iter()
            .filter(|ac| !positive_only || ac.answer_type.value > 0)
            .map(|ac| ac.number.unwrap_or(0))
            .sum()
    }

    /// Did this player actually play in this game?
    pub fn was_active(&self) -> bool {
        self.tossups_heard.unwrap_or(0) > 0
    }

    pub fn set_answer_count(&mut self, value: i32, count: Option<u32>) {
        if let Some(ac) = self
            .answer_counts
            .iter_mut()
            .find(|ac| ac.answer_type.value == value)
        {
            ac.number = count;
        }
    }

    pub fn answer_count(&self, value: i32) -> u32 {
        self.answer_counts
            .iter()
            .find(|ac| ac.answer_type.value == value)
            .and_then(|ac| ac.number)
            .unwrap_or(0)
    }

    /// A player can't have buzzed more times than they heard tossups.
    pub fn validate_answer_counts(&mut self) {
        let buzzes = self.total_buzzes(false);
        let heard = self.tossups_heard.unwrap_or(0);
        if buzzes > heard {
            self.validation.add_message(
                MatchValidationType::BuzzesExceedTossupsHeard,
                ValidationStatus::Error,
                format!("{buzzes} buzzes recorded but only {heard} tossups heard"),
                false,
            );
        } else {
            self.validation
                .clear_type(MatchValidationType::BuzzesExceedTossupsHeard);
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.validation.error_messages(false)
    }
}

/// One team's performance in one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub team_id: Option<TeamId>,
    pub forfeit_loss: bool,
    /// Total score, as entered. `None` until filled in.
    pub points: Option<i32>,
    /// Points earned on bonuses bounced back from the opponent.
    pub bonus_bounceback_points: Option<i32>,
    pub lightning_points: Option<i32>,
    /// Buzzes the team recorded in overtime. Not tracked per player.
    pub overtime_buzzes: Vec<AnswerCount>,
    pub match_players: Vec<MatchPlayer>,
    /// Validation attached specifically to the total-score field.
    pub total_score_validation: MatchValidationMessage,
    /// Validation messages not tied to a single field.
    pub validation: MatchValidationCollection,
}

impl MatchTeam {
    pub const MIN_VALID_SCORE: i32 = -99999;
    pub const MAX_VALID_SCORE: i32 = 99999;

    /// A match team with one [`MatchPlayer`] slot per roster player.
    pub fn from_team(team: &Team, answer_types: &[AnswerType]) -> Self {
        Self {
            team_id: Some(team.id),
            match_players: team
                .players
                .iter()
                .map(|p| MatchPlayer::new(p.id, answer_types))
                .collect(),
            ..Self::empty(answer_types)
        }
    }

    /// A match team with no team assigned yet.
    pub fn empty(answer_types: &[AnswerType]) -> Self {
        Self {
            team_id: None,
            forfeit_loss: false,
            points: None,
            bonus_bounceback_points: None,
            lightning_points: None,
            overtime_buzzes: answer_types.iter().cloned().map(AnswerCount::new).collect(),
            match_players: Vec::new(),
            total_score_validation: MatchValidationMessage::new(
                MatchValidationType::InvalidTeamScore,
            ),
            validation: MatchValidationCollection::default(),
        }
    }

    /// For roster players with no [`MatchPlayer`] entry yet, make one.
    pub fn add_new_players(&mut self, team: &Team, answer_types: &[AnswerType]) {
        for player in &team.players {
            if !self.match_players.iter().any(|mp| mp.player_id == player.id) {
                self.match_players
                    .push(MatchPlayer::new(player.id, answer_types));
            }
        }
    }

    /// Players who actually played in this match.
    pub fn player_list(&self) -> Vec<PlayerId> {
        self.active_match_players().map(|mp| mp.player_id).collect()
    }

    pub fn active_match_players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.match_players.iter().filter(|mp| mp.was_active())
    }

    /// Drop entries for players who never played and have nothing scored.
    pub fn clear_inactive_players(&mut self) {
        self.match_players
            .retain(|mp| mp.was_active() || mp.points() != 0);
    }

    /// The sum of all players' tossups-heard values.
    pub fn total_tossups_heard(&self) -> u32 {
        self.match_players
            .iter()
            .map(|mp| mp.tossups_heard.unwrap_or(0))
            .sum()
    }

    pub fn total_buzzes(&self, positive_only: bool) -> u32 {
        self.match_players
            .iter()
            .map(|mp| mp.total_buzzes(positive_only))
            .sum()
    }

    /// Points scored on tossups across all players.
    pub fn tossup_points(&self) -> i32 {
        self.match_players.iter().map(|mp| mp.points()).sum()
    }

    /// Buzz totals by answer type across all players.
    pub fn answer_counts(&self) -> Vec<AnswerCount> {
        let mut totals: Vec<AnswerCount> = Vec::new();
        for mp in &self.match_players {
            for ac in &mp.answer_counts {
                match totals
                    .iter_mut()
                    .find(|t| t.answer_type.value == ac.answer_type.value)
                {
                    Some(t) => {
                        t.number = Some(t.number.unwrap_or(0) + ac.number.unwrap_or(0));
                    }
                    None => totals.push(AnswerCount {
                        answer_type: ac.answer_type.clone(),
                        number: Some(ac.number.unwrap_or(0)),
                    }),
                }
            }
        }
        sort_answer_counts(&mut totals);
        totals
    }

    /// Bonuses this team heard: positive buzzes, minus positive overtime
    /// buzzes unless the rules award bonuses in overtime.
    pub fn bonuses_heard(&self, rules: &ScoringRules) -> u32 {
        let total = self.total_buzzes(true);
        if rules.overtime_includes_bonuses {
            return total;
        }
        total.saturating_sub(self.num_overtime_buzzes(true))
    }

    /// Bonus points are everything not accounted for by tossups, bouncebacks,
    /// or lightning rounds. Can be negative; that's a validation error, not a
    /// value to clamp.
    pub fn bonus_points(&self) -> i32 {
        self.points.unwrap_or(0)
            - self.tossup_points()
            - self.bonus_bounceback_points.unwrap_or(0)
            - self.lightning_points.unwrap_or(0)
    }

    /// `None` when no bonuses were heard; renders as a dash, not an error.
    pub fn points_per_bonus(&self, rules: &ScoringRules) -> Option<f64> {
        let heard = self.bonuses_heard(rules);
        if heard == 0 {
            return None;
        }
        Some(f64::from(self.bonus_points()) / f64::from(heard))
    }

    /// (points, heard, ppb) formatted for display.
    pub fn bonus_stats(&self, rules: &ScoringRules) -> (String, String, String) {
        let ppb_str = match self.points_per_bonus(rules) {
            Some(ppb) => format!("{ppb:.2}"),
            None => "--".into(),
        };
        (
            self.bonus_points().to_string(),
            self.bonuses_heard(rules).to_string(),
            ppb_str,
        )
    }

    /// Total points minus points scored in overtime without bonuses; the
    /// numerator for points-per-game figures.
    pub fn points_for_ppg(&self, rules: &ScoringRules) -> i32 {
        if !rules.use_bonuses || rules.overtime_includes_bonuses {
            return self.points.unwrap_or(0);
        }
        self.points.unwrap_or(0) - self.overtime_points()
    }

    /// Tossups answered with no bonuses, i.e. answered in overtime.
    pub fn correct_tossups_without_bonuses(&self) -> u32 {
        self.overtime_buzzes
            .iter()
            .filter(|ac| ac.answer_type.value > 0)
            .map(|ac| ac.number.unwrap_or(0))
            .sum()
    }

    pub fn overtime_points(&self) -> i32 {
        self.overtime_buzzes.iter().map(|ac| ac.points()).sum()
    }

    pub fn num_overtime_buzzes(&self, positive_only: bool) -> u32 {
        self.overtime_buzzes
            .iter()
            .filter(|ac| !positive_only || ac.answer_type.value > 0)
            .map(|ac| ac.number.unwrap_or(0))
            .sum()
    }

    pub fn set_overtime_answer_count(&mut self, value: i32, count: Option<u32>) {
        if let Some(ac) = self
            .overtime_buzzes
            .iter_mut()
            .find(|ac| ac.answer_type.value == value)
        {
            ac.number = count;
        }
    }

    pub fn clear_overtime_buzzes(&mut self) {
        for ac in &mut self.overtime_buzzes {
            ac.number = None;
        }
    }

    pub fn sort_overtime_buzzes(&mut self) {
        sort_answer_counts(&mut self.overtime_buzzes);
    }

    /// Run every per-team check. `overtime_tossups_read` comes from the match.
    pub fn validate_all(&mut self, rules: &ScoringRules, overtime_tossups_read: u32) {
        self.validate_total_points();
        self.validate_answer_counts();
        if rules.use_bonuses {
            self.validate_bonus_points(rules);
        }
        self.validate_overtime_buzzes(overtime_tossups_read);
    }

    pub fn clear_validation(&mut self) {
        self.validation = MatchValidationCollection::default();
        for mp in &mut self.match_players {
            mp.validation = MatchValidationCollection::default();
        }
    }

    pub fn validate_total_points(&mut self) {
        let Some(points) = self.points else {
            // An empty field is required-but-unfilled, not actively wrong.
            self.validation.add_message(
                MatchValidationType::MissingTotalPoints,
                ValidationStatus::HiddenError,
                "Total score is required",
                false,
            );
            self.total_score_validation.set_ok();
            return;
        };
        self.validation
            .clear_type(MatchValidationType::MissingTotalPoints);

        if !(Self::MIN_VALID_SCORE..=Self::MAX_VALID_SCORE).contains(&points) {
            self.total_score_validation.set_error("Invalid number");
            return;
        }
        self.total_score_validation.set_ok();
    }

    pub fn validate_answer_counts(&mut self) {
        for mp in &mut self.match_players {
            mp.validate_answer_counts();
        }
    }

    pub fn validate_bonus_points(&mut self, rules: &ScoringRules) {
        if self.forfeit_loss {
            self.validation
                .clear_type(MatchValidationType::NegativeBonusPoints);
            self.validation
                .clear_type(MatchValidationType::BonusPointsTooHigh);
            self.validation
                .clear_type(MatchValidationType::BonusDivisorMismatch);
            return;
        }
        let bonus_points = self.bonus_points();
        let bonuses_heard = self.bonuses_heard(rules);
        let ppb = self.points_per_bonus(rules);
        let max_ppb = rules.maximum_bonus_score;

        if bonus_points < 0 {
            self.validation.add_message(
                MatchValidationType::NegativeBonusPoints,
                ValidationStatus::Error,
                "Bonus points cannot be negative",
                false,
            );
        } else {
            self.validation
                .clear_type(MatchValidationType::NegativeBonusPoints);
        }

        let too_high = (bonus_points > 0 && bonuses_heard == 0)
            || ppb.is_some_and(|p| p > f64::from(max_ppb));
        if too_high {
            let status = if bonuses_heard > 0 {
                ValidationStatus::Error
            } else {
                ValidationStatus::HiddenError
            };
            self.validation.add_message(
                MatchValidationType::BonusPointsTooHigh,
                status,
                format!("Points per bonus exceeds the maximum of {max_ppb}"),
                false,
            );
        } else {
            self.validation
                .clear_type(MatchValidationType::BonusPointsTooHigh);
        }

        let divisor_mismatch = rules.bonus_divisor != 0
            && bonus_points % rules.bonus_divisor != 0
            && bonuses_heard > 0
            && !too_high;
        if divisor_mismatch {
            self.validation.add_message(
                MatchValidationType::BonusDivisorMismatch,
                ValidationStatus::Warning,
                format!("Bonus points are not divisible by {}", rules.bonus_divisor),
                true,
            );
        } else {
            self.validation
                .clear_type(MatchValidationType::BonusDivisorMismatch);
        }
    }

    pub fn validate_overtime_buzzes(&mut self, overtime_tossups_read: u32) {
        let ot_buzzes = self.num_overtime_buzzes(false);
        if ot_buzzes > overtime_tossups_read {
            self.validation.add_message(
                MatchValidationType::InvalidOvertimeCount,
                ValidationStatus::Error,
                format!(
                    "{ot_buzzes} overtime buzzes recorded but only {overtime_tossups_read} overtime tossups read"
                ),
                false,
            );
        } else {
            self.validation
                .clear_type(MatchValidationType::InvalidOvertimeCount);
        }
    }

    /// All this team's messages, including the players'.
    pub fn error_messages(&self, ignore_hidden: bool) -> Vec<String> {
        let mut errs = Vec::new();
        if self.total_score_validation.status == ValidationStatus::Error {
            errs.push(format!("Score: {}", self.total_score_validation.message));
        }
        errs.extend(self.validation.error_messages(ignore_hidden));
        for mp in &self.match_players {
            errs.extend(mp.error_messages());
        }
        errs
    }
}

/// Outcome of a match from one side's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

/// A single match scheduled between two teams. Owned by exactly one round,
/// but may also count in other phases' standings via carryover.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Tossups read, including any read in overtime.
    pub tossups_read: Option<u32>,
    pub overtime_tossups_read: u32,
    /// Tiebreaker games count for win/loss display lists only, never stats.
    pub tiebreaker: bool,
    pub location: Option<String>,
    pub packets: Option<String>,
    pub moderator: Option<String>,
    pub scorekeeper: Option<String>,
    pub serial: Option<String>,
    pub notes: Option<String>,
    pub left_team: MatchTeam,
    pub right_team: MatchTeam,
    /// Names of phases (besides the owning one) whose standings count this match.
    pub carryover_phases: Vec<String>,
}

impl Match {
    pub fn new(id: MatchId, left_team: MatchTeam, right_team: MatchTeam) -> Self {
        Self {
            id,
            tossups_read: None,
            overtime_tossups_read: 0,
            tiebreaker: false,
            location: None,
            packets: None,
            moderator: None,
            scorekeeper: None,
            serial: None,
            notes: None,
            left_team,
            right_team,
            carryover_phases: Vec::new(),
        }
    }

    pub fn match_team(&self, side: Side) -> &MatchTeam {
        match side {
            Side::Left => &self.left_team,
            Side::Right => &self.right_team,
        }
    }

    pub fn match_team_mut(&mut self, side: Side) -> &mut MatchTeam {
        match side {
            Side::Left => &mut self.left_team,
            Side::Right => &mut self.right_team,
        }
    }

    pub fn opponent(&self, side: Side) -> &MatchTeam {
        self.match_team(side.opponent())
    }

    /// Which slot the given team occupies, if it's in this match.
    pub fn side_of_team(&self, team_id: TeamId) -> Option<Side> {
        if self.left_team.team_id == Some(team_id) {
            Some(Side::Left)
        } else if self.right_team.team_id == Some(team_id) {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn involves_player(&self, player_id: PlayerId) -> bool {
        self.left_team
            .match_players
            .iter()
            .chain(self.right_team.match_players.iter())
            .any(|mp| mp.player_id == player_id)
    }

    /// Forfeit matches have no meaningful box score.
    pub fn is_forfeit(&self) -> bool {
        self.left_team.forfeit_loss || self.right_team.forfeit_loss
    }

    /// A tie is a non-forfeit match with equal scores.
    pub fn is_tie(&self) -> bool {
        !self.is_forfeit()
            && self.left_team.points.is_some()
            && self.left_team.points == self.right_team.points
    }

    /// The winning side, if there is one. A double forfeit or a tie has none.
    pub fn winner(&self) -> Option<Side> {
        match (self.left_team.forfeit_loss, self.right_team.forfeit_loss) {
            (true, true) => return None,
            (true, false) => return Some(Side::Right),
            (false, true) => return Some(Side::Left),
            (false, false) => {}
        }
        let left = self.left_team.points?;
        let right = self.right_team.points?;
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Outcome for the given side, once both scores are in.
    pub fn result_for(&self, side: Side) -> Option<GameResult> {
        if self.is_forfeit() {
            return if self.match_team(side).forfeit_loss {
                Some(GameResult::Loss)
            } else {
                Some(GameResult::Win)
            };
        }
        if self.is_tie() {
            return Some(GameResult::Tie);
        }
        self.winner().map(|w| {
            if w == side {
                GameResult::Win
            } else {
                GameResult::Loss
            }
        })
    }

    /// "W" / "L" / "T", with a forfeit marker where applicable.
    pub fn result_display(&self, side: Side) -> String {
        let Some(result) = self.result_for(side) else {
            return String::new();
        };
        let letter = match result {
            GameResult::Win => "W",
            GameResult::Loss => "L",
            GameResult::Tie => "T",
        };
        if self.is_forfeit() {
            format!("{letter} (F)")
        } else {
            letter.to_string()
        }
    }

    /// "350-200", this side's score first. Forfeits have no score.
    pub fn score_only(&self, side: Side) -> String {
        if self.is_forfeit() {
            return "Forfeit".into();
        }
        let own = self.match_team(side).points.unwrap_or(0);
        let opp = self.opponent(side).points.unwrap_or(0);
        format!("{own}-{opp}")
    }

    /// Full score line with team names, left team first.
    pub fn score_string(&self, left_name: &str, right_name: &str) -> String {
        if self.is_forfeit() {
            let (winner, loser) = match self.winner() {
                Some(Side::Left) => (left_name, right_name),
                Some(Side::Right) => (right_name, left_name),
                None => return format!("{left_name} vs. {right_name}: double forfeit"),
            };
            return format!("{winner} defeats {loser} by forfeit");
        }
        let left = self.left_team.points.unwrap_or(0);
        let right = self.right_team.points.unwrap_or(0);
        format!("{left_name} {left}, {right_name} {right}")
    }

    /// Score line with the winner first, for tiebreaker and finals lists.
    pub fn winner_loser_string(&self, left_name: &str, right_name: &str) -> String {
        match self.winner() {
            Some(Side::Right) => self.score_string(right_name, left_name),
            _ => self.score_string(left_name, right_name),
        }
    }

    /// Bonus parts available to this side as bouncebacks: the opponent's
    /// missed parts. `None` when the opponent heard no bonuses.
    pub fn bounceback_parts_heard(&self, side: Side, rules: &ScoringRules) -> Option<f64> {
        if rules.bonus_divisor == 0 {
            return None;
        }
        let opp = self.opponent(side);
        let opp_heard = opp.bonuses_heard(rules);
        if opp_heard == 0 {
            return None;
        }
        let parts_available = f64::from(opp_heard) * f64::from(rules.parts_per_bonus());
        let parts_converted = f64::from(opp.bonus_points()) / f64::from(rules.bonus_divisor);
        Some(parts_available - parts_converted)
    }

    /// Share of available bounceback parts this side converted, as a percentage.
    pub fn bounceback_conv_pct(&self, side: Side, rules: &ScoringRules) -> Option<f64> {
        let parts_heard = self.bounceback_parts_heard(side, rules)?;
        if parts_heard <= 0.0 {
            return None;
        }
        let points = f64::from(self.match_team(side).bonus_bounceback_points.unwrap_or(0));
        Some(points / (parts_heard * f64::from(rules.bonus_divisor)) * 100.0)
    }

    /// (parts heard, conversion rate) formatted for display.
    pub fn bounceback_stats_string(&self, side: Side, rules: &ScoringRules) -> (String, String) {
        let heard = match self.bounceback_parts_heard(side, rules) {
            Some(h) => format!("{h:.0}"),
            None => "0".into(),
        };
        let rate = match self.bounceback_conv_pct(side, rules) {
            Some(r) => format!("{r:.0}"),
            None => "--".into(),
        };
        (heard, rate)
    }

    /// Run validation for both teams.
    pub fn validate_all(&mut self, rules: &ScoringRules) {
        let ot = self.overtime_tossups_read;
        self.left_team.validate_all(rules, ot);
        self.right_team.validate_all(rules, ot);
    }
}
