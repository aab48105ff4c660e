//! Scoring rules: answer value tiers, bonus settings, and common rule sets.

use serde::{Deserialize, Serialize};

/// One configured scoring tier for tossups (e.g. power, get, neg).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnswerType {
    /// Point value of one buzz of this type. Negative for negs.
    pub value: i32,
    pub label: String,
    /// Abbreviation used in report column headers.
    pub short_label: String,
}

impl AnswerType {
    pub fn new(value: i32, label: impl Into<String>, short_label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            short_label: short_label.into(),
        }
    }

    pub fn is_neg(&self) -> bool {
        self.value < 0
    }
}

/// Well-known formats that can pre-populate a [`ScoringRules`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonRuleSet {
    Acf,
    NaqtTimed,
    NaqtUntimed,
    Pace,
}

/// Tournament-wide scoring configuration. The answer-type set is ordered by
/// value, descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub name: String,
    pub answer_types: Vec<AnswerType>,
    /// Tossups read in a standard (non-overtime) game.
    pub regulation_tossup_count: u32,
    pub use_bonuses: bool,
    /// Can the opposing team earn points on missed bonus parts?
    pub bonuses_bounce_back: bool,
    /// Do tossups answered in overtime come with bonuses?
    pub overtime_includes_bonuses: bool,
    /// Most points available on one bonus.
    pub maximum_bonus_score: i32,
    /// Value of one bonus part; bonus totals should be divisible by this.
    pub bonus_divisor: i32,
    pub use_lightning_rounds: bool,
}

impl ScoringRules {
    pub fn new(rule_set: CommonRuleSet) -> Self {
        match rule_set {
            CommonRuleSet::Acf => Self {
                name: "ACF".into(),
                answer_types: vec![
                    AnswerType::new(10, "Ten", "10"),
                    AnswerType::new(-5, "Neg", "-5"),
                ],
                regulation_tossup_count: 20,
                use_bonuses: true,
                bonuses_bounce_back: false,
                overtime_includes_bonuses: false,
                maximum_bonus_score: 30,
                bonus_divisor: 10,
                use_lightning_rounds: false,
            },
            CommonRuleSet::NaqtTimed => Self {
                name: "NAQT (timed)".into(),
                regulation_tossup_count: 24,
                ..Self::new(CommonRuleSet::NaqtUntimed)
            },
            CommonRuleSet::NaqtUntimed => Self {
                name: "NAQT (untimed)".into(),
                answer_types: vec![
                    AnswerType::new(15, "Power", "15"),
                    AnswerType::new(10, "Ten", "10"),
                    AnswerType::new(-5, "Neg", "-5"),
                ],
                regulation_tossup_count: 20,
                use_bonuses: true,
                bonuses_bounce_back: false,
                overtime_includes_bonuses: false,
                maximum_bonus_score: 30,
                bonus_divisor: 10,
                use_lightning_rounds: false,
            },
            CommonRuleSet::Pace => Self {
                name: "PACE NSC".into(),
                answer_types: vec![
                    AnswerType::new(20, "Power", "20"),
                    AnswerType::new(10, "Ten", "10"),
                ],
                regulation_tossup_count: 20,
                use_bonuses: true,
                bonuses_bounce_back: true,
                overtime_includes_bonuses: false,
                maximum_bonus_score: 30,
                bonus_divisor: 10,
                use_lightning_rounds: false,
            },
        }
    }

    /// More than one positive answer value means the highest values are powers.
    pub fn has_powers(&self) -> bool {
        self.answer_types.iter().filter(|a| a.value > 0).count() > 1
    }

    pub fn has_negs(&self) -> bool {
        self.answer_types.iter().any(|a| a.is_neg())
    }

    /// The answer value counted as a power, if this format has powers.
    pub fn power_value(&self) -> Option<i32> {
        if !self.has_powers() {
            return None;
        }
        self.answer_types.iter().map(|a| a.value).max()
    }

    /// How many parts each bonus has, assuming all parts are worth the divisor.
    pub fn parts_per_bonus(&self) -> i32 {
        if self.bonus_divisor == 0 {
            return 0;
        }
        self.maximum_bonus_score / self.bonus_divisor
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(CommonRuleSet::NaqtUntimed)
    }
}
