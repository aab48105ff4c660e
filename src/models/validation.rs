//! Validation messages attached to match data entry.
//!
//! Validation never rejects data: each check records a tagged message on the
//! match team or player it applies to, and callers collect the messages for
//! display. The numbers stay as entered.

use serde::{Deserialize, Serialize};

/// Severity of a validation message.
///
/// `HiddenError` means "invalid only because the field is still empty" --
/// the match can't be considered complete, but the message shouldn't be
/// shown as an active mistake.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    #[default]
    Ok,
    Error,
    Warning,
    HiddenError,
}

/// What a validation message is about. One message of each type at most,
/// per collection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchValidationType {
    MissingTotalPoints,
    InvalidTeamScore,
    NegativeBonusPoints,
    BonusPointsTooHigh,
    BonusDivisorMismatch,
    BuzzesExceedTossupsHeard,
    InvalidAnswerCount,
    InvalidOvertimeCount,
}

/// One tagged validation message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchValidationMessage {
    pub msg_type: MatchValidationType,
    pub status: ValidationStatus,
    pub message: String,
    /// Warnings the user may dismiss keep their suppressed state across edits.
    pub suppressable: bool,
    pub suppressed: bool,
}

impl MatchValidationMessage {
    pub fn new(msg_type: MatchValidationType) -> Self {
        Self {
            msg_type,
            status: ValidationStatus::Ok,
            message: String::new(),
            suppressable: false,
            suppressed: false,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = ValidationStatus::Error;
        self.message = message.into();
    }

    pub fn set_ok(&mut self) {
        self.status = ValidationStatus::Ok;
        self.message.clear();
    }
}

/// A set of validation messages, at most one per message type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchValidationCollection {
    pub messages: Vec<MatchValidationMessage>,
}

impl MatchValidationCollection {
    /// Add a message, replacing any existing message of the same type.
    /// A replaced suppressable message keeps its suppressed state.
    pub fn add_message(
        &mut self,
        msg_type: MatchValidationType,
        status: ValidationStatus,
        message: impl Into<String>,
        suppressable: bool,
    ) {
        let was_suppressed = self
            .messages
            .iter()
            .find(|m| m.msg_type == msg_type)
            .map(|m| m.suppressed)
            .unwrap_or(false);
        self.clear_type(msg_type);
        self.messages.push(MatchValidationMessage {
            msg_type,
            status,
            message: message.into(),
            suppressable,
            suppressed: suppressable && was_suppressed,
        });
    }

    pub fn clear_type(&mut self, msg_type: MatchValidationType) {
        self.messages.retain(|m| m.msg_type != msg_type);
    }

    /// Dismiss the message of the given type, if it allows that.
    pub fn suppress_type(&mut self, msg_type: MatchValidationType) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.msg_type == msg_type) {
            if msg.suppressable {
                msg.suppressed = true;
            }
        }
    }

    /// Human-readable messages for display. Suppressed warnings are skipped;
    /// hidden errors are skipped when `ignore_hidden` is set.
    pub fn error_messages(&self, ignore_hidden: bool) -> Vec<String> {
        let mut errs = Vec::new();
        for msg in &self.messages {
            match msg.status {
                ValidationStatus::Ok => {}
                ValidationStatus::Error => errs.push(msg.message.clone()),
                ValidationStatus::HiddenError => {
                    if !ignore_hidden {
                        errs.push(msg.message.clone());
                    }
                }
                ValidationStatus::Warning => {
                    if !msg.suppressed {
                        errs.push(msg.message.clone());
                    }
                }
            }
        }
        errs
    }

    /// Any message that should block treating the match as fully entered.
    pub fn any_errors(&self) -> bool {
        self.messages.iter().any(|m| {
            m.status == ValidationStatus::Error || m.status == ValidationStatus::HiddenError
        })
    }
}
