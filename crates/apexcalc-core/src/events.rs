use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::{Mode, Operator, ScientificFunction};
use crate::error::CalcError;

/// Every state change in the engine produces an Event.
/// The presentation layer renders them; `--events` streams them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    DigitAppended {
        digit: char,
        operand: String,
        at: DateTime<Utc>,
    },
    DigitDeleted {
        operand: String,
        at: DateTime<Utc>,
    },
    OperatorSet {
        operator: Operator,
        previous: String,
        /// Result of folding the previously pending operation, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        folded: Option<String>,
        at: DateTime<Utc>,
    },
    Evaluated {
        previous: String,
        operator: Operator,
        operand: String,
        result: String,
        at: DateTime<Utc>,
    },
    FunctionApplied {
        function: ScientificFunction,
        operand: String,
        result: String,
        at: DateTime<Utc>,
    },
    Cleared {
        at: DateTime<Utc>,
    },
    EntryCleared {
        at: DateTime<Utc>,
    },
    ModeChanged {
        mode: Mode,
        at: DateTime<Utc>,
    },
    /// The operation failed; the display shows `Error` and state was reset.
    InvalidOperation {
        error: CalcError,
        at: DateTime<Utc>,
    },
    /// Full state snapshot (response to status queries).
    StateSnapshot {
        display: String,
        history: Option<String>,
        current_operand: String,
        previous_operand: String,
        pending_operator: Option<Operator>,
        awaiting_fresh_input: bool,
        mode: Mode,
        error: Option<CalcError>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Event name as it appears in the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::DigitAppended { .. } => "digit_appended",
            Event::DigitDeleted { .. } => "digit_deleted",
            Event::OperatorSet { .. } => "operator_set",
            Event::Evaluated { .. } => "evaluated",
            Event::FunctionApplied { .. } => "function_applied",
            Event::Cleared { .. } => "cleared",
            Event::EntryCleared { .. } => "entry_cleared",
            Event::ModeChanged { .. } => "mode_changed",
            Event::InvalidOperation { .. } => "invalid_operation",
            Event::StateSnapshot { .. } => "state_snapshot",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Event::InvalidOperation { .. })
    }
}
