//! Calculator engine implementation.
//!
//! The engine is a two-operand running calculator: it holds the operand
//! being typed, the operand captured before an operator was chosen, and
//! the pending operator. It is not an expression parser.
//!
//! ## State Transitions
//!
//! ```text
//! Entry --operator--> Pending --digits--> Pending+Entry --=--> Result
//!   ^                                          |                 |
//!   +------------- operator (folds) -----------+                 |
//!   +------------------------- digits ---------------------------+
//! ```
//!
//! Any invalid operation shows `Error` and returns to the initial state.
//!
//! ## Usage
//!
//! ```
//! use apexcalc_core::calculator::{CalculatorEngine, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit('3');
//! engine.set_operator(Operator::Add);
//! engine.append_digit('4');
//! engine.evaluate();
//! assert_eq!(engine.display(), "7");
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::format::{parse_operand, Formatter, ERROR_DISPLAY};
use super::function::ScientificFunction;
use super::input::Input;
use super::operator::Operator;
use crate::error::{CalcError, InputError};
use crate::events::Event;

const INITIAL_OPERAND: &str = "0";

/// How long the history label stays visible after an error.
pub const DEFAULT_ERROR_HISTORY_LINGER: Duration = Duration::from_millis(2000);

/// Keypad layout. The engine accepts every input in both modes; the
/// presentation layer decides what the basic keypad offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Basic,
    #[default]
    Scientific,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Basic => f.write_str("basic"),
            Mode::Scientific => f.write_str("scientific"),
        }
    }
}

impl FromStr for Mode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Mode::Basic),
            "scientific" | "sci" => Ok(Mode::Scientific),
            _ => Err(InputError::UnknownMode(s.to_string())),
        }
    }
}

/// Tunables for a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub formatter: Formatter,
    pub error_history_linger: Duration,
    pub start_mode: Mode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            formatter: Formatter::default(),
            error_history_linger: DEFAULT_ERROR_HISTORY_LINGER,
            start_mode: Mode::default(),
        }
    }
}

/// Core calculator engine.
///
/// Every command returns `Some(Event)` when it changed the state and
/// `None` when it was a no-op.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    current_operand: String,
    /// Empty when no binary operation is pending.
    previous_operand: String,
    pending_operator: Option<Operator>,
    /// The next digit starts a new operand instead of extending this one.
    awaiting_fresh_input: bool,
    mode: Mode,
    history: Option<String>,
    /// Deadline (epoch ms) after which `history` reads as cleared.
    history_expires_epoch_ms: Option<u64>,
    /// Set by a failed operation; the display reads `Error` meanwhile.
    error: Option<CalcError>,
    settings: EngineSettings,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            current_operand: INITIAL_OPERAND.to_string(),
            previous_operand: String::new(),
            pending_operator: None,
            awaiting_fresh_input: false,
            mode: settings.start_mode,
            history: None,
            history_expires_epoch_ms: None,
            error: None,
            settings,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Text for the main display: `Error` after a failed operation,
    /// otherwise the current operand.
    pub fn display(&self) -> &str {
        if self.error.is_some() {
            ERROR_DISPLAY
        } else {
            &self.current_operand
        }
    }

    /// Trace of the last operation, e.g. `12 × 3 =`.
    pub fn history(&self) -> Option<&str> {
        self.history_at(now_ms())
    }

    /// History as seen at a given wall-clock time.
    pub fn history_at(&self, epoch_ms: u64) -> Option<&str> {
        match self.history_expires_epoch_ms {
            Some(deadline) if epoch_ms >= deadline => None,
            _ => self.history.as_deref(),
        }
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            display: self.display().to_string(),
            history: self.history().map(str::to_string),
            current_operand: self.current_operand.clone(),
            previous_operand: self.previous_operand.clone(),
            pending_operator: self.pending_operator,
            awaiting_fresh_input: self.awaiting_fresh_input,
            mode: self.mode,
            error: self.error,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Dispatch a single input to the matching command.
    pub fn apply(&mut self, input: Input) -> Option<Event> {
        match input {
            Input::Digit(c) => self.append_digit(c),
            Input::Operator(op) => self.set_operator(op),
            Input::Evaluate => self.evaluate(),
            Input::ClearAll => self.clear_all(),
            Input::ClearEntry => self.clear_entry(),
            Input::DeleteLast => self.delete_last(),
            Input::Function(func) => self.apply_function(func),
            Input::Mode(mode) => self.set_mode(mode),
        }
    }

    /// Append a digit or the decimal point to the current operand.
    ///
    /// A second decimal point is rejected. Characters other than `0-9`
    /// and `.` are ignored.
    pub fn append_digit(&mut self, digit: char) -> Option<Event> {
        if !(digit.is_ascii_digit() || digit == '.') {
            return None;
        }
        if self.awaiting_fresh_input {
            self.current_operand = INITIAL_OPERAND.to_string();
            self.awaiting_fresh_input = false;
        }

        if self.current_operand == INITIAL_OPERAND && digit != '.' {
            self.current_operand = digit.to_string();
        } else if digit == '.' && self.current_operand.contains('.') {
            return None;
        } else {
            self.current_operand.push(digit);
        }
        self.error = None;

        debug!(operand = %self.current_operand, "digit appended");
        Some(Event::DigitAppended {
            digit,
            operand: self.current_operand.clone(),
            at: Utc::now(),
        })
    }

    /// Remove the last character of the current operand.
    pub fn delete_last(&mut self) -> Option<Event> {
        let mut operand = std::mem::take(&mut self.current_operand);
        operand.pop();
        if operand.is_empty() || operand == "-" {
            operand = INITIAL_OPERAND.to_string();
        }
        self.current_operand = operand;
        self.error = None;

        debug!(operand = %self.current_operand, "digit deleted");
        Some(Event::DigitDeleted {
            operand: self.current_operand.clone(),
            at: Utc::now(),
        })
    }

    /// Choose a binary operator.
    ///
    /// When an operation is already pending and a second operand has been
    /// typed since, it is folded first, so `3 + 4 + 5 =` computes
    /// left to right. A failed fold resets the engine and reports the
    /// error; the new operator still applies to the reset operand `0`
    /// while the display keeps showing `Error`.
    pub fn set_operator(&mut self, op: Operator) -> Option<Event> {
        let mut folded = None;
        let mut failure = None;
        if !self.previous_operand.is_empty() && !self.awaiting_fresh_input {
            match self.fold_pending() {
                Ok(Some(result)) => folded = Some(result),
                Ok(None) => {}
                Err(err) => failure = Some(self.fail(err)),
            }
        }

        self.previous_operand = self.current_operand.clone();
        self.pending_operator = Some(op);
        self.awaiting_fresh_input = true;
        self.set_history(format!("{} {}", self.previous_operand, op.symbol()));
        if failure.is_some() {
            return failure;
        }
        self.error = None;

        debug!(previous = %self.previous_operand, operator = %op, "operator set");
        Some(Event::OperatorSet {
            operator: op,
            previous: self.previous_operand.clone(),
            folded,
            at: Utc::now(),
        })
    }

    /// Apply the pending operator to the previous and current operands.
    ///
    /// No-op when nothing is pending.
    pub fn evaluate(&mut self) -> Option<Event> {
        let (previous, op, operand) = (
            self.previous_operand.clone(),
            self.pending_operator?,
            self.current_operand.clone(),
        );
        match self.fold_pending() {
            Ok(Some(result)) => Some(Event::Evaluated {
                previous,
                operator: op,
                operand,
                result,
                at: Utc::now(),
            }),
            Ok(None) => None,
            Err(err) => Some(self.fail(err)),
        }
    }

    /// Apply a unary scientific function to the current operand.
    ///
    /// A pending binary operation is left untouched.
    pub fn apply_function(&mut self, func: ScientificFunction) -> Option<Event> {
        let operand = self.current_operand.clone();
        let value = parse_operand(&operand);

        match func.apply(value) {
            Ok(value) => {
                let result = self.settings.formatter.format(value);
                self.set_history(format!("{}({}) =", func.name(), operand));
                self.current_operand = result.clone();
                self.awaiting_fresh_input = true;
                self.error = None;

                debug!(function = %func, %operand, %result, "function applied");
                Some(Event::FunctionApplied {
                    function: func,
                    operand,
                    result,
                    at: Utc::now(),
                })
            }
            Err(err) => Some(self.fail(err)),
        }
    }

    /// Return to the initial state.
    pub fn clear_all(&mut self) -> Option<Event> {
        self.reset_operands();
        self.history = None;
        self.history_expires_epoch_ms = None;
        self.error = None;

        debug!("cleared");
        Some(Event::Cleared { at: Utc::now() })
    }

    /// Reset only the current operand; a pending operation survives.
    pub fn clear_entry(&mut self) -> Option<Event> {
        self.current_operand = INITIAL_OPERAND.to_string();
        self.awaiting_fresh_input = false;
        self.error = None;

        debug!("entry cleared");
        Some(Event::EntryCleared { at: Utc::now() })
    }

    pub fn set_mode(&mut self, mode: Mode) -> Option<Event> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        debug!(%mode, "mode changed");
        Some(Event::ModeChanged {
            mode,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Compute the pending operation and commit its result.
    ///
    /// Returns the formatted result, or `None` when nothing is pending.
    fn fold_pending(&mut self) -> Result<Option<String>, CalcError> {
        let op = match self.pending_operator {
            Some(op) if !self.previous_operand.is_empty() => op,
            _ => return Ok(None),
        };
        let lhs = parse_operand(&self.previous_operand);
        let rhs = parse_operand(&self.current_operand);
        let value = op.apply(lhs, rhs)?;
        let result = self.settings.formatter.format(value);

        self.set_history(format!(
            "{} {} {} =",
            self.previous_operand,
            op.symbol(),
            self.current_operand
        ));
        debug!(
            previous = %self.previous_operand,
            operator = %op,
            operand = %self.current_operand,
            %result,
            "evaluated"
        );

        self.current_operand = result.clone();
        self.previous_operand.clear();
        self.pending_operator = None;
        self.awaiting_fresh_input = true;
        self.error = None;
        Ok(Some(result))
    }

    /// Record an invalid operation: show `Error` and reset everything.
    ///
    /// The history label stays visible until the linger deadline.
    fn fail(&mut self, err: CalcError) -> Event {
        info!(error = %err, operand = %self.current_operand, "invalid operation");

        self.reset_operands();
        self.error = Some(err);
        if self.settings.error_history_linger.is_zero() {
            self.history = None;
            self.history_expires_epoch_ms = None;
        } else if self.history.is_some() {
            let linger = self.settings.error_history_linger.as_millis() as u64;
            self.history_expires_epoch_ms = Some(now_ms().saturating_add(linger));
        }

        Event::InvalidOperation {
            error: err,
            at: Utc::now(),
        }
    }

    fn reset_operands(&mut self) {
        self.current_operand = INITIAL_OPERAND.to_string();
        self.previous_operand.clear();
        self.pending_operator = None;
        self.awaiting_fresh_input = false;
    }

    fn set_history(&mut self, label: String) {
        self.history = Some(label);
        self.history_expires_epoch_ms = None;
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::format::Formatter;
    use proptest::prelude::*;

    fn engine_with(current: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        for c in current.chars() {
            engine.append_digit(c);
        }
        engine
    }

    fn press(engine: &mut CalculatorEngine, keys: &str) {
        for input in crate::calculator::tokenize(keys).unwrap() {
            engine.apply(input);
        }
    }

    #[test]
    fn initial_state() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.previous_operand(), "");
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_fresh_input());
        assert_eq!(engine.history(), None);
        assert_eq!(engine.mode(), Mode::Scientific);
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut engine = CalculatorEngine::new();
        engine.append_digit('0');
        assert_eq!(engine.current_operand(), "0");
        engine.append_digit('7');
        assert_eq!(engine.current_operand(), "7");
    }

    #[test]
    fn decimal_point_after_zero_is_kept() {
        let mut engine = CalculatorEngine::new();
        engine.append_digit('.');
        engine.append_digit('5');
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn duplicate_decimal_rejected() {
        let mut engine = engine_with("3.1");
        assert!(engine.append_digit('.').is_none());
        engine.append_digit('4');
        assert_eq!(engine.current_operand(), "3.14");
    }

    #[test]
    fn non_digit_characters_are_ignored() {
        let mut engine = engine_with("12");
        assert!(engine.append_digit('x').is_none());
        assert_eq!(engine.current_operand(), "12");
    }

    #[test]
    fn fresh_input_replaces_result() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+3=");
        assert_eq!(engine.display(), "5");
        assert!(engine.awaiting_fresh_input());
        engine.append_digit('9');
        assert_eq!(engine.display(), "9");
    }

    #[test]
    fn chained_operators_fold_left_to_right() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "3+4+5=");
        assert_eq!(engine.display(), "12");

        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+3*4=");
        assert_eq!(engine.display(), "20");
    }

    #[test]
    fn fold_reports_intermediate_result() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "3+4");
        match engine.set_operator(Operator::Add) {
            Some(Event::OperatorSet { folded, previous, .. }) => {
                assert_eq!(folded.as_deref(), Some("7"));
                assert_eq!(previous, "7");
            }
            other => panic!("Expected OperatorSet, got {other:?}"),
        }
        assert_eq!(engine.history(), Some("7 +"));
    }

    #[test]
    fn repeated_operator_replaces_pending() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "8+-2=");
        assert_eq!(engine.display(), "6");
    }

    #[test]
    fn history_labels() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "12*");
        assert_eq!(engine.history(), Some("12 ×"));
        press(&mut engine, "3=");
        assert_eq!(engine.history(), Some("12 × 3 ="));
        press(&mut engine, "sqrt");
        assert_eq!(engine.history(), Some("sqrt(36) ="));
        assert_eq!(engine.display(), "6");
    }

    #[test]
    fn evaluate_without_pending_is_noop() {
        let mut engine = engine_with("42");
        assert!(engine.evaluate().is_none());
        assert_eq!(engine.display(), "42");
        assert!(!engine.awaiting_fresh_input());
    }

    #[test]
    fn division_by_zero_resets() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "10/0");
        let event = engine.evaluate();
        assert!(matches!(
            event,
            Some(Event::InvalidOperation {
                error: CalcError::DivisionByZero,
                ..
            })
        ));
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.previous_operand(), "");
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.current_operand(), "0");
    }

    #[test]
    fn failed_fold_keeps_new_operator() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5/0");
        let event = engine.set_operator(Operator::Add);
        assert!(matches!(
            event,
            Some(Event::InvalidOperation {
                error: CalcError::DivisionByZero,
                ..
            })
        ));
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.error(), Some(CalcError::DivisionByZero));
        assert_eq!(engine.previous_operand(), "0");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert!(engine.awaiting_fresh_input());
        assert_eq!(engine.history(), Some("0 +"));

        press(&mut engine, "3=");
        assert_eq!(engine.display(), "3");
        assert_eq!(engine.error(), None);
    }

    #[test]
    fn input_after_error_starts_fresh() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1/0=");
        assert_eq!(engine.display(), "Error");
        engine.append_digit('4');
        assert_eq!(engine.display(), "4");
        assert_eq!(engine.error(), None);
    }

    #[test]
    fn noop_evaluate_keeps_error_display() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1/0=");
        assert!(engine.evaluate().is_none());
        assert_eq!(engine.display(), "Error");
    }

    #[test]
    fn modulo_follows_dividend_sign() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "7-10=");
        assert_eq!(engine.display(), "-3");
        press(&mut engine, "%2=");
        assert_eq!(engine.display(), "-1");
    }

    #[test]
    fn power_operator() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2^10=");
        assert_eq!(engine.display(), "1024");
    }

    #[test]
    fn overflow_is_an_error() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "10^400=");
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.error(), Some(CalcError::NonFiniteResult));
    }

    #[test]
    fn factorial_results() {
        let mut engine = engine_with("5");
        engine.apply_function(ScientificFunction::Factorial);
        assert_eq!(engine.display(), "120");

        let mut engine = engine_with("5.5");
        engine.apply_function(ScientificFunction::Factorial);
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.error(), Some(CalcError::InvalidFactorial));
    }

    #[test]
    fn sqrt_of_negative_is_error() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "0-1=");
        assert_eq!(engine.current_operand(), "-1");
        engine.apply_function(ScientificFunction::Sqrt);
        assert_eq!(engine.display(), "Error");
    }

    #[test]
    fn function_error_clears_pending_operation() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "7+0");
        engine.apply_function(ScientificFunction::Reciprocal);
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.previous_operand(), "");
    }

    #[test]
    fn function_keeps_pending_operation() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2+9 sqrt =");
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn constants_replace_operand() {
        let mut engine = engine_with("99");
        engine.apply_function(ScientificFunction::Pi);
        assert_eq!(engine.display(), "3.14159265");
        assert_eq!(engine.history(), Some("pi(99) ="));
    }

    #[test]
    fn delete_last_behaviour() {
        let mut engine = engine_with("7");
        engine.delete_last();
        assert_eq!(engine.current_operand(), "0");

        let mut engine = engine_with("42");
        engine.delete_last();
        assert_eq!(engine.current_operand(), "4");
    }

    #[test]
    fn delete_last_on_negative_result() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "0-5=");
        assert_eq!(engine.current_operand(), "-5");
        engine.delete_last();
        assert_eq!(engine.current_operand(), "0");
    }

    #[test]
    fn clear_entry_keeps_pending_operation() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "9+5");
        engine.clear_entry();
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert_eq!(engine.previous_operand(), "9");
        assert_eq!(engine.current_operand(), "0");
        press(&mut engine, "3=");
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn clear_entry_right_after_operator() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "6");
        engine.set_operator(Operator::Add);
        engine.clear_entry();
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert_eq!(engine.previous_operand(), "6");
        assert_eq!(engine.current_operand(), "0");
        assert!(!engine.awaiting_fresh_input());
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "12*3");
        engine.clear_all();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.previous_operand(), "");
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_fresh_input());
        assert_eq!(engine.history(), None);
    }

    #[test]
    fn error_history_lingers_until_deadline() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "10/");
        let before = now_ms();
        press(&mut engine, "0=");
        assert_eq!(engine.history_at(before), Some("10 ÷"));
        assert_eq!(engine.history_at(before + 10_000), None);
    }

    #[test]
    fn zero_linger_clears_history_immediately() {
        let settings = EngineSettings {
            error_history_linger: Duration::ZERO,
            ..EngineSettings::default()
        };
        let mut engine = CalculatorEngine::with_settings(settings);
        press(&mut engine, "10/0=");
        assert_eq!(engine.history(), None);
    }

    #[test]
    fn new_label_cancels_history_deadline() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "10/0=");
        press(&mut engine, "4+");
        assert_eq!(engine.history_at(now_ms() + 10_000), Some("4 +"));
    }

    #[test]
    fn custom_precision_applies_to_results() {
        let settings = EngineSettings {
            formatter: Formatter::new(3),
            ..EngineSettings::default()
        };
        let mut engine = CalculatorEngine::with_settings(settings);
        press(&mut engine, "1/3=");
        assert_eq!(engine.display(), "0.333");
    }

    #[test]
    fn mode_changes_once() {
        let mut engine = CalculatorEngine::new();
        assert!(engine.set_mode(Mode::Basic).is_some());
        assert!(engine.set_mode(Mode::Basic).is_none());
        assert_eq!(engine.mode(), Mode::Basic);
        assert_eq!("SCI".parse::<Mode>(), Ok(Mode::Scientific));
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "4*");
        match engine.snapshot() {
            Event::StateSnapshot {
                display,
                previous_operand,
                pending_operator,
                awaiting_fresh_input,
                ..
            } => {
                assert_eq!(display, "4");
                assert_eq!(previous_operand, "4");
                assert_eq!(pending_operator, Some(Operator::Multiply));
                assert!(awaiting_fresh_input);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    proptest! {
        #[test]
        fn typed_operands_stay_valid(keys in "[0-9.]{1,24}") {
            let engine = engine_with(&keys);
            let operand = engine.current_operand();
            prop_assert!(operand.matches('.').count() <= 1);
            let value = parse_operand(operand);
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }

        #[test]
        fn pending_operator_iff_previous_operand(keys in "[0-9+*/=.%^-]{0,32}") {
            let mut engine = CalculatorEngine::new();
            for input in crate::calculator::tokenize(&keys).unwrap() {
                engine.apply(input);
                prop_assert_eq!(
                    engine.pending_operator().is_some(),
                    !engine.previous_operand().is_empty()
                );
                prop_assert!(engine.current_operand() != "Error");
            }
        }
    }
}
