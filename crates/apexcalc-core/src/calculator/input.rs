//! Mapping from keys and button tokens to engine inputs.
//!
//! Two vocabularies exist. Keyboard keys follow the browser key names
//! (`Enter`, `Escape`, `Backspace`) and cover only the basic keypad.
//! Button tokens are a superset used by the REPL and `eval`: clear
//! buttons (`AC`, `CE`, `DEL`), operator glyphs, function names and the
//! mode toggle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine::Mode;
use super::function::ScientificFunction;
use super::operator::Operator;
use crate::error::InputError;

/// One discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "snake_case")]
pub enum Input {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Evaluate,
    ClearAll,
    ClearEntry,
    DeleteLast,
    Function(ScientificFunction),
    Mode(Mode),
}

impl Input {
    /// Map a keyboard key name to an input.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Input::Evaluate),
            "Escape" | "c" | "C" => Some(Input::ClearAll),
            "Backspace" => Some(Input::DeleteLast),
            "+" => Some(Input::Operator(Operator::Add)),
            "-" => Some(Input::Operator(Operator::Subtract)),
            "*" => Some(Input::Operator(Operator::Multiply)),
            "/" => Some(Input::Operator(Operator::Divide)),
            "%" => Some(Input::Operator(Operator::Modulo)),
            _ => single_char(key).filter(|c| is_digit_token(*c)).map(Input::Digit),
        }
    }

    /// Like [`Input::from_key`], for callers that report unbound keys.
    pub fn parse_key(key: &str) -> Result<Self, InputError> {
        Self::from_key(key).ok_or_else(|| InputError::UnknownKey(key.to_string()))
    }

    /// True for inputs that only make sense with the scientific keypad.
    pub fn is_scientific(&self) -> bool {
        matches!(self, Input::Function(_) | Input::Operator(Operator::Power))
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(c) = single_char(token).filter(|c| is_digit_token(*c)) {
            return Ok(Input::Digit(c));
        }

        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "=" | "enter" => return Ok(Input::Evaluate),
            "ac" | "c" | "clear" | "esc" | "escape" => return Ok(Input::ClearAll),
            "ce" => return Ok(Input::ClearEntry),
            "del" | "backspace" | "\u{232b}" => return Ok(Input::DeleteLast),
            "!" => return Ok(Input::Function(ScientificFunction::Factorial)),
            _ => {}
        }

        if let Some(mode) = lower.strip_prefix("mode:") {
            return mode.parse::<Mode>().map(Input::Mode);
        }
        if let Ok(op) = token.parse::<Operator>() {
            return Ok(Input::Operator(op));
        }
        token
            .parse::<ScientificFunction>()
            .map(Input::Function)
            .map_err(|_| InputError::UnknownToken(token.to_string()))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Digit(c) => write!(f, "{c}"),
            Input::Operator(op) => write!(f, "{}", op.token()),
            Input::Evaluate => f.write_str("="),
            Input::ClearAll => f.write_str("AC"),
            Input::ClearEntry => f.write_str("CE"),
            Input::DeleteLast => f.write_str("DEL"),
            Input::Function(func) => write!(f, "{func}"),
            Input::Mode(mode) => write!(f, "mode:{mode}"),
        }
    }
}

/// Split a line of button tokens into inputs.
///
/// Digits and operators need no separators (`12.5*3=`). Words such as
/// function names and clear buttons run until the next non-word
/// character, so `sqrt` and `AC` must be separated from digits that
/// follow them only when ambiguous.
pub fn tokenize(line: &str) -> Result<Vec<Input>, InputError> {
    let mut inputs = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if rest.starts_with("1/x") {
            inputs.push(Input::Function(ScientificFunction::Reciprocal));
            rest = &rest[3..];
            continue;
        }
        if rest.starts_with("**") {
            inputs.push(Input::Operator(Operator::Power));
            rest = &rest[2..];
            continue;
        }
        if is_digit_token(c) {
            inputs.push(Input::Digit(c));
            rest = &rest[1..];
            continue;
        }
        if c.is_alphabetic() {
            let end = rest
                .char_indices()
                .find(|&(_, ch)| !is_word_char(ch))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            inputs.push(rest[..end].parse()?);
            rest = &rest[end..];
            continue;
        }

        let token = &rest[..c.len_utf8()];
        inputs.push(token.parse()?);
        rest = &rest[c.len_utf8()..];
    }

    Ok(inputs)
}

fn is_digit_token(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == ':' || c == '_'
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
