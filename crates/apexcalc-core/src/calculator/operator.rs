use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, InputError};

/// A binary operator waiting for its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
    #[serde(rename = "%")]
    Modulo,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
        Operator::Modulo,
    ];

    /// ASCII token used on the keyboard and in serialized state.
    pub fn token(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::Modulo => '%',
        }
    }

    /// Glyph shown in the history label.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{d7}",
            Operator::Divide => "\u{f7}",
            Operator::Power => "^",
            Operator::Modulo => "%",
        }
    }

    pub fn from_token(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '\u{2212}' => Some(Operator::Subtract),
            '*' | '\u{d7}' => Some(Operator::Multiply),
            '/' | '\u{f7}' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            '%' => Some(Operator::Modulo),
            _ => None,
        }
    }

    /// Apply the operator to two parsed operands.
    ///
    /// `%` is the truncating remainder: the sign of the result follows the
    /// dividend, so `-7 % 3 == -1`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
            Operator::Power => lhs.powf(rhs),
            Operator::Modulo => lhs % rhs,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "**" => Ok(Operator::Power),
            "mod" => Ok(Operator::Modulo),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        Operator::from_token(c).ok_or_else(|| InputError::UnknownToken(s.into()))
                    }
                    _ => Err(InputError::UnknownToken(s.into())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_table() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Power.symbol(), "^");
        assert_eq!(Operator::Modulo.symbol(), "%");
    }

    #[test]
    fn tokens_and_glyphs_parse() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
        assert_eq!("**".parse::<Operator>(), Ok(Operator::Power));
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn division_by_exact_zero_fails() {
        assert_eq!(Operator::Divide.apply(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(10.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn modulo_sign_follows_dividend() {
        assert_eq!(Operator::Modulo.apply(-7.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Modulo.apply(7.0, -3.0), Ok(1.0));
        assert_eq!(Operator::Modulo.apply(5.5, 2.0), Ok(1.5));
    }

    #[test]
    fn modulo_by_zero_is_non_finite() {
        assert_eq!(Operator::Modulo.apply(5.0, 0.0), Err(CalcError::NonFiniteResult));
    }

    #[test]
    fn power_overflow_is_non_finite() {
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operator::Power.apply(10.0, 400.0), Err(CalcError::NonFiniteResult));
        assert_eq!(Operator::Power.apply(-8.0, 0.5), Err(CalcError::NonFiniteResult));
    }
}
