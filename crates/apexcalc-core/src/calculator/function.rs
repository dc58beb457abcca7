use std::f64::consts;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, InputError};

/// Largest n for which n! fits in an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Unary functions from the scientific keypad.
///
/// Trigonometric functions take and return degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Exp,
    Pow10,
    Factorial,
    Pi,
    E,
    Abs,
    #[serde(rename = "1/x")]
    Reciprocal,
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 16] = [
        ScientificFunction::Sin,
        ScientificFunction::Cos,
        ScientificFunction::Tan,
        ScientificFunction::Asin,
        ScientificFunction::Acos,
        ScientificFunction::Atan,
        ScientificFunction::Log,
        ScientificFunction::Ln,
        ScientificFunction::Sqrt,
        ScientificFunction::Exp,
        ScientificFunction::Pow10,
        ScientificFunction::Factorial,
        ScientificFunction::Pi,
        ScientificFunction::E,
        ScientificFunction::Abs,
        ScientificFunction::Reciprocal,
    ];

    /// Name used on the button and in the history label.
    pub fn name(self) -> &'static str {
        match self {
            ScientificFunction::Sin => "sin",
            ScientificFunction::Cos => "cos",
            ScientificFunction::Tan => "tan",
            ScientificFunction::Asin => "asin",
            ScientificFunction::Acos => "acos",
            ScientificFunction::Atan => "atan",
            ScientificFunction::Log => "log",
            ScientificFunction::Ln => "ln",
            ScientificFunction::Sqrt => "sqrt",
            ScientificFunction::Exp => "exp",
            ScientificFunction::Pow10 => "pow10",
            ScientificFunction::Factorial => "factorial",
            ScientificFunction::Pi => "pi",
            ScientificFunction::E => "e",
            ScientificFunction::Abs => "abs",
            ScientificFunction::Reciprocal => "1/x",
        }
    }

    /// Evaluate the function, checking its domain first.
    pub fn apply(self, value: f64) -> Result<f64, CalcError> {
        let result = match self {
            ScientificFunction::Sin => value.to_radians().sin(),
            ScientificFunction::Cos => value.to_radians().cos(),
            ScientificFunction::Tan => value.to_radians().tan(),
            ScientificFunction::Asin => value.asin().to_degrees(),
            ScientificFunction::Acos => value.acos().to_degrees(),
            ScientificFunction::Atan => value.atan().to_degrees(),
            ScientificFunction::Log => {
                if value <= 0.0 {
                    return Err(CalcError::LogOfNonPositive);
                }
                value.log10()
            }
            ScientificFunction::Ln => {
                if value <= 0.0 {
                    return Err(CalcError::LogOfNonPositive);
                }
                value.ln()
            }
            ScientificFunction::Sqrt => {
                if value < 0.0 {
                    return Err(CalcError::SqrtOfNegative);
                }
                value.sqrt()
            }
            ScientificFunction::Exp => value.exp(),
            ScientificFunction::Pow10 => 10f64.powf(value),
            ScientificFunction::Factorial => factorial(value)?,
            ScientificFunction::Pi => consts::PI,
            ScientificFunction::E => consts::E,
            ScientificFunction::Abs => value.abs(),
            ScientificFunction::Reciprocal => {
                if value == 0.0 {
                    return Err(CalcError::ReciprocalOfZero);
                }
                1.0 / value
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }
}

/// Iterative product `1 * 2 * ... * n`.
fn factorial(n: f64) -> Result<f64, CalcError> {
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::InvalidFactorial);
    }
    if n > MAX_FACTORIAL {
        return Err(CalcError::NonFiniteResult);
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFunction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let func = match lower.as_str() {
            "reciprocal" | "inv" => ScientificFunction::Reciprocal,
            "fact" | "n!" => ScientificFunction::Factorial,
            "log10" => ScientificFunction::Log,
            "π" => ScientificFunction::Pi,
            other => ScientificFunction::ALL
                .into_iter()
                .find(|f| f.name() == other)
                .ok_or_else(|| InputError::UnknownFunction(s.to_string()))?,
        };
        Ok(func)
    }
}
