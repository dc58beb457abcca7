//! Core error types for apexcalc-core.
//!
//! Calculator errors ([`CalcError`]) are never returned to callers of the
//! engine: the engine records them and shows `Error` on the display.
//! The remaining types cover configuration and input parsing and are
//! propagated with `?` like any other error.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for apexcalc-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input that does not map to any calculator key or button
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An invalid calculator operation.
///
/// Every variant is handled the same way: the display shows `Error` and
/// the engine state is fully reset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of a non-positive value")]
    LogOfNonPositive,

    #[error("square root of a negative value")]
    SqrtOfNegative,

    #[error("reciprocal of zero")]
    ReciprocalOfZero,

    /// Factorial of a negative or non-integer value.
    #[error("factorial requires a non-negative integer")]
    InvalidFactorial,

    /// The computation produced NaN or an infinity.
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Input parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A button token that is not on the calculator
    #[error("unknown token '{0}'")]
    UnknownToken(String),

    /// A key name with no keyboard binding
    #[error("unbound key '{0}'")]
    UnknownKey(String),

    /// A scientific function name that does not exist
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// A mode name other than basic or scientific
    #[error("unknown mode '{0}'")]
    UnknownMode(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
