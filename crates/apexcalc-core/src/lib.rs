//! # apexcalc Core Library
//!
//! This library provides the core logic for the apexcalc keypad calculator.
//! The engine is free of any rendering surface: a front end delivers
//! discrete inputs (digits, operators, functions, clear keys) and reads
//! back a display string and an optional history label.
//!
//! ## Architecture
//!
//! - **Calculator Engine**: a two-operand running calculator with a pending
//!   operator, left-to-right chaining and unary scientific functions
//! - **Input mapping**: keyboard keys and button tokens to engine inputs
//! - **Events**: every state change is reported as a serializable event
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`CalculatorEngine`]: Core calculator state machine
//! - [`Input`]: One key press or button
//! - [`Event`]: State change notifications
//! - [`Config`]: Application configuration management

pub mod calculator;
pub mod error;
pub mod events;
pub mod storage;

pub use calculator::{
    format_result, tokenize, CalculatorEngine, EngineSettings, Formatter, Input, Mode, Operator,
    ScientificFunction,
};
pub use error::{CalcError, ConfigError, CoreError, InputError};
pub use events::Event;
pub use storage::Config;
