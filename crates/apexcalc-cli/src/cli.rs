//! CLI argument definitions for apexcalc.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;

#[derive(Parser)]
#[command(
    name = "apexcalc",
    version,
    about = "Keypad calculator with scientific functions",
    long_about = "A two-operand running calculator driven by button tokens or key names.\n\n\
                  Operators chain left to right (3 + 4 + 5 = gives 12); invalid math\n\
                  such as division by zero shows Error and resets the calculator."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run button tokens through a fresh calculator and print the result
    Eval(commands::eval::EvalArgs),
    /// Run keyboard key names (Enter, Escape, Backspace, ...) through a fresh calculator
    Keys(commands::eval::KeysArgs),
    /// Interactive calculator reading one line of tokens at a time
    Repl(commands::repl::ReplArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
