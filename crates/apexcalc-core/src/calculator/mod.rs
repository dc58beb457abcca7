mod engine;
mod format;
mod function;
mod input;
mod operator;

pub use engine::{CalculatorEngine, EngineSettings, Mode, DEFAULT_ERROR_HISTORY_LINGER};
pub use format::{
    format_result, parse_operand, Formatter, DEFAULT_DECIMAL_PLACES, ERROR_DISPLAY,
    MAX_DECIMAL_PLACES,
};
pub use function::ScientificFunction;
pub use input::{tokenize, Input};
pub use operator::Operator;
