use clap::Args;

use apexcalc_core::{tokenize, Config, CoreError, Input, Mode};

use crate::session::{Render, Session};

/// Output flags shared by `eval` and `keys`.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print the final state as a JSON snapshot
    #[arg(long)]
    pub json: bool,
    /// Print every state change as a JSON line
    #[arg(long)]
    pub events: bool,
    /// Keypad to start with (overrides engine.start_mode)
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<Mode>,
    /// Do not print the history label
    #[arg(long = "no-history")]
    pub no_history: bool,
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    /// Button tokens, e.g. `3 + 4 =` or `2 ^ 10 =` or `9 sqrt`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

#[derive(Args, Debug)]
pub struct KeysArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    /// Keyboard key names, e.g. `1 2 + 3 Enter`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

pub(crate) fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse::<Mode>().map_err(|e| e.to_string())
}

pub fn run_eval(args: EvalArgs) -> Result<(), CoreError> {
    let inputs = tokenize(&args.tokens.join(" "))?;
    run_inputs(inputs, &args.output)
}

pub fn run_keys(args: KeysArgs) -> Result<(), CoreError> {
    let inputs = args
        .keys
        .iter()
        .map(|key| Input::parse_key(key))
        .collect::<Result<Vec<_>, _>>()?;
    run_inputs(inputs, &args.output)
}

fn run_inputs(inputs: Vec<Input>, output: &OutputArgs) -> Result<(), CoreError> {
    let mut config = Config::load_or_default();
    if let Some(mode) = output.mode {
        config.engine.start_mode = mode;
    }
    let render = Render {
        json: output.json || config.output.json,
        events: output.events,
        show_history: !output.no_history && config.repl.show_history,
    };

    let mut session = Session::new(&config, render);
    let mut out = std::io::stdout().lock();
    session.press_all(inputs, &mut out)?;
    if !output.events {
        session.render(&mut out)?;
    }
    Ok(())
}
