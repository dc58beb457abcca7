use std::io::{self, BufRead, IsTerminal, Write};

use clap::Args;
use tracing::{debug, warn};

use apexcalc_core::{tokenize, Config, CoreError, Mode};

use super::eval::parse_mode;
use crate::session::{Render, Session};

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Print a JSON snapshot after every line
    #[arg(long)]
    pub json: bool,
    /// Print every state change as a JSON line
    #[arg(long)]
    pub events: bool,
    /// Keypad to start with (overrides engine.start_mode)
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<Mode>,
}

const HELP: &str = "\
Enter button tokens separated by spaces, e.g. `12 + 3 =` or `2 ^ 8 =`.
  digits, .           type the current operand
  + - * / ^ %         operators (** for power)
  = / enter           evaluate
  AC  CE  DEL         clear all, clear entry, delete last digit
  sqrt ln log sin ... scientific functions (1/x, abs, factorial, pi, e)
  mode:basic          switch keypad (mode:scientific to switch back)
Commands: :state, :help, :q";

/// What the loop should do after a meta command.
enum Flow {
    Continue,
    Quit,
}

pub fn run(args: ReplArgs) -> Result<(), CoreError> {
    let mut config = Config::load_or_default();
    if let Some(mode) = args.mode {
        config.engine.start_mode = mode;
    }
    let render = Render {
        json: args.json || config.output.json,
        events: args.events,
        show_history: config.repl.show_history,
    };
    let mut session = Session::new(&config, render);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            write!(out, "{}", config.repl.prompt)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(line, "repl line");

        if line.starts_with(':') || matches!(line, "quit" | "exit") {
            match meta_command(line, &session, &mut out)? {
                Flow::Continue => continue,
                Flow::Quit => break,
            }
        }

        match tokenize(line) {
            Ok(inputs) => {
                session.press_all(inputs, &mut out)?;
                if !args.events {
                    session.render(&mut out)?;
                }
            }
            Err(err) => {
                warn!(error = %err, "line rejected");
                eprintln!("error: {err}");
            }
        }
    }
    Ok(())
}

fn meta_command(line: &str, session: &Session, out: &mut impl Write) -> Result<Flow, CoreError> {
    match line {
        ":q" | ":quit" | "quit" | "exit" => return Ok(Flow::Quit),
        ":state" => session.print_snapshot(out)?,
        ":help" | ":h" => writeln!(out, "{HELP}")?,
        other => eprintln!("error: unknown command: {other}"),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_only_known_tokens() {
        let start = HELP.find('(').unwrap();
        let end = HELP[start..].find(')').unwrap() + start;
        for name in HELP[start + 1..end].split(", ") {
            assert!(tokenize(name).is_ok(), "help names unknown token {name}");
        }
        for name in ["sqrt", "ln", "log", "sin", "AC", "CE", "DEL", "**", "mode:basic"] {
            assert!(HELP.contains(name));
            assert!(tokenize(name).is_ok(), "{name}");
        }
    }
}
