use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod logging;
mod session;

use cli::{Cli, Commands};
use logging::{init_logging, LogConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Eval(args) => commands::eval::run_eval(args),
        Commands::Keys(args) => commands::eval::run_keys(args),
        Commands::Repl(args) => commands::repl::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
