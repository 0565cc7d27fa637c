mod args;
mod logger;
mod registers;
mod shell;
mod values;

use std::process::ExitCode;

use args::{Cli, Commands};
use clap::Parser;
use shell::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logger::init(cli.verbose) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    let mut session = Session::default();

    let result = match &cli.command {
        None | Some(Commands::Shell) => session.command_loop(),
        Some(Commands::Encode(args)) => session.encode(args),
        Some(Commands::Decode(args)) => session.decode(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
