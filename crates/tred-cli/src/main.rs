//! The `tred` binary: transitive closure and reduction of directed graphs.
//!
//! `main` parses the CLI, reads the input through [`io::read_input`], and
//! dispatches to the matching `cmd` module. Every failure path goes through
//! [`error::CliError`], which owns the stderr message and the exit code
//! (2 for input failures, 1 for logical ones).
use clap::Parser as _;

mod cli;
mod cmd;
mod error;
mod input;
mod io;
mod render;

pub use cli::{Algorithm, Cli, Command, InputFormat, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = dispatch(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Routes the parsed CLI to the matching subcommand implementation.
fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Closure { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::closure::run(&content, cli.input, &cli.format)
        }
        Command::Reduce {
            file,
            algorithm,
            show_removed,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::reduce::run(&content, cli.input, *algorithm, *show_removed, &cli.format)
        }
        Command::Cycles { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::cycles::run(&content, cli.input, &cli.format)
        }
        Command::Reach { file, from, to } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::reach::run(&content, from, to.as_deref(), cli.input, &cli.format)
        }
        Command::Verify { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::verify::run(&content, cli.input, &cli.format)
        }
        Command::Version => {
            println!("{}", tred_core::version());
            Ok(())
        }
    }
}
