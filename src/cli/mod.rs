//! CLI for custodb
//!
//! Argument parsing (clap) and command dispatch. All record semantics live in
//! the library modules; the CLI is glue and printing.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliResult};

use clap::Parser;

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    commands::execute(cli)
}
