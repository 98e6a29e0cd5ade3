mod commands;
mod logging;
mod prompt;
mod reports;

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

use crate::{commands::Cli, reports::TerminalOutput};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = cli.run(&mut TerminalOutput::new())?;
    Ok(outcome.into())
}
