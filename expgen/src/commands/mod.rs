mod new;

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use new::NewCommand;

use crate::reports::Output;

/// How a command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Render a generator error with pretty formatting.
pub(crate) fn report_failure(err: Box<expgen_core::Error>, out: &mut dyn Output) -> Outcome {
    out.error("Error generating project:");
    out.diagnostic(&format!("{:?}", miette::Report::new(*err)));
    Outcome::Failed
}

#[derive(Parser)]
#[command(name = "expgen")]
#[command(version)]
#[command(about = "Scaffold an Express.js project")]
pub(crate) struct Cli {
    #[command(flatten)]
    new: NewCommand,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self, out: &mut dyn Output) -> Result<Outcome> {
        self.new.run(out)
    }
}
