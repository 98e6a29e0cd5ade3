//! Report data structures for the terminal.
//!
//! The command builds a report, then renders it to an [`Output`] target.

mod generate;
mod output;
#[cfg(test)]
pub(crate) mod testing;

pub use generate::GenerateReport;
pub use output::{Output, OutputProgress, Report, TerminalOutput};
