//! Output trait for rendering reports and progress.

use std::io::{self, Write};

use colored::Colorize;
use expgen_core::ProgressReporter;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a progress marker on the current line.
    fn progress(&mut self, percentage: u32);

    /// Render the final success line.
    fn success(&mut self, msg: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a pre-formatted diagnostic.
    fn diagnostic(&mut self, report: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn progress(&mut self, percentage: u32) {
        print!("{}", format!("[{}%] ", percentage).blue());
        // The marker shares a line with the next one
        let _ = io::stdout().flush();
    }

    fn success(&mut self, msg: &str) {
        println!("{}", msg.green().bold());
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  {} {}", "+".green(), text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    fn diagnostic(&mut self, report: &str) {
        eprintln!("{}", report);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Forwards progress percentages to an [`Output`].
pub struct OutputProgress<'a>(pub &'a mut dyn Output);

impl ProgressReporter for OutputProgress<'_> {
    fn report(&mut self, percentage: u32) {
        self.0.progress(percentage);
    }
}
