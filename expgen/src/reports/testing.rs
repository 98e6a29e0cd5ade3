//! In-memory [`Output`] for tests.

use super::Output;

/// Records every rendered line; blank lines are dropped.
#[derive(Default)]
pub(crate) struct Recorder {
    pub(crate) lines: Vec<String>,
}

impl Output for Recorder {
    fn progress(&mut self, percentage: u32) {
        self.lines.push(format!("[{}%]", percentage));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("ok {}", msg));
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("- {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("+ {}", text));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error {}", msg));
    }

    fn diagnostic(&mut self, report: &str) {
        self.lines.push(report.to_string());
    }

    fn newline(&mut self) {}
}
