//! Generation context passed through pipeline stages.

use std::path::{Path, PathBuf};

use expgen_core::{ProjectOptions, RunState};

/// State of one generation run.
///
/// Carries the (read-only) options through every stage and accumulates what
/// each stage produced.
#[derive(Debug)]
pub struct GenerationContext {
    options: ProjectOptions,
    root: PathBuf,
    state: RunState,
    created_dirs: Vec<PathBuf>,
    written_files: Vec<PathBuf>,
}

impl GenerationContext {
    pub fn new(options: ProjectOptions, root: impl Into<PathBuf>) -> Self {
        Self {
            options,
            root: root.into(),
            state: RunState::AwaitingInput,
            created_dirs: Vec::new(),
            written_files: Vec::new(),
        }
    }

    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Directories created by the directory stage, in creation order.
    pub fn created_dirs(&self) -> &[PathBuf] {
        &self.created_dirs
    }

    /// Files written by the emit stage, in write order.
    pub fn written_files(&self) -> &[PathBuf] {
        &self.written_files
    }

    pub(crate) fn record_dir(&mut self, path: PathBuf) {
        self.created_dirs.push(path);
    }

    pub(crate) fn record_file(&mut self, path: PathBuf) {
        self.written_files.push(path);
    }

    pub(crate) fn transition(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        tracing::debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }
}
