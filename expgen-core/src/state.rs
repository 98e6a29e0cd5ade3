//! Run states of a single generation.

use std::fmt;

/// Where a generation run currently is.
///
/// A run moves forward through
/// `AwaitingInput → Initializing → BuildingDirectories → EmittingFiles → Completed`
/// and can drop into `Failed` from any non-terminal state. It never goes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    AwaitingInput,
    Initializing,
    BuildingDirectories,
    EmittingFiles,
    Completed,
    Failed,
}

impl RunState {
    /// Returns true for `Completed` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: RunState) -> bool {
        use RunState::*;

        match (self, next) {
            (from, Failed) => !from.is_terminal(),
            (AwaitingInput, Initializing)
            | (Initializing, BuildingDirectories)
            | (BuildingDirectories, EmittingFiles)
            | (EmittingFiles, Completed) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::AwaitingInput => "awaiting input",
            RunState::Initializing => "initializing",
            RunState::BuildingDirectories => "building directories",
            RunState::EmittingFiles => "emitting files",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
