//! Core types for the expgen project generator.
//!
//! This crate provides the option set, filesystem primitives, progress
//! accounting and errors shared by the rest of the workspace.

mod error;
mod file;
mod options;
mod progress;
mod state;

pub use error::{Error, Result};
// File operations
pub use file::{DiskFs, FileSpec, FileSystem, GeneratedFile};
// Project options
pub use options::{AuthLibrary, Database, Language, ProjectOptions};
// Progress accounting
pub use progress::{Progress, ProgressReporter, ProgressState, ProgressTracker};
pub use state::RunState;
