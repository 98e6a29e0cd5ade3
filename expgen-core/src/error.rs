use std::{path::PathBuf, process::ExitStatus};

use miette::Diagnostic;
use thiserror::Error;

use crate::RunState;

/// Result type for generator operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("project name must not be empty")]
    #[diagnostic(
        code(expgen::empty_project_name),
        help("pass a name as the first argument or type one at the prompt")
    )]
    EmptyProjectName,

    #[error("failed to create directory `{}`", .path.display())]
    #[diagnostic(code(expgen::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`", .path.display())]
    #[diagnostic(code(expgen::write_file))]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch `{program}`")]
    #[diagnostic(
        code(expgen::spawn),
        help("make sure `{program}` is on PATH, or rerun with --offline")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    #[diagnostic(code(expgen::command_failed), help("{stderr}"))]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{stage} failed")]
    #[diagnostic(code(expgen::stage))]
    Stage {
        stage: RunState,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::CreateDir {
            path: path.into(),
            source,
        })
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::WriteFile {
            path: path.into(),
            source,
        })
    }

    pub fn stage(stage: RunState, source: Box<Error>) -> Box<Self> {
        Box::new(Self::Stage { stage, source })
    }

    /// The innermost error, looking through stage wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}
