//! Error types for rcwrap-runner.

use std::path::PathBuf;

use thiserror::Error;

use rcwrap_core::{SettingsError, EXIT_NOT_FOUND, EXIT_UNEXPECTED};

/// Local failures that stop the external tool from running to completion.
///
/// Tool-reported failures (non-zero exit) are not errors here; they come back
/// as [`crate::ExecutionResult::Completed`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The executable could not be resolved on `PATH` or at the given path.
    #[error("executable not found: {program}: {source}")]
    NotFound {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spawning, waiting on, or reading from the child failed.
    #[error("error running {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The verb is empty or contains whitespace; nothing was spawned.
    #[error("refusing to run: {source}")]
    Invocation {
        #[source]
        source: SettingsError,
    },

    /// The temporary configuration file could not be created or written.
    #[error("cannot write temporary config file: {source}")]
    ConfigFile {
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// The reserved sentinel reported for this failure.
    pub fn code(&self) -> i32 {
        match self {
            RunError::NotFound { .. } => EXIT_NOT_FOUND,
            RunError::Launch { .. } | RunError::Invocation { .. } | RunError::ConfigFile { .. } => {
                EXIT_UNEXPECTED
            }
        }
    }
}

/// Convenience constructor splitting spawn failures into the two tiers.
pub(crate) fn launch_err(program: impl Into<PathBuf>, source: std::io::Error) -> RunError {
    let program = program.into();
    if source.kind() == std::io::ErrorKind::NotFound {
        RunError::NotFound { program, source }
    } else {
        RunError::Launch { program, source }
    }
}
