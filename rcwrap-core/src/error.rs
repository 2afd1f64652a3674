//! Error types for rcwrap-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from settings and invocation construction.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying I/O failure (permission denied, read-only filesystem, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.rcwrap/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The rclone configuration file named in the settings could not be read.
    #[error("cannot read rclone config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A verb was empty or contained whitespace.
    #[error("invalid verb {0:?}: expected a single non-empty token")]
    InvalidVerb(String),
}
