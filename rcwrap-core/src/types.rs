//! Domain types for rclone invocations.
//!
//! An [`Invocation`] is built per call and thrown away afterwards; nothing in
//! here holds state across calls.

use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Program name resolved on `PATH` when no explicit executable is configured.
pub const DEFAULT_EXECUTABLE: &str = "rclone";

/// Reported when the executable cannot be resolved. No real exit code is negative.
pub const EXIT_NOT_FOUND: i32 = -20;

/// Reported for any other local failure while spawning or talking to the child.
pub const EXIT_UNEXPECTED: i32 = -30;

// ---------------------------------------------------------------------------
// Verb
// ---------------------------------------------------------------------------

/// The rclone sub-command selecting which operation the tool performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    Copy,
    Sync,
    Move,
    Ls,
    Lsjson,
    Size,
    Delete,
    ListRemotes,
    /// Any other sub-command, passed through untouched.
    Other(String),
}

impl Verb {
    /// The token placed on the command line.
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Copy => "copy",
            Verb::Sync => "sync",
            Verb::Move => "move",
            Verb::Ls => "ls",
            Verb::Lsjson => "lsjson",
            Verb::Size => "size",
            Verb::Delete => "delete",
            Verb::ListRemotes => "listremotes",
            Verb::Other(s) => s,
        }
    }

    /// Reject tokens that cannot name a sub-command: empty, or containing
    /// whitespace. Needed for [`Verb::Other`] values built directly.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_token(self.as_str())
    }
}

fn check_token(s: &str) -> Result<(), SettingsError> {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(SettingsError::InvalidVerb(s.to_owned()));
    }
    Ok(())
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_token(s)?;
        Ok(match s {
            "copy" => Verb::Copy,
            "sync" => Verb::Sync,
            "move" => Verb::Move,
            "ls" => Verb::Ls,
            "lsjson" => Verb::Lsjson,
            "size" => Verb::Size,
            "delete" => Verb::Delete,
            "listremotes" => Verb::ListRemotes,
            other => Verb::Other(other.to_owned()),
        })
    }
}

// ---------------------------------------------------------------------------
// Invocation
// ---------------------------------------------------------------------------

/// One call to the external tool: verb, positional operands, pass-through flags.
///
/// Operands and flags are opaque; they reach the child as discrete argv
/// elements, so spaces and shell metacharacters need no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: Verb,
    pub operands: Vec<String>,
    pub flags: Vec<String>,
}

impl Invocation {
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            operands: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Append positional operands, preserving order.
    pub fn operands<I, S>(mut self, operands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.operands
            .extend(operands.into_iter().map(|s| s.as_ref().to_owned()));
        self
    }

    /// Append flags, preserving order.
    pub fn flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.flags
            .extend(flags.into_iter().map(|s| s.as_ref().to_owned()));
        self
    }

    /// `verb operands... flags...` — the argument list without the executable
    /// or any mode flags.
    pub fn args(&self) -> Vec<&str> {
        std::iter::once(self.verb.as_str())
            .chain(self.operands.iter().map(String::as_str))
            .chain(self.flags.iter().map(String::as_str))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
