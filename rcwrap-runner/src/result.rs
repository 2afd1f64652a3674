//! Outcome of a single invocation.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::RunError;

/// What one call to the external tool produced.
///
/// `Completed` covers every run where the child was started and waited on,
/// whatever its exit code. `Failed` covers local failures; its code is one of
/// the reserved sentinels.
#[derive(Debug)]
pub enum ExecutionResult {
    Completed {
        code: i32,
        out: Vec<u8>,
        error: Vec<u8>,
    },
    Failed {
        code: i32,
        error: RunError,
    },
}

impl ExecutionResult {
    pub(crate) fn failed(error: RunError) -> Self {
        ExecutionResult::Failed {
            code: error.code(),
            error,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ExecutionResult::Completed { code, .. } | ExecutionResult::Failed { code, .. } => {
                *code
            }
        }
    }

    /// `true` only for a completed run that exited 0.
    pub fn success(&self) -> bool {
        matches!(self, ExecutionResult::Completed { code: 0, .. })
    }

    /// Captured stdout; `None` when the child never ran.
    pub fn out(&self) -> Option<&[u8]> {
        match self {
            ExecutionResult::Completed { out, .. } => Some(out),
            ExecutionResult::Failed { .. } => None,
        }
    }

    /// Captured stderr; `None` when the child never ran.
    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            ExecutionResult::Completed { error, .. } => Some(error),
            ExecutionResult::Failed { .. } => None,
        }
    }

    /// The local failure, if the child never ran to completion.
    pub fn run_error(&self) -> Option<&RunError> {
        match self {
            ExecutionResult::Failed { error, .. } => Some(error),
            ExecutionResult::Completed { .. } => None,
        }
    }

    /// Serialisable view with captured bytes decoded lossily as UTF-8.
    pub fn record(&self) -> ResultRecord<'_> {
        match self {
            ExecutionResult::Completed { code, out, error } => ResultRecord {
                code: *code,
                out: Some(String::from_utf8_lossy(out)),
                error: String::from_utf8_lossy(error),
            },
            ExecutionResult::Failed { code, error } => ResultRecord {
                code: *code,
                out: None,
                error: Cow::Owned(error.to_string()),
            },
        }
    }
}

/// `{code, out, error}` on completion, `{code, error}` on local failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord<'a> {
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<Cow<'a, str>>,
    pub error: Cow<'a, str>,
}
