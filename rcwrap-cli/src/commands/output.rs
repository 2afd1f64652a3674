//! Rendering an [`ExecutionResult`] and choosing the process exit code.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use rcwrap_runner::{ExecutionResult, RunError};

/// Exit status used when rclone itself could not be found (shell convention).
const EXIT_COMMAND_NOT_FOUND: u8 = 127;

/// Write captured output (or the JSON record) and return the exit code.
pub fn report(result: &ExecutionResult, json: bool) -> Result<ExitCode> {
    if json {
        let line = serde_json::to_string(&result.record()).context("failed to encode result")?;
        println!("{line}");
        return Ok(exit_code(result));
    }

    match result {
        ExecutionResult::Completed { out, error, .. } => {
            std::io::stdout()
                .write_all(out)
                .context("failed to write rclone stdout")?;
            std::io::stderr()
                .write_all(error)
                .context("failed to write rclone stderr")?;
        }
        ExecutionResult::Failed { error, .. } => {
            eprintln!("{} {error}", "error:".red().bold());
            if matches!(error, RunError::NotFound { .. }) {
                eprintln!("  Install rclone or point --rclone / settings `executable` at it.");
            }
        }
    }
    Ok(exit_code(result))
}

/// The tool's own code when it fits in a byte, 127 for a missing
/// executable, 1 for everything else.
pub fn exit_code(result: &ExecutionResult) -> ExitCode {
    if matches!(result.run_error(), Some(RunError::NotFound { .. })) {
        return ExitCode::from(EXIT_COMMAND_NOT_FOUND);
    }
    u8::try_from(result.code())
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
