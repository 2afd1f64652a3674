//! `rcwrap copy|sync|move <source> <dest> [-- flags...]`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use rcwrap_runner::{ExecutionResult, Rclone};

use super::{output, GlobalArgs};

/// Arguments shared by the two-location verbs.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Source location, e.g. `local:/data` or `s3:bucket/path`.
    pub source: String,

    /// Destination location.
    pub dest: String,

    /// Extra rclone flags, passed through untouched (after `--`).
    #[arg(last = true)]
    pub flags: Vec<String>,
}

impl TransferArgs {
    pub fn run(
        self,
        op: fn(&Rclone, &str, &str, &[String]) -> ExecutionResult,
        global: &GlobalArgs,
    ) -> Result<ExitCode> {
        let rclone = global.rclone()?;
        let result = op(&rclone, &self.source, &self.dest, &self.flags);
        output::report(&result, global.json)
    }
}
