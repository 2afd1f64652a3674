//! `rcwrap ls|lsjson|size|delete <target>` and `rcwrap listremotes`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use rcwrap_runner::{ExecutionResult, Rclone};

use super::{output, GlobalArgs};

/// Arguments for verbs acting on a single location.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Location to act on, e.g. `remote:path`.
    pub target: String,

    /// Extra rclone flags, passed through untouched (after `--`).
    #[arg(last = true)]
    pub flags: Vec<String>,
}

impl TargetArgs {
    pub fn run(
        self,
        op: fn(&Rclone, &str, &[String]) -> ExecutionResult,
        global: &GlobalArgs,
    ) -> Result<ExitCode> {
        let rclone = global.rclone()?;
        let result = op(&rclone, &self.target, &self.flags);
        output::report(&result, global.json)
    }
}

/// Arguments for `rcwrap listremotes`.
#[derive(Args, Debug)]
pub struct ListRemotesArgs {
    /// Extra rclone flags, passed through untouched (after `--`).
    #[arg(last = true)]
    pub flags: Vec<String>,
}

impl ListRemotesArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<ExitCode> {
        let rclone = global.rclone()?;
        output::report(&rclone.listremotes(&self.flags), global.json)
    }
}
