//! `rcwrap run <verb> [operands...] [-- flags...]` — any other sub-command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use rcwrap_core::Verb;

use super::{output, GlobalArgs};

/// Arguments for `rcwrap run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// rclone sub-command, e.g. `about`, `mkdir`, `check`.
    pub verb: Verb,

    /// Positional operands, in order.
    pub operands: Vec<String>,

    /// Extra rclone flags, passed through untouched (after `--`).
    #[arg(last = true)]
    pub flags: Vec<String>,
}

impl RunArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<ExitCode> {
        let rclone = global.rclone()?;
        let result = rclone.run_cmd(self.verb, &self.operands, &self.flags);
        output::report(&result, global.json)
    }
}
