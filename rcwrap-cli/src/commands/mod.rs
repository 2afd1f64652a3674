//! Sub-command implementations and the options they share.

pub mod output;
pub mod run;
pub mod settings;
pub mod target;
pub mod transfer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rcwrap_core::settings as user_settings;
use rcwrap_runner::Rclone;

/// Options accepted before or after any sub-command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// rclone binary to run (overrides `executable` in settings).
    #[arg(long, global = true, value_name = "PATH")]
    pub rclone: Option<PathBuf>,

    /// rclone config file to use instead of the system one for this call.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pass --dry-run to rclone.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Pass -v to rclone.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print the result as a single JSON object instead of raw output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log the invoked command line and captured output to stderr.
    #[arg(long, global = true)]
    pub trace: bool,
}

impl GlobalArgs {
    /// Settings file values with command-line overrides applied.
    pub fn rclone(&self) -> Result<Rclone> {
        let mut settings = user_settings::load().context("failed to load ~/.rcwrap/settings.yaml")?;
        if let Some(exe) = &self.rclone {
            settings.executable = exe.clone();
        }
        if let Some(config) = &self.config {
            settings.config_file = Some(config.clone());
        }
        settings.dry_run |= self.dry_run;
        settings.verbose |= self.verbose;

        Rclone::from_settings(&settings).context("failed to prepare rclone settings")
    }
}
