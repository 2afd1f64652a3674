//! `rcwrap settings show` and `rcwrap settings init`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use rcwrap_core::{settings, Settings};

use super::GlobalArgs;

/// Inspect or create the settings file.
///
/// `init` stores the global `-v` / `--dry-run` switches as permanent modes.
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the effective settings and where they come from.
    Show,

    /// Write a settings file with the given values.
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// rclone binary name or path. Defaults to `rclone` on PATH.
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// rclone config file whose contents are passed on every call.
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Overwrite an existing settings file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(cmd: SettingsCommand, global: &GlobalArgs) -> Result<()> {
    match cmd {
        SettingsCommand::Show => show(),
        SettingsCommand::Init(args) => init(args, global),
    }
}

fn show() -> Result<()> {
    let path = settings::settings_path().context("could not determine home directory")?;
    let current = settings::load().context("failed to load settings")?;

    if path.exists() {
        println!("Settings: {}", path.display());
    } else {
        println!("Settings: {} {}", path.display(), "(not found, using defaults)".dimmed());
    }
    println!("  executable:  {}", current.executable.display());
    println!("  verbose:     {}", current.verbose);
    println!("  dry_run:     {}", current.dry_run);
    match &current.config_file {
        Some(file) => println!("  config_file: {}", file.display()),
        None => println!("  config_file: {}", "(system rclone config)".dimmed()),
    }
    Ok(())
}

fn init(args: InitArgs, global: &GlobalArgs) -> Result<()> {
    let path = settings::settings_path().context("could not determine home directory")?;
    if path.exists() && !args.force {
        bail!(
            "settings already exist at {}; pass --force to overwrite",
            path.display()
        );
    }

    let config_file = args
        .config_file
        .map(|file| {
            file.canonicalize()
                .with_context(|| format!("cannot resolve config file '{}'", file.display()))
        })
        .transpose()?;

    let new_settings = Settings {
        executable: args
            .executable
            .unwrap_or_else(|| Settings::default().executable),
        verbose: global.verbose,
        dry_run: global.dry_run,
        config_file,
    };
    let saved = settings::save(&new_settings).context("failed to save settings")?;

    println!("{} Saved settings to {}", "✓".green(), saved.display());
    Ok(())
}
