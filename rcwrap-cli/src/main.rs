//! rcwrap — run rclone with captured output and stored defaults.
//!
//! # Usage
//!
//! ```text
//! rcwrap [--rclone <PATH>] [--config <FILE>] [--dry-run] [-v] [--json] [--trace] <command>
//! rcwrap copy|sync|move <source> <dest> [-- flags...]
//! rcwrap ls|lsjson|size|delete <target> [-- flags...]
//! rcwrap listremotes [-- flags...]
//! rcwrap run <verb> [operands...] [-- flags...]
//! rcwrap settings show|init
//! ```

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    run::RunArgs,
    settings::SettingsCommand,
    target::{ListRemotesArgs, TargetArgs},
    transfer::TransferArgs,
    GlobalArgs,
};
use rcwrap_runner::Rclone;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "rcwrap",
    version,
    about = "Run rclone commands with stored defaults and captured output",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy files from source to dest, skipping identical files.
    Copy(TransferArgs),

    /// Make dest identical to source, deleting extra files in dest.
    Sync(TransferArgs),

    /// Move files from source to dest.
    Move(TransferArgs),

    /// List objects in the path with size and path.
    Ls(TargetArgs),

    /// List directories and objects in the path as JSON.
    Lsjson(TargetArgs),

    /// Print the total size and number of objects in the path.
    Size(TargetArgs),

    /// Remove the files in the path.
    Delete(TargetArgs),

    /// List all configured remotes.
    Listremotes(ListRemotesArgs),

    /// Run any other rclone sub-command.
    Run(RunArgs),

    /// Inspect or create ~/.rcwrap/settings.yaml.
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    rcwrap_runner::init_tracing(if cli.global.trace { "debug" } else { "off" });

    let global = &cli.global;
    match cli.command {
        Commands::Copy(args) => args.run(Rclone::copy::<String>, global),
        Commands::Sync(args) => args.run(Rclone::sync::<String>, global),
        Commands::Move(args) => args.run(Rclone::move_files::<String>, global),
        Commands::Ls(args) => args.run(Rclone::ls::<String>, global),
        Commands::Lsjson(args) => args.run(Rclone::lsjson::<String>, global),
        Commands::Size(args) => args.run(Rclone::size::<String>, global),
        Commands::Delete(args) => args.run(Rclone::delete::<String>, global),
        Commands::Listremotes(args) => args.run(global),
        Commands::Run(args) => args.run(global),
        Commands::Settings { command } => {
            commands::settings::run(command, global)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
