//! # rcwrap-runner
//!
//! Runs the external `rclone` binary and hands back what it printed.
//!
//! Two calling conventions share one runner:
//! - [`Rclone`] — holds executable, config payload, verbosity and dry-run
//!   defaults and reuses them across calls;
//! - [`direct`] — free functions with no stored settings.

pub mod config_file;
pub mod direct;
pub mod error;
pub mod logging;
pub mod result;
pub mod runner;

pub use error::RunError;
pub use logging::init_tracing;
pub use result::{ExecutionResult, ResultRecord};
pub use runner::{execute, Rclone, NO_FLAGS};
