//! rcwrap core library — invocation types, settings persistence, errors.
//!
//! Public API surface:
//! - [`types`] — verbs, invocations and the reserved sentinel exit codes
//! - [`error`] — [`SettingsError`]
//! - [`settings`] — load / save of `~/.rcwrap/settings.yaml`

pub mod error;
pub mod settings;
pub mod types;

pub use error::SettingsError;
pub use settings::Settings;
pub use types::{Invocation, Verb, DEFAULT_EXECUTABLE, EXIT_NOT_FOUND, EXIT_UNEXPECTED};
