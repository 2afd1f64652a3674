//! The command runner and its stateful façade.
//!
//! Every call follows the same path:
//!
//! 1. Build `[executable, verb, operands..., flags...]`.
//! 2. Append mode flags (`--dry-run`, `-v`) requested by the [`Rclone`] settings.
//! 3. If a non-empty config payload is present, write it to a temp file and append
//!    `--config <path>`.
//! 4. Spawn, wait, collect stdout/stderr.
//! 5. Delete the temp file, whatever happened in step 4.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use rcwrap_core::{
    Invocation, Settings, SettingsError, Verb, DEFAULT_EXECUTABLE, EXIT_UNEXPECTED,
};

use crate::config_file::TempConfig;
use crate::error::{launch_err, RunError};
use crate::result::ExecutionResult;

/// Empty flag list for calls that pass nothing extra.
pub const NO_FLAGS: &[&str] = &[];

// ---------------------------------------------------------------------------
// execute
// ---------------------------------------------------------------------------

/// Run `invocation` with `executable`, optionally backed by a config payload.
///
/// Never panics and never returns `Err`: local failures come back as
/// [`ExecutionResult::Failed`] carrying a sentinel code.
pub fn execute(
    executable: &Path,
    invocation: &Invocation,
    config: Option<&str>,
) -> ExecutionResult {
    if let Err(source) = invocation.verb.validate() {
        let err = RunError::Invocation { source };
        tracing::error!(error = ?err, "error preparing command: {err}");
        return ExecutionResult::failed(err);
    }

    let mut args: Vec<OsString> = invocation
        .args()
        .into_iter()
        .map(OsString::from)
        .collect();

    // An empty payload means "no payload": the system rclone config applies.
    let Some(payload) = config.filter(|c| !c.is_empty()) else {
        return launch(executable, &args);
    };

    let temp = match TempConfig::write(payload) {
        Ok(temp) => temp,
        Err(e) => {
            tracing::error!(error = ?e, "error preparing command: {e}");
            return ExecutionResult::failed(e);
        }
    };
    args.push(OsString::from("--config"));
    args.push(temp.path().as_os_str().to_owned());

    let result = launch(executable, &args);
    temp.remove();
    result
}

fn launch(program: &Path, args: &[OsString]) -> ExecutionResult {
    tracing::debug!("invoking: {}", render(program, args));

    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            let err = launch_err(program, e);
            match &err {
                RunError::NotFound { .. } => tracing::error!("{err}"),
                _ => tracing::error!(error = ?err, "error running command: {err}"),
            }
            return ExecutionResult::failed(err);
        }
    };

    tracing::debug!("{}", String::from_utf8_lossy(&output.stdout));
    if !output.stderr.is_empty() {
        tracing::warn!("{}", String::from_utf8_lossy(&output.stderr));
    }

    ExecutionResult::Completed {
        code: exit_code(output.status),
        out: output.stdout,
        error: output.stderr,
    }
}

/// Exit code, or the negated signal number for a child killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    EXIT_UNEXPECTED
}

fn render(program: &Path, args: &[OsString]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Rclone — stateful calling convention
// ---------------------------------------------------------------------------

/// Reusable defaults for a series of rclone calls.
///
/// Settings are only read during a call, so one value can be shared between
/// threads; concurrent calls each get their own child and temp config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rclone {
    executable: PathBuf,
    config: Option<String>,
    verbose: bool,
    dry_run: bool,
}

impl Default for Rclone {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            config: None,
            verbose: false,
            dry_run: false,
        }
    }
}

impl Rclone {
    pub fn new() -> Self {
        Self::default()
    }

    /// An instance that passes `cfg` as its configuration on every call.
    pub fn with_config(cfg: impl Into<String>) -> Self {
        Self {
            config: Some(cfg.into()),
            ..Self::default()
        }
    }

    /// Build from user settings, reading the configured rclone config file.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        Ok(Self {
            executable: settings.executable.clone(),
            config: settings.config_payload()?,
            verbose: settings.verbose,
            dry_run: settings.dry_run,
        })
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn set_executable(&mut self, executable: impl Into<PathBuf>) {
        self.executable = executable.into();
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Use `cfg` instead of the system rclone configuration.
    pub fn configure(&mut self, cfg: impl Into<String>) {
        self.config = Some(cfg.into());
    }

    /// Fall back to the system rclone configuration.
    pub fn clear_config(&mut self) {
        self.config = None;
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// Caller flags followed by the mode flags these settings request.
    ///
    /// No de-duplication: a caller passing `-v` to a verbose instance sends it twice.
    pub fn prepare(&self, invocation: &Invocation) -> Invocation {
        let mut prepared = invocation.clone();
        if self.dry_run {
            prepared.flags.push("--dry-run".to_owned());
        }
        if self.verbose {
            prepared.flags.push("-v".to_owned());
        }
        prepared
    }

    /// Full argument vector for `invocation`, executable first, excluding
    /// any `--config` pair.
    pub fn command_line(&self, invocation: &Invocation) -> Vec<OsString> {
        std::iter::once(self.executable.as_os_str().to_owned())
            .chain(self.prepare(invocation).args().into_iter().map(OsString::from))
            .collect()
    }

    pub fn execute(&self, invocation: &Invocation) -> ExecutionResult {
        execute(
            &self.executable,
            &self.prepare(invocation),
            self.config.as_deref(),
        )
    }

    /// Executes: `rclone <verb> [operands] [flags]`
    pub fn run_cmd<O, F>(&self, verb: Verb, operands: &[O], flags: &[F]) -> ExecutionResult
    where
        O: AsRef<str>,
        F: AsRef<str>,
    {
        self.execute(&Invocation::new(verb).operands(operands).flags(flags))
    }

    /// Executes: `rclone copy source:path dest:path [flags]`
    pub fn copy<F: AsRef<str>>(&self, source: &str, dest: &str, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::Copy, &[source, dest], flags)
    }

    /// Executes: `rclone sync source:path dest:path [flags]`
    pub fn sync<F: AsRef<str>>(&self, source: &str, dest: &str, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::Sync, &[source, dest], flags)
    }

    /// Executes: `rclone move source:path dest:path [flags]`
    pub fn move_files<F: AsRef<str>>(
        &self,
        source: &str,
        dest: &str,
        flags: &[F],
    ) -> ExecutionResult {
        self.run_cmd(Verb::Move, &[source, dest], flags)
    }

    /// Executes: `rclone ls remote:path [flags]`
    pub fn ls<F: AsRef<str>>(&self, target: &str, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::Ls, &[target], flags)
    }

    /// Executes: `rclone lsjson remote:path [flags]`
    pub fn lsjson<F: AsRef<str>>(&self, target: &str, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::Lsjson, &[target], flags)
    }

    /// Executes: `rclone size remote:path [flags]`
    pub fn size<F: AsRef<str>>(&self, target: &str, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::Size, &[target], flags)
    }

    /// Executes: `rclone delete remote:path [flags]`
    pub fn delete<F: AsRef<str>>(&self, target: &str, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::Delete, &[target], flags)
    }

    /// Executes: `rclone listremotes [flags]`
    pub fn listremotes<F: AsRef<str>>(&self, flags: &[F]) -> ExecutionResult {
        self.run_cmd(Verb::ListRemotes, NO_FLAGS, flags)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
