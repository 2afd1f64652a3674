//! Stateless calling convention: free functions, no stored settings.
//!
//! The executable is passed on every call and no mode flags or config
//! payload are added. Operands stay structured; nothing is re-tokenised.

use std::path::Path;

use rcwrap_core::{Invocation, Verb};

use crate::result::ExecutionResult;
use crate::runner::{execute, NO_FLAGS};

/// Executes: `<executable> <verb> [operands] [flags]`
pub fn run<O, F>(executable: &Path, verb: Verb, operands: &[O], flags: &[F]) -> ExecutionResult
where
    O: AsRef<str>,
    F: AsRef<str>,
{
    execute(
        executable,
        &Invocation::new(verb).operands(operands).flags(flags),
        None,
    )
}

pub fn copy<F: AsRef<str>>(
    executable: &Path,
    source: &str,
    dest: &str,
    flags: &[F],
) -> ExecutionResult {
    run(executable, Verb::Copy, &[source, dest], flags)
}

pub fn sync<F: AsRef<str>>(
    executable: &Path,
    source: &str,
    dest: &str,
    flags: &[F],
) -> ExecutionResult {
    run(executable, Verb::Sync, &[source, dest], flags)
}

pub fn move_files<F: AsRef<str>>(
    executable: &Path,
    source: &str,
    dest: &str,
    flags: &[F],
) -> ExecutionResult {
    run(executable, Verb::Move, &[source, dest], flags)
}

pub fn ls<F: AsRef<str>>(executable: &Path, target: &str, flags: &[F]) -> ExecutionResult {
    run(executable, Verb::Ls, &[target], flags)
}

pub fn lsjson<F: AsRef<str>>(executable: &Path, target: &str, flags: &[F]) -> ExecutionResult {
    run(executable, Verb::Lsjson, &[target], flags)
}

pub fn size<F: AsRef<str>>(executable: &Path, target: &str, flags: &[F]) -> ExecutionResult {
    run(executable, Verb::Size, &[target], flags)
}

pub fn delete<F: AsRef<str>>(executable: &Path, target: &str, flags: &[F]) -> ExecutionResult {
    run(executable, Verb::Delete, &[target], flags)
}

pub fn listremotes<F: AsRef<str>>(executable: &Path, flags: &[F]) -> ExecutionResult {
    run(executable, Verb::ListRemotes, NO_FLAGS, flags)
}
