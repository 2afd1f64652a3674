//! Binary-level tests: argument pass-through, exit codes, JSON output, settings.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Prints each argument on its own line.
const ECHO_ARGS: &str = r#"for a in "$@"; do printf '%s\n' "$a"; done"#;

fn rcwrap_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rcwrap"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG");
    cmd
}

fn fake_rclone(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-rclone");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

fn write_settings(home: &Path, yaml: &str) {
    let dir = home.join(".rcwrap");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("settings.yaml"), yaml).expect("write settings");
}

// ---------------------------------------------------------------------------
// 1. Pass-through
// ---------------------------------------------------------------------------

#[test]
fn copy_passes_operands_then_flags_then_modes() {
    let home = TempDir::new().expect("home");
    let exe = fake_rclone(home.path(), ECHO_ARGS);

    rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(&exe)
        .args(["--dry-run", "copy", "a:x", "b:y", "--", "--checksum"])
        .assert()
        .success()
        .stdout("copy\na:x\nb:y\n--checksum\n--dry-run\n");
}

#[test]
fn settings_file_supplies_executable_and_modes() {
    let home = TempDir::new().expect("home");
    let exe = fake_rclone(home.path(), ECHO_ARGS);
    write_settings(
        home.path(),
        &format!("executable: {}\nverbose: true\n", exe.display()),
    );

    rcwrap_cmd(home.path())
        .args(["ls", "remote:photos"])
        .assert()
        .success()
        .stdout("ls\nremote:photos\n-v\n");
}

#[test]
fn run_accepts_arbitrary_verbs() {
    let home = TempDir::new().expect("home");
    let exe = fake_rclone(home.path(), ECHO_ARGS);

    rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(&exe)
        .args(["run", "mkdir", "remote:new dir", "--", "--log-level", "INFO"])
        .assert()
        .success()
        .stdout("mkdir\nremote:new dir\n--log-level\nINFO\n");
}

#[test]
fn config_flag_passes_file_contents_through_temp_file() {
    let home = TempDir::new().expect("home");
    let exe = fake_rclone(
        home.path(),
        r#"while [ "$#" -gt 0 ]; do
  if [ "$1" = "--config" ]; then cat "$2"; fi
  shift
done"#,
    );
    let conf = home.path().join("rclone.conf");
    fs::write(&conf, "[b2]\ntype = b2\n").expect("write conf");

    rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(&exe)
        .arg("--config")
        .arg(&conf)
        .arg("listremotes")
        .assert()
        .success()
        .stdout("[b2]\ntype = b2\n");
}

// ---------------------------------------------------------------------------
// 2. Exit codes and output
// ---------------------------------------------------------------------------

#[test]
fn tool_exit_code_and_stderr_are_forwarded() {
    let home = TempDir::new().expect("home");
    let exe = fake_rclone(home.path(), "echo \"couldn't find remote\" >&2\nexit 3");

    rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(&exe)
        .args(["size", "nowhere:"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("couldn't find remote"));
}

#[test]
fn missing_executable_exits_127() {
    let home = TempDir::new().expect("home");

    rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(home.path().join("absent"))
        .args(["delete", "r:tmp"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("executable not found"));
}

#[test]
fn json_output_on_success() {
    let home = TempDir::new().expect("home");
    let exe = fake_rclone(home.path(), "printf hello");

    let assert = rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(&exe)
        .args(["--json", "lsjson", "r:"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json");
    assert_eq!(
        value,
        serde_json::json!({"code": 0, "out": "hello", "error": ""})
    );
}

#[test]
fn json_output_on_missing_executable_has_sentinel_and_no_out() {
    let home = TempDir::new().expect("home");

    let assert = rcwrap_cmd(home.path())
        .arg("--rclone")
        .arg(home.path().join("absent"))
        .args(["--json", "listremotes"])
        .assert()
        .code(127);
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json");
    assert_eq!(value["code"], -20);
    assert!(value.get("out").is_none());
}

// ---------------------------------------------------------------------------
// 3. Settings sub-commands
// ---------------------------------------------------------------------------

#[test]
fn settings_init_writes_file_and_refuses_to_overwrite() {
    let home = TempDir::new().expect("home");

    rcwrap_cmd(home.path())
        .args(["settings", "init", "--executable", "/opt/rclone", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings"));

    let written = fs::read_to_string(home.path().join(".rcwrap/settings.yaml")).expect("read");
    assert!(written.contains("executable: /opt/rclone"));
    assert!(written.contains("verbose: true"));

    rcwrap_cmd(home.path())
        .args(["settings", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn settings_show_reports_defaults_when_missing() {
    let home = TempDir::new().expect("home");

    rcwrap_cmd(home.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("executable:  rclone"));
}

#[test]
fn corrupt_settings_fail_with_context() {
    let home = TempDir::new().expect("home");
    write_settings(home.path(), "verbose: [oops");

    rcwrap_cmd(home.path())
        .args(["listremotes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings.yaml"));
}
