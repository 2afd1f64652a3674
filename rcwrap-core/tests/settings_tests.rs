//! Settings file error-message, partial-file and config-payload integration tests.

use std::path::PathBuf;

use assert_fs::prelude::*;
use predicates::prelude::*;
use rcwrap_core::{settings, Settings, SettingsError, Verb};
use rstest::rstest;

fn write_settings(home: &assert_fs::TempDir, yaml: &str) {
    home.child(".rcwrap/settings.yaml")
        .write_str(yaml)
        .expect("write settings");
}

// ---------------------------------------------------------------------------
// 1. Load
// ---------------------------------------------------------------------------

#[test]
fn partial_file_fills_remaining_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_settings(&home, "dry_run: true\n");

    let loaded = settings::load_at(home.path()).expect("load");
    assert!(loaded.dry_run);
    assert!(!loaded.verbose);
    assert_eq!(loaded.executable, PathBuf::from("rclone"));
    assert_eq!(loaded.config_file, None);
}

#[test]
fn empty_file_is_treated_as_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_settings(&home, "");
    assert_eq!(settings::load_at(home.path()).expect("load"), Settings::default());
}

#[test]
fn corrupt_yaml_returns_parse_error_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_settings(&home, ": : corrupt : yaml : !!!\n  - broken: [unclosed");

    let err = settings::load_at(home.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("settings.yaml"), "got: {err}");
}

#[test]
fn wrong_field_type_returns_parse_error() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    write_settings(&home, "verbose: [1, 2]\n");

    let err = settings::load_at(home.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Save
// ---------------------------------------------------------------------------

#[test]
fn save_creates_directory_and_file() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    settings::save_at(home.path(), &Settings::default()).expect("save");

    home.child(".rcwrap").assert(predicate::path::is_dir());
    home.child(".rcwrap/settings.yaml")
        .assert(predicate::str::contains("executable: rclone"));
}

#[test]
fn save_omits_unset_config_file() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    settings::save_at(home.path(), &Settings::default()).expect("save");
    home.child(".rcwrap/settings.yaml")
        .assert(predicate::str::contains("config_file").not());
}

// ---------------------------------------------------------------------------
// 3. Config payload
// ---------------------------------------------------------------------------

#[test]
fn config_payload_reads_file_verbatim() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let conf = home.child("rclone.conf");
    conf.write_str("[s3]\ntype = s3\nprovider = AWS\n").expect("write");

    let settings = Settings {
        config_file: Some(conf.path().to_path_buf()),
        ..Settings::default()
    };
    assert_eq!(
        settings.config_payload().expect("payload").as_deref(),
        Some("[s3]\ntype = s3\nprovider = AWS\n")
    );
}

#[test]
fn missing_config_file_reports_its_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let settings = Settings {
        config_file: Some(home.path().join("absent.conf")),
        ..Settings::default()
    };
    let err = settings.config_payload().unwrap_err();
    assert!(matches!(err, SettingsError::ConfigFile { .. }), "got: {err}");
    assert!(err.to_string().contains("absent.conf"));
}

// ---------------------------------------------------------------------------
// 4. Verb tokens
// ---------------------------------------------------------------------------

#[rstest]
#[case("copy", Verb::Copy)]
#[case("sync", Verb::Sync)]
#[case("move", Verb::Move)]
#[case("ls", Verb::Ls)]
#[case("lsjson", Verb::Lsjson)]
#[case("size", Verb::Size)]
#[case("delete", Verb::Delete)]
#[case("listremotes", Verb::ListRemotes)]
#[case("about", Verb::Other("about".into()))]
fn verb_token_roundtrips_through_display(#[case] token: &str, #[case] verb: Verb) {
    let parsed: Verb = token.parse().expect("parse verb");
    assert_eq!(parsed, verb);
    assert_eq!(parsed.to_string(), token);
}
