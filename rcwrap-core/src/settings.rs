//! Per-user settings for rcwrap.
//!
//! # Storage layout
//!
//! ```text
//! ~/.rcwrap/
//!   settings.yaml   (mode 0600 — may name a file holding remote credentials)
//! ```
//!
//! # API pattern
//!
//! Every function touching the home directory has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::types::DEFAULT_EXECUTABLE;

/// Contents of `settings.yaml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Program name (resolved on `PATH`) or path of the rclone binary.
    pub executable: PathBuf,
    /// Append `-v` to every invocation.
    pub verbose: bool,
    /// Append `--dry-run` to every invocation.
    pub dry_run: bool,
    /// rclone configuration file whose contents become the per-call payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            verbose: false,
            dry_run: false,
            config_file: None,
        }
    }
}

impl Settings {
    /// Read the configured rclone config file, if any.
    pub fn config_payload(&self) -> Result<Option<String>, SettingsError> {
        let Some(path) = &self.config_file else {
            return Ok(None);
        };
        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|source| SettingsError::ConfigFile {
                path: path.clone(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.rcwrap/settings.yaml` — pure, no I/O.
pub fn settings_path_at(home: &Path) -> PathBuf {
    home.join(".rcwrap").join("settings.yaml")
}

/// `settings_path_at` convenience wrapper.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    Ok(settings_path_at(&home()?))
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load `<home>/.rcwrap/settings.yaml`.
///
/// A missing file yields [`Settings::default`]. Malformed YAML yields
/// `SettingsError::Parse` with the file path.
pub fn load_at(home: &Path) -> Result<Settings, SettingsError> {
    let path = settings_path_at(home);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| SettingsError::Parse { path, source: e })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Settings, SettingsError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save settings to `<home>/.rcwrap/settings.yaml`.
///
/// Write flow: serialize → `settings.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = settings_path_at(home);
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
            set_dir_permissions(dir)?;
        }
    }
    let tmp_path = path.with_file_name("settings.yaml.tmp");

    let yaml = serde_yaml::to_string(settings)?;
    std::fs::write(&tmp_path, yaml)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(path)
}

/// `save_at` convenience wrapper.
pub fn save(settings: &Settings) -> Result<PathBuf, SettingsError> {
    save_at(&home()?, settings)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, SettingsError> {
    dirs::home_dir().ok_or(SettingsError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), SettingsError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), SettingsError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), SettingsError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), SettingsError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
