//! Scoped temporary rclone configuration file.
//!
//! The payload lives on disk only between [`TempConfig::write`] and
//! [`TempConfig::remove`] (or drop). Each call gets its own uniquely named
//! file, created with owner-only permissions.

use std::io::Write;
use std::path::Path;

use tempfile::TempPath;

use crate::error::RunError;

pub struct TempConfig {
    path: TempPath,
}

impl TempConfig {
    /// Create a fresh temp file holding exactly `payload`.
    pub fn write(payload: &str) -> Result<Self, RunError> {
        let mut file = tempfile::Builder::new()
            .prefix("rcwrap-")
            .suffix(".conf")
            .tempfile()
            .map_err(|source| RunError::ConfigFile { source })?;
        file.write_all(payload.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| RunError::ConfigFile { source })?;

        // Close our handle; the path is still removed on drop.
        let path = file.into_temp_path();
        tracing::debug!(
            "rclone config: {} ({} bytes)",
            path.display(),
            payload.len()
        );
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now, logging rather than failing if that goes wrong.
    pub fn remove(self) {
        let shown = self.path.display().to_string();
        if let Err(e) = self.path.close() {
            tracing::warn!("could not remove temporary config {}: {e}", shown);
        }
    }
}
