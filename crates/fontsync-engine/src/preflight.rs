//! Destination directory preflight

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of probing the destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationStatus {
    Writable(PathBuf),
    /// The directory exists but a probe file could not be created
    ReadOnly { path: PathBuf, reason: String },
}

impl DestinationStatus {
    pub fn is_writable(&self) -> bool {
        matches!(self, DestinationStatus::Writable(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            DestinationStatus::Writable(path) => path,
            DestinationStatus::ReadOnly { path, .. } => path,
        }
    }
}

/// Create the destination directory if needed and check it is writable
///
/// Failing to create the directory is an error. A directory that exists
/// but rejects writes is reported as [`DestinationStatus::ReadOnly`] so the
/// run can continue and record per-font failures.
pub fn prepare_destination(dir: &Path) -> Result<DestinationStatus> {
    std::fs::create_dir_all(dir).with_context(|| {
        format!("Failed to create destination directory {}", dir.display())
    })?;

    match tempfile::Builder::new()
        .prefix(".fontsync-probe")
        .tempfile_in(dir)
    {
        Ok(_probe) => {
            debug!("Destination {} is writable", dir.display());
            Ok(DestinationStatus::Writable(dir.to_path_buf()))
        }
        Err(e) => {
            warn!(
                "Destination {} is not writable ({}); re-run with elevated privileges",
                dir.display(),
                e
            );
            Ok(DestinationStatus::ReadOnly {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}
