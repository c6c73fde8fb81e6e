//! Source folder resolution across mounted filesystems
//!
//! The configured source path is relative to a drive root (for example
//! `OneDrive\Fonts`), so the same config works whichever drive letter or
//! mount point the synced folder ends up on.

use fontsync_core::error::{Error, Result};
#[cfg(not(windows))]
use std::path::Path;
use std::path::PathBuf;
use tracing::{debug, info};

/// Probe each root in order; the first `root/relative` that is a
/// directory wins
pub fn resolve_source(relative: &str, roots: &[PathBuf]) -> Option<PathBuf> {
    let relative = normalize_relative(relative);
    roots.iter().find_map(|root| {
        let candidate = root.join(&relative);
        debug!("Probing source candidate {}", candidate.display());
        candidate.is_dir().then_some(candidate)
    })
}

/// Resolve `relative` against [`mounted_roots`]
pub fn locate_source(relative: &str) -> Result<PathBuf> {
    let source = resolve_source(relative, &mounted_roots())
        .ok_or_else(|| Error::source_not_found(relative))?;
    info!("Source folder resolved: {}", source.display());
    Ok(source)
}

/// Accept either separator and ignore leading ones
fn normalize_relative(relative: &str) -> PathBuf {
    relative
        .split(['\\', '/'])
        .filter(|part| !part.is_empty())
        .collect()
}

/// Drive roots `A:\` to `Z:\` that exist
#[cfg(windows)]
pub fn mounted_roots() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|root| root.is_dir())
        .collect()
}

/// `/`, mount points under the usual parents, then the home directory
#[cfg(not(windows))]
pub fn mounted_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/")];

    let mut parents = vec![PathBuf::from("/mnt"), PathBuf::from("/media")];
    if let Ok(user) = std::env::var("USER") {
        parents.push(Path::new("/media").join(user));
    }
    parents.push(PathBuf::from("/Volumes"));

    for parent in &parents {
        roots.extend(child_dirs(parent));
    }

    if let Ok(home) = fontsync_core::get_home_dir() {
        roots.push(home);
    }

    roots.dedup();
    roots
}

#[cfg(not(windows))]
fn child_dirs(parent: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(parent) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
