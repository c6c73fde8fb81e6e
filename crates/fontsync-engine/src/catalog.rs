//! Source tree discovery and deduplication
//!
//! Walks the synchronized font folder, keeps files with a font extension,
//! and collapses files that share a [`DedupKey`] into one candidate.

use crate::identifier::FontIdentifier;
use fontsync_core::error::{Error, Result};
use fontsync_core::types::{DedupKey, DedupMode, FontFile, FontRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Turns a directory tree into an ordered, deduplicated list of fonts
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    mode: DedupMode,
    identifier: FontIdentifier,
}

impl FontCatalog {
    pub fn new(mode: DedupMode) -> Self {
        Self {
            mode,
            identifier: FontIdentifier::new(),
        }
    }

    /// Scan `source_dir` and identify every surviving candidate
    pub fn scan(&self, source_dir: &Path) -> Result<Vec<FontRecord>> {
        let files = self.discover(source_dir)?;
        Ok(files
            .into_iter()
            .map(|file| {
                let names = self.identifier.identify_file(&file);
                FontRecord::new(file, names)
            })
            .collect())
    }

    /// Enumerate and deduplicate font files under `source_dir`
    ///
    /// Entries are visited in file-name order within each directory, and
    /// the result keeps the order in which each key was first seen. Any
    /// unreadable entry aborts the scan.
    pub fn discover(&self, source_dir: &Path) -> Result<Vec<FontFile>> {
        let root = std::path::absolute(source_dir)?;
        if !root.is_dir() {
            return Err(Error::scan(
                root.display().to_string(),
                "not a readable directory",
            ));
        }

        let mut files: Vec<FontFile> = Vec::new();
        let mut index: HashMap<DedupKey, usize> = HashMap::new();

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                Error::scan(path, e.to_string())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file) = FontFile::from_path(entry.path()) else {
                continue;
            };

            let key = file.dedup_key(self.mode);
            match index.get(&key) {
                Some(&slot) => {
                    let existing = &files[slot];
                    if prefers(self.mode, existing, &file) {
                        debug!(
                            "Duplicate font {}: {} replaces {}",
                            key,
                            file.path.display(),
                            existing.path.display()
                        );
                        files[slot] = file;
                    } else {
                        debug!(
                            "Duplicate font {}: keeping {} over {}",
                            key,
                            existing.path.display(),
                            file.path.display()
                        );
                    }
                }
                None => {
                    index.insert(key, files.len());
                    files.push(file);
                }
            }
        }

        debug!(
            "Discovered {} font candidate(s) under {}",
            files.len(),
            root.display()
        );
        Ok(files)
    }
}

/// Whether `candidate` should replace `existing` for the same key
///
/// A later `.otf` beats an already-recorded `.ttf`; otherwise the later file
/// wins. When keying on base name, an already-chosen `.otf` is kept against a
/// later `.ttf` so the result does not depend on enumeration order.
fn prefers(mode: DedupMode, existing: &FontFile, candidate: &FontFile) -> bool {
    if candidate.extension == "otf" && existing.extension == "ttf" {
        return true;
    }
    if mode == DedupMode::BaseName && existing.extension == "otf" && candidate.extension == "ttf" {
        return false;
    }
    true
}
