//! Scratch source and destination trees

#![allow(dead_code)]

use super::fonts::{font_bytes, Flavor};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary `source/` tree and an empty `Fonts/` destination
pub struct FontTree {
    temp_dir: TempDir,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl FontTree {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        let destination = temp_dir.path().join("Fonts");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&destination).unwrap();
        Self {
            temp_dir,
            source,
            destination,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw bytes at `relative` under the source tree
    pub fn add_bytes(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.source.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Write a parseable font declaring `family` at `relative`
    pub fn add_font(&self, relative: &str, family: &str) -> PathBuf {
        let flavor = if relative.to_lowercase().ends_with(".otf") {
            Flavor::OpenType
        } else {
            Flavor::TrueType
        };
        self.add_bytes(relative, &font_bytes(flavor, family))
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.source.join(relative)).unwrap();
    }

    /// Files currently in the destination, sorted, ledger file excluded
    pub fn installed_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.destination)
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .collect();
        names.sort();
        names
    }
}

impl Default for FontTree {
    fn default() -> Self {
        Self::new()
    }
}
