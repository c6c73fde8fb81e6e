//! JSON-file ledger for hosts without a font registry

use super::{FontLedger, LedgerEntry};
use fontsync_core::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the ledger inside the destination directory
pub const FILE_LEDGER_NAME: &str = ".fontsync-ledger.json";

/// Ledger stored as a JSON object of display name to file name
///
/// Every operation re-reads the file, and writes replace it atomically.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Ledger at the conventional location inside `destination_dir`
    pub fn in_directory(destination_dir: &Path) -> Self {
        Self::new(destination_dir.join(FILE_LEDGER_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut temp, map)?;
        temp.write_all(b"\n")?;
        temp.persist(&self.path).map_err(|e| {
            Error::ledger(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        debug!("Saved ledger with {} entries to {}", map.len(), self.path.display());
        Ok(())
    }
}

impl FontLedger for FileLedger {
    fn entries(&self) -> Result<Vec<LedgerEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .map(|(name, file)| LedgerEntry::new(name, file))
            .collect())
    }

    fn write(&self, display_name: &str, file_name: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(display_name.to_string(), file_name.to_string());
        self.save(&map)
    }

    fn delete(&self, display_name: &str) -> Result<bool> {
        let mut map = self.load()?;
        if map.remove(display_name).is_none() {
            return Ok(false);
        }
        self.save(&map)?;
        Ok(true)
    }

    fn exists(&self, display_name: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(display_name))
    }
}
