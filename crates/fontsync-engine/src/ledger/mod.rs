//! The font ledger: the machine-wide display-name to file-name mapping
//!
//! All ledger access goes through [`FontLedger`]. Backends:
//! - [`RegistryLedger`]: the Windows font registry key (Windows only)
//! - [`FileLedger`]: a JSON document in the destination directory
//! - [`MemoryLedger`]: in-process map for tests
//!
//! The ledger is shared machine state with no locking; two fontsync
//! processes running at once can interleave writes.

mod file;
mod memory;
#[cfg(windows)]
mod registry;

pub use file::{FileLedger, FILE_LEDGER_NAME};
pub use memory::MemoryLedger;
#[cfg(windows)]
pub use registry::RegistryLedger;

use fontsync_core::error::Result;
use fontsync_core::types::LedgerBackend;
use fontsync_core::FontsyncConfig;
use serde::{Deserialize, Serialize};

/// One ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// `"<family> (<type label>)"`
    pub display_name: String,
    /// File name relative to the destination font directory
    pub file_name: String,
}

impl LedgerEntry {
    pub fn new(display_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            file_name: file_name.into(),
        }
    }
}

/// Persistent display-name to file-name registry
pub trait FontLedger {
    /// Every entry currently in the ledger
    fn entries(&self) -> Result<Vec<LedgerEntry>>;

    /// First entry whose display name contains `needle` (case-insensitive)
    /// and whose file name ends with `suffix` (case-insensitive)
    fn find_by_substring_and_suffix(
        &self,
        needle: &str,
        suffix: &str,
    ) -> Result<Option<LedgerEntry>> {
        let needle = needle.to_lowercase();
        let suffix = suffix.to_lowercase();
        Ok(self.entries()?.into_iter().find(|entry| {
            entry.display_name.to_lowercase().contains(&needle)
                && entry.file_name.to_lowercase().ends_with(&suffix)
        }))
    }

    /// Create or overwrite the entry for `display_name`
    fn write(&self, display_name: &str, file_name: &str) -> Result<()>;

    /// Remove the entry for `display_name`; `false` if there was none
    fn delete(&self, display_name: &str) -> Result<bool>;

    /// Whether an entry named exactly `display_name` exists
    fn exists(&self, display_name: &str) -> Result<bool>;
}

/// Open the ledger backend selected by the configuration
pub fn open_ledger(config: &FontsyncConfig) -> Result<Box<dyn FontLedger>> {
    match config.ledger_backend() {
        LedgerBackend::File => Ok(Box::new(FileLedger::in_directory(
            &config.destination_dir(),
        ))),
        #[cfg(windows)]
        LedgerBackend::Registry => Ok(Box::new(RegistryLedger::new())),
        #[cfg(not(windows))]
        LedgerBackend::Registry => Err(fontsync_core::Error::invalid_config(
            "ledger 'registry' is only available on Windows; use 'file'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive_substring_with_suffix() {
        let ledger = MemoryLedger::new();
        ledger.write("Arial Narrow (TrueType)", "ARIALN.TTF").unwrap();

        let hit = ledger.find_by_substring_and_suffix("arial", ".ttf").unwrap();
        assert_eq!(
            hit,
            Some(LedgerEntry::new("Arial Narrow (TrueType)", "ARIALN.TTF"))
        );
        assert!(ledger
            .find_by_substring_and_suffix("arial", ".otf")
            .unwrap()
            .is_none());
        assert!(ledger
            .find_by_substring_and_suffix("Helvetica", ".ttf")
            .unwrap()
            .is_none());
    }
}
