//! Reversal of installs for fonts still present in the source tree
//!
//! Targets come from a fresh scan of the source, not from the ledger: a
//! font whose source file has been deleted is left installed.

use crate::catalog::FontCatalog;
use crate::ledger::FontLedger;
use fontsync_core::error::Result;
use fontsync_core::types::{FontRecord, UninstallOutcome};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of uninstalling one font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallReport {
    pub registry_name: String,
    pub file_name: String,
    pub outcome: UninstallOutcome,
}

impl UninstallReport {
    /// Human-readable log line for this report
    pub fn message(&self) -> String {
        match &self.outcome {
            UninstallOutcome::Uninstalled { .. } => {
                format!("Uninstalled font: {}", self.registry_name)
            }
            UninstallOutcome::FileNotFound { .. } => format!(
                "Font file not found: {} ({})",
                self.file_name, self.registry_name
            ),
            UninstallOutcome::Failed { reason } => {
                format!("Failed to uninstall font {}: {}", self.registry_name, reason)
            }
        }
    }
}

/// Removes ledger entries and destination files for fonts in the source
pub struct Uninstaller<'a> {
    catalog: &'a FontCatalog,
    ledger: &'a dyn FontLedger,
    destination_dir: PathBuf,
}

impl<'a> Uninstaller<'a> {
    pub fn new(
        catalog: &'a FontCatalog,
        ledger: &'a dyn FontLedger,
        destination_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            ledger,
            destination_dir: destination_dir.into(),
        }
    }

    /// Re-scan `source_dir` and uninstall every font found there
    ///
    /// A scan failure is returned as an error; per-font failures are
    /// reported in the individual outcomes.
    pub fn uninstall_all(&self, source_dir: &Path) -> Result<Vec<UninstallReport>> {
        let records = self.catalog.scan(source_dir)?;
        debug!("Uninstalling {} font(s) found in source", records.len());
        Ok(records.iter().map(|r| self.uninstall_report(r)).collect())
    }

    pub fn uninstall_report(&self, record: &FontRecord) -> UninstallReport {
        UninstallReport {
            registry_name: record.registry_name(),
            file_name: record.file_name(),
            outcome: self.uninstall(record),
        }
    }

    /// Delete the ledger entry and destination file for one font
    ///
    /// Both deletions are attempted even when the first fails; absence of
    /// either is not an error. Failures from both are joined into one reason.
    pub fn uninstall(&self, record: &FontRecord) -> UninstallOutcome {
        let registry_name = record.registry_name();
        let mut errors = Vec::new();

        let ledger_entry_removed = match self.ledger.delete(&registry_name) {
            Ok(removed) => removed,
            Err(e) => {
                errors.push(format!(
                    "Failed to remove ledger entry '{}': {}",
                    registry_name, e
                ));
                false
            }
        };

        let destination = self.destination_dir.join(record.file_name());
        let file_found = match std::fs::remove_file(&destination) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                errors.push(format!(
                    "Failed to delete {}: {}",
                    destination.display(),
                    e
                ));
                true
            }
        };

        if !errors.is_empty() {
            return UninstallOutcome::failed(errors.join("; "));
        }
        if file_found {
            UninstallOutcome::Uninstalled {
                ledger_entry_removed,
            }
        } else {
            UninstallOutcome::FileNotFound {
                ledger_entry_removed,
            }
        }
    }
}
