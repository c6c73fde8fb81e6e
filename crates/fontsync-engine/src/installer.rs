//! Per-font install: check, copy, register, verify
//!
//! `install` never returns an error. Every failure is folded into the
//! returned [`InstallOutcome`] so a batch always runs to the end. Logging
//! of outcomes is left to the caller; only state transitions are traced
//! here.

use crate::ledger::FontLedger;
use anyhow::{Context, Result};
use fontsync_core::types::{FontRecord, FontState, InstallOutcome};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::trace;

/// Outcome of one font together with the names it was processed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReport {
    pub family: String,
    pub extension: String,
    pub registry_name: String,
    pub file_name: String,
    pub outcome: InstallOutcome,
}

impl InstallReport {
    /// Human-readable log line for this report
    pub fn message(&self) -> String {
        match &self.outcome {
            InstallOutcome::Installed => format!(
                "Installed font: {} (Type: {})",
                self.family, self.extension
            ),
            InstallOutcome::AlreadyInstalled => format!(
                "Font already installed: {} (Type: {})",
                self.family, self.extension
            ),
            InstallOutcome::VerifyFailed => format!(
                "Font {} was registered but could not be verified",
                self.registry_name
            ),
            InstallOutcome::Failed { reason } => {
                format!("Failed to install font {}: {}", self.family, reason)
            }
        }
    }
}

/// Installs fonts into a destination directory and records them in a ledger
pub struct InstallEngine<'a> {
    ledger: &'a dyn FontLedger,
    destination_dir: PathBuf,
}

impl<'a> InstallEngine<'a> {
    pub fn new(ledger: &'a dyn FontLedger, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            ledger,
            destination_dir: destination_dir.into(),
        }
    }

    /// Install every record in order
    pub fn install_all(&self, records: &[FontRecord]) -> Vec<InstallReport> {
        self.install_all_with_progress(records, |_, _, _| {})
    }

    /// Install every record in order, calling `progress(current, total, report)`
    /// after each font
    pub fn install_all_with_progress<F>(
        &self,
        records: &[FontRecord],
        mut progress: F,
    ) -> Vec<InstallReport>
    where
        F: FnMut(usize, usize, &InstallReport),
    {
        let total = records.len();
        let mut reports = Vec::with_capacity(total);

        for (i, record) in records.iter().enumerate() {
            let report = self.install_report(record);
            progress(i + 1, total, &report);
            reports.push(report);
        }

        reports
    }

    /// Install one record and describe the result
    pub fn install_report(&self, record: &FontRecord) -> InstallReport {
        InstallReport {
            family: record.family(),
            extension: record.extension().to_string(),
            registry_name: record.registry_name(),
            file_name: record.file_name(),
            outcome: self.install(record),
        }
    }

    /// Install one record
    pub fn install(&self, record: &FontRecord) -> InstallOutcome {
        trace_state(record, FontState::Discovered);
        match self.try_install(record) {
            Ok(outcome) => {
                trace_state(record, outcome.state());
                outcome
            }
            Err(e) => {
                trace_state(record, FontState::InstallError);
                InstallOutcome::failed(format!("{:#}", e))
            }
        }
    }

    /// Whether a ledger entry already covers `family` with this extension
    ///
    /// Matching is by case-insensitive substring, so "Arial" is considered
    /// installed when only "Arial Narrow" is registered.
    pub fn is_installed(&self, family: &str, extension: &str) -> Result<bool> {
        let suffix = format!(".{}", extension);
        let found = self
            .ledger
            .find_by_substring_and_suffix(family, &suffix)
            .context("Failed to query the font ledger")?;
        Ok(found.is_some())
    }

    fn try_install(&self, record: &FontRecord) -> Result<InstallOutcome> {
        let family = record.family();
        trace_state(record, FontState::CheckInstalled);
        if self.is_installed(&family, record.extension())? {
            return Ok(InstallOutcome::AlreadyInstalled);
        }
        trace_state(record, FontState::ToInstall);

        let file_name = record.file_name();
        let destination = self.destination_dir.join(&file_name);

        // An existing file of the same name counts as already copied
        if !destination.exists() {
            std::fs::copy(record.path(), &destination).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    record.path().display(),
                    destination.display()
                )
            })?;
        }
        trace_state(record, FontState::Copied);

        let registry_name = record.registry_name();
        self.ledger
            .write(&registry_name, &file_name)
            .with_context(|| format!("Failed to register '{}'", registry_name))?;
        trace_state(record, FontState::Registered);

        let registered = self
            .ledger
            .exists(&registry_name)
            .with_context(|| format!("Failed to verify '{}'", registry_name))?;

        if registered && destination.is_file() {
            Ok(InstallOutcome::Installed)
        } else {
            Ok(InstallOutcome::VerifyFailed)
        }
    }
}

fn trace_state(record: &FontRecord, state: FontState) {
    trace!(font = %record.file.base_name, state = %state, "font state");
}
