//! Per-run outcome counters

use fontsync_core::types::{InstallOutcome, UninstallOutcome};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub discovered: usize,
    pub installed: usize,
    pub already_installed: usize,
    pub verify_failed: usize,
    pub install_failed: usize,
    pub uninstalled: usize,
    pub uninstall_file_not_found: usize,
    pub uninstall_failed: usize,
}

impl RunSummary {
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            ..Self::default()
        }
    }

    pub fn record_install(&mut self, outcome: &InstallOutcome) {
        match outcome {
            InstallOutcome::Installed => self.installed += 1,
            InstallOutcome::AlreadyInstalled => self.already_installed += 1,
            InstallOutcome::VerifyFailed => self.verify_failed += 1,
            InstallOutcome::Failed { .. } => self.install_failed += 1,
        }
    }

    pub fn record_uninstall(&mut self, outcome: &UninstallOutcome) {
        match outcome {
            UninstallOutcome::Uninstalled { .. } => self.uninstalled += 1,
            UninstallOutcome::FileNotFound { .. } => self.uninstall_file_not_found += 1,
            UninstallOutcome::Failed { .. } => self.uninstall_failed += 1,
        }
    }

    /// Any font that did not end up installed and verified
    pub fn has_problems(&self) -> bool {
        self.verify_failed + self.install_failed + self.uninstall_failed > 0
    }

    fn uninstall_total(&self) -> usize {
        self.uninstalled + self.uninstall_file_not_found + self.uninstall_failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} font(s) found: {} installed, {} already installed, {} unverified, {} failed",
            self.discovered,
            self.installed,
            self.already_installed,
            self.verify_failed,
            self.install_failed
        )?;
        if self.uninstall_total() > 0 {
            write!(
                f,
                "; uninstall: {} removed, {} file(s) missing, {} failed",
                self.uninstalled, self.uninstall_file_not_found, self.uninstall_failed
            )?;
        }
        Ok(())
    }
}
