//! Uninstall pass, run only after the user confirms

use anyhow::Result;
use fontsync_core::types::UninstallOutcome;
use fontsync_engine::{FontCatalog, FontLedger, RunSummary, UninstallReport, Uninstaller};
use std::path::Path;
use tracing::{error, info, warn};

pub fn run(
    catalog: &FontCatalog,
    ledger: &dyn FontLedger,
    destination: &Path,
    source: &Path,
    summary: &mut RunSummary,
) -> Result<()> {
    info!("Uninstalling fonts found in {}", source.display());
    let reports = Uninstaller::new(catalog, ledger, destination).uninstall_all(source)?;
    for report in &reports {
        log_uninstall(report);
        summary.record_uninstall(&report.outcome);
    }
    Ok(())
}

fn log_uninstall(report: &UninstallReport) {
    let message = report.message();
    match report.outcome {
        UninstallOutcome::Uninstalled { .. } => info!("{}", message),
        UninstallOutcome::FileNotFound { .. } => warn!("{}", message),
        UninstallOutcome::Failed { .. } => error!("{}", message),
    }
}
