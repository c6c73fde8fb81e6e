//! The install run: resolve, scan, install, then offer to uninstall

use anyhow::{Context, Result};
use dialoguer::Confirm;
use fontsync_core::types::InstallOutcome;
use fontsync_core::FontsyncConfig;
use fontsync_engine::{
    locate_source, open_ledger, prepare_destination, FontCatalog, InstallEngine, InstallReport,
    RunSummary,
};
use tracing::{error, info, warn};

use crate::cli::Cli;
use crate::commands::uninstall;
use crate::output;

pub fn run(cli: &Cli, config: &FontsyncConfig) -> Result<RunSummary> {
    info!(
        "fontsync {} starting (config: {})",
        env!("CARGO_PKG_VERSION"),
        config.config_path
    );

    let ledger = open_ledger(config)?;
    let source = locate_source(config.source_relative_path())?;
    let destination = config.destination_dir();
    prepare_destination(&destination)?;

    let catalog = FontCatalog::new(config.dedup_mode());
    let records = catalog.scan(&source)?;
    info!(
        "Found {} font(s) in {} (ledger: {})",
        records.len(),
        source.display(),
        config.ledger_backend()
    );

    if !cli.quiet {
        output::header(&format!("Installing fonts from {}", source.display()));
    }

    let mut summary = RunSummary::new(records.len());
    {
        let progress = output::ProgressGuard::new(output::progress_bar(
            records.len() as u64,
            "Installing fonts",
            cli.quiet,
        ));
        let engine = InstallEngine::new(ledger.as_ref(), &destination);
        engine.install_all_with_progress(&records, |current, _total, report| {
            progress.suspend(|| log_install(report));
            progress.set_position(current as u64);
            progress.set_message(report.family.clone());
            summary.record_install(&report.outcome);
        });
    }

    info!("Install pass complete: {}", summary);
    if !cli.quiet {
        if summary.has_problems() {
            output::warning(&summary.to_string());
        } else {
            output::success(&summary.to_string());
        }
    }

    if cli.silent {
        info!("Silent mode: skipping uninstall prompt");
    } else if confirm_uninstall()? {
        uninstall::run(&catalog, ledger.as_ref(), &destination, &source, &mut summary)?;
        info!("Run complete: {}", summary);
    } else if !cli.quiet {
        output::info("Fonts left installed");
    }

    Ok(summary)
}

fn log_install(report: &InstallReport) {
    let message = report.message();
    match report.outcome {
        InstallOutcome::Installed | InstallOutcome::AlreadyInstalled => info!("{}", message),
        InstallOutcome::VerifyFailed => warn!("{}", message),
        InstallOutcome::Failed { .. } => error!("{}", message),
    }
}

/// Ask whether to uninstall what was just installed; declined when there
/// is no terminal to ask on
fn confirm_uninstall() -> Result<bool> {
    if !console::Term::stderr().is_term() {
        info!("No interactive terminal: skipping uninstall prompt");
        return Ok(false);
    }
    let confirmed = Confirm::new()
        .with_prompt("Uninstall the fonts found in the source folder?")
        .default(false)
        .interact()
        .context("Failed to read uninstall confirmation")?;
    Ok(confirmed)
}
