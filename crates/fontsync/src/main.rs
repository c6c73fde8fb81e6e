//! fontsync - install fonts from a synchronized folder
//!
//! This is the main entry point for the fontsync command-line interface.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use fontsync_core::FontsyncConfig;
use std::process::ExitCode;
use tracing::{debug, error};

use cli::Cli;

/// A fatal error stopped the run
const EXIT_FATAL: u8 = 1;
/// The configuration is missing or invalid
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match FontsyncConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&e.to_string());
            return ExitCode::from(if e.is_config_error() {
                EXIT_CONFIG
            } else {
                EXIT_FATAL
            });
        }
    };

    let targets = logging::init(&config, cli.verbose, cli.quiet);
    debug!(
        "Log file: {:?}, transcript: {:?}",
        targets.log_file, targets.transcript
    );

    match commands::run::run(&cli, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    let config_error = error
        .downcast_ref::<fontsync_core::Error>()
        .is_some_and(|e| e.is_config_error());
    ExitCode::from(if config_error { EXIT_CONFIG } else { EXIT_FATAL })
}
