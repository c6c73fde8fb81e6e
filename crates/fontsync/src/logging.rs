//! Tracing initialisation
//!
//! Three layers share one registry:
//! - console, filtered by `-v`/`-q` (or `RUST_LOG`)
//! - the configured log file, appended at `info` and above
//! - a per-session transcript beside the log file at `debug` and above

use anyhow::{Context, Result};
use chrono::Utc;
use fontsync_core::FontsyncConfig;
use fontsync_engine::log_files::TRANSCRIPT_RETENTION_DAYS;
use fontsync_engine::TranscriptFiles;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where this session's logs went
#[derive(Debug, Default)]
pub struct LogTargets {
    pub log_file: Option<PathBuf>,
    pub transcript: Option<PathBuf>,
}

/// Console filter for the given verbosity flags
///
/// `RUST_LOG` overrides the flags when set.
pub fn console_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    }
}

/// Install the global subscriber
///
/// File layers are best effort: a log file or transcript that cannot be
/// opened is reported as a warning and the run continues with the
/// remaining layers.
pub fn init(config: &FontsyncConfig, verbose: u8, quiet: bool) -> LogTargets {
    let log_path = config.log_file();
    let transcripts = TranscriptFiles::for_log_file(&log_path);

    let mut problems = Vec::new();
    let log_file = open_append(&log_path)
        .map_err(|e| problems.push(format!("{:#}", e)))
        .ok();
    let transcript = transcripts
        .new_transcript_path(Utc::now())
        .and_then(|path| open_append(&path).map(|file| (path, file)))
        .map_err(|e| problems.push(format!("{:#}", e)))
        .ok();

    let targets = LogTargets {
        log_file: log_file.as_ref().map(|_| log_path.clone()),
        transcript: transcript.as_ref().map(|(path, _)| path.clone()),
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_filter(console_filter(verbose, quiet));

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::INFO)
    });

    let transcript_layer = transcript.map(|(_, file)| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(transcript_layer)
        .init();

    for problem in problems {
        warn!("Logging to file disabled: {}", problem);
    }

    match transcripts.cleanup_old_transcripts(TRANSCRIPT_RETENTION_DAYS) {
        Ok(removed) if removed > 0 => debug!("Removed {} old transcript(s)", removed),
        Ok(_) => {}
        Err(e) => warn!("Failed to prune old transcripts: {:#}", e),
    }

    targets
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
