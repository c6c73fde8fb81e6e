//! Per-session transcript files
//!
//! Each run writes a debug-level transcript to
//! `<log dir>/transcripts/<timestamp>.log`, next to the configured log
//! file. Old transcripts are pruned at start-up.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Days a transcript is kept before being pruned
pub const TRANSCRIPT_RETENTION_DAYS: i64 = 30;

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Manages the transcript directory
pub struct TranscriptFiles {
    dir: PathBuf,
}

impl TranscriptFiles {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Transcripts live in a `transcripts` directory beside `log_file`
    pub fn for_log_file(log_file: &Path) -> Self {
        let log_dir = log_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(log_dir.join("transcripts"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory and return the path for a session started at
    /// `timestamp`
    pub fn new_transcript_path(&self, timestamp: DateTime<Utc>) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!(
                "Failed to create transcript directory: {}",
                self.dir.display()
            )
        })?;
        Ok(self
            .dir
            .join(format!("{}.log", timestamp.format(TIMESTAMP_FORMAT))))
    }

    /// Remove transcripts older than `retention_days`
    ///
    /// Returns the number of files removed. Files whose names are not
    /// transcript timestamps are left alone; failures on individual files
    /// are logged and skipped.
    pub fn cleanup_old_transcripts(&self, retention_days: i64) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }

        let cutoff = Utc::now() - chrono::Duration::days(retention_days);
        let mut removed = 0;

        let entries = std::fs::read_dir(&self.dir).context("Failed to read transcript directory")?;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(ts) = parse_transcript_timestamp(&path) {
                if ts < cutoff {
                    if let Err(e) = std::fs::remove_file(&path) {
                        warn!("Failed to remove old transcript {}: {}", path.display(), e);
                    } else {
                        removed += 1;
                    }
                }
            }
        }

        debug!("Pruned {} transcript(s) from {}", removed, self.dir.display());
        Ok(removed)
    }
}

/// Parse a timestamp from a file name like "20260213T143022Z.log"
fn parse_transcript_timestamp(path: &Path) -> Option<DateTime<Utc>> {
    if path.extension()? != "log" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    chrono::NaiveDateTime::parse_from_str(stem, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_transcripts_sit_beside_log_file() {
        let files = TranscriptFiles::for_log_file(Path::new("/var/log/fontsync/fontsync.log"));
        assert_eq!(files.dir(), Path::new("/var/log/fontsync/transcripts"));

        let bare = TranscriptFiles::for_log_file(Path::new("fontsync.log"));
        assert_eq!(bare.dir(), Path::new("./transcripts"));
    }

    #[test]
    fn test_new_transcript_path() {
        let temp = TempDir::new().unwrap();
        let files = TranscriptFiles::new(temp.path().join("transcripts"));
        let ts = Utc.with_ymd_and_hms(2026, 2, 13, 14, 30, 22).unwrap();

        let path = files.new_transcript_path(ts).unwrap();
        assert!(files.dir().is_dir());
        assert!(path.ends_with("20260213T143022Z.log"));
    }

    #[test]
    fn test_cleanup_old_transcripts() {
        let temp = TempDir::new().unwrap();
        let files = TranscriptFiles::new(temp.path().to_path_buf());

        let old_name = "20240101T000000Z.log";
        std::fs::write(temp.path().join(old_name), "old").unwrap();
        let recent = Utc::now().format(TIMESTAMP_FORMAT).to_string() + ".log";
        std::fs::write(temp.path().join(&recent), "recent").unwrap();
        std::fs::write(temp.path().join("notes.log"), "kept").unwrap();

        let removed = files
            .cleanup_old_transcripts(TRANSCRIPT_RETENTION_DAYS)
            .unwrap();
        assert_eq!(removed, 1);
        assert!(!temp.path().join(old_name).exists());
        assert!(temp.path().join(&recent).exists());
        assert!(temp.path().join("notes.log").exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let temp = TempDir::new().unwrap();
        let files = TranscriptFiles::new(temp.path().join("missing"));
        assert_eq!(files.cleanup_old_transcripts(30).unwrap(), 0);
    }

    #[test]
    fn test_parse_transcript_timestamp_invalid() {
        assert!(parse_transcript_timestamp(Path::new("/tmp/garbage.log")).is_none());
        assert!(parse_transcript_timestamp(Path::new("/tmp/20260213T143022Z.txt")).is_none());
    }
}
