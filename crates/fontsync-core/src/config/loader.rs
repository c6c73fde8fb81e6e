//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::types::{DedupMode, FontsyncConfigFile, LedgerBackend};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::path::PathBuf;

/// Configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["fontsync.yaml", "fontsync.yml"];

/// Loaded and validated fontsync configuration
#[derive(Debug, Clone)]
pub struct FontsyncConfig {
    /// The parsed configuration
    pub config: FontsyncConfigFile,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,
}

impl FontsyncConfig {
    /// Load configuration from the specified path or search for it
    ///
    /// Without an explicit path the current directory and its parents are
    /// searched, then the directory holding the executable.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        Error::config_not_found(p.as_str())
                    } else {
                        Error::Io(e)
                    }
                })?;
                (p.to_owned(), content)
            }
            None => Self::find_config()?,
        };

        Self::from_yaml_str(&content, config_path)
    }

    /// Parse and validate configuration text
    pub fn from_yaml_str(content: &str, config_path: Utf8PathBuf) -> Result<Self> {
        let config: FontsyncConfigFile = serde_yaml_ng::from_str(content)?;
        let loaded = Self {
            config,
            config_path,
        };
        loaded.validate()?;

        tracing::debug!("Loaded configuration from {}", loaded.config_path);
        Ok(loaded)
    }

    /// Reject configurations whose required values are blank, or that name
    /// a ledger this platform cannot open
    fn validate(&self) -> Result<()> {
        let required = [
            ("destination_dir", &self.config.destination_dir),
            ("log_file", &self.config.log_file),
            ("source_relative_path", &self.config.source_relative_path),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "'{}' must not be empty in {}",
                    field, self.config_path
                )));
            }
        }

        if !cfg!(windows) && self.config.ledger == LedgerBackend::Registry {
            return Err(Error::invalid_config(format!(
                "ledger 'registry' is only available on Windows; use 'file' in {}",
                self.config_path
            )));
        }

        Ok(())
    }

    /// Find configuration file in current directory, its parents, or next
    /// to the executable
    fn find_config() -> Result<(Utf8PathBuf, String)> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;

        let mut current = Some(cwd.as_path());
        while let Some(dir) = current {
            if let Some(found) = Self::read_from_dir(dir)? {
                return Ok(found);
            }
            current = dir.parent();
        }

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .and_then(|dir| Utf8PathBuf::try_from(dir).ok());
        if let Some(dir) = exe_dir {
            if let Some(found) = Self::read_from_dir(&dir)? {
                return Ok(found);
            }
        }

        Err(Error::config_not_found(
            "fontsync.yaml (searched current and parent directories, and the executable directory)",
        ))
    }

    fn read_from_dir(dir: &Utf8Path) -> Result<Option<(Utf8PathBuf, String)>> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                let content = fs::read_to_string(&path)?;
                return Ok(Some((path, content)));
            }
        }
        Ok(None)
    }

    /// Directory fonts are copied into
    pub fn destination_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.destination_dir)
    }

    /// Log file lifecycle events are appended to
    pub fn log_file(&self) -> PathBuf {
        PathBuf::from(&self.config.log_file)
    }

    /// Source folder path relative to a drive root
    pub fn source_relative_path(&self) -> &str {
        &self.config.source_relative_path
    }

    pub fn dedup_mode(&self) -> DedupMode {
        self.config.dedup
    }

    pub fn ledger_backend(&self) -> LedgerBackend {
        self.config.ledger
    }
}
