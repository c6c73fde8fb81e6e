//! Configuration file types (fontsync.yaml)

use serde::{Deserialize, Serialize};

/// Root of a fontsync.yaml file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontsyncConfigFile {
    /// Directory the operating system loads fonts from
    pub destination_dir: String,

    /// Log file that lifecycle events are appended to
    pub log_file: String,

    /// Path of the synchronized font folder, relative to a drive root
    pub source_relative_path: String,

    /// How discovered files are collapsed into install candidates
    #[serde(default)]
    pub dedup: DedupMode,

    /// Which ledger backend records installed fonts
    #[serde(default)]
    pub ledger: LedgerBackend,
}

/// Dedup key strategy for the font catalog
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMode {
    /// Key on (base name, extension); `Foo.ttf` and `Foo.otf` are both kept
    #[default]
    Extension,
    /// Key on base name only; `Foo.otf` is preferred over `Foo.ttf`
    BaseName,
}

/// Font ledger backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerBackend {
    /// The Windows font registry key
    Registry,
    /// A JSON file kept in the destination directory
    File,
}

impl Default for LedgerBackend {
    fn default() -> Self {
        if cfg!(windows) {
            Self::Registry
        } else {
            Self::File
        }
    }
}

impl std::fmt::Display for LedgerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry => write!(f, "registry"),
            Self::File => write!(f, "file"),
        }
    }
}
