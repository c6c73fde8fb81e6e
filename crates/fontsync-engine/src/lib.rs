//! Font reconciliation engine for fontsync
//!
//! This crate handles:
//! - Font family name extraction (`identifier`)
//! - Source tree discovery and deduplication (`catalog`)
//! - The display-name to file-name ledger and its backends (`ledger`)
//! - Per-font install with verification (`installer`)
//! - Reversal of installs for fonts still in the source (`uninstaller`)
//! - Source folder resolution across mounted drives (`source`)
//! - Destination preflight, session transcripts, and run summaries

pub mod catalog;
pub mod identifier;
pub mod installer;
pub mod ledger;
pub mod log_files;
pub mod preflight;
pub mod source;
pub mod summary;
pub mod uninstaller;

pub use catalog::FontCatalog;
pub use identifier::{FontIdentifier, IdentifyError};
pub use installer::{InstallEngine, InstallReport};
pub use ledger::{open_ledger, FileLedger, FontLedger, LedgerEntry, MemoryLedger};
#[cfg(windows)]
pub use ledger::RegistryLedger;
pub use log_files::TranscriptFiles;
pub use preflight::{prepare_destination, DestinationStatus};
pub use source::{locate_source, mounted_roots, resolve_source};
pub use summary::RunSummary;
pub use uninstaller::{UninstallReport, Uninstaller};
