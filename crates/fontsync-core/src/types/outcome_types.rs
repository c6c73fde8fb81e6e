//! Per-font lifecycle states and the outcomes reported for each font

use serde::{Deserialize, Serialize};

/// Install lifecycle of a single font within one run
///
/// ```text
/// Discovered -> CheckInstalled -> AlreadyInstalled
///                              -> ToInstall -> Copied -> Registered -> Verified
///                                                                  -> VerifyFailed
/// (Copy / Register failure)   -> InstallError
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontState {
    Discovered,
    CheckInstalled,
    AlreadyInstalled,
    ToInstall,
    Copied,
    Registered,
    Verified,
    VerifyFailed,
    InstallError,
}

impl FontState {
    /// Whether processing of the font stops in this state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::AlreadyInstalled | Self::Verified | Self::VerifyFailed | Self::InstallError
        )
    }
}

impl std::fmt::Display for FontState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Discovered => "discovered",
            Self::CheckInstalled => "check-installed",
            Self::AlreadyInstalled => "already-installed",
            Self::ToInstall => "to-install",
            Self::Copied => "copied",
            Self::Registered => "registered",
            Self::Verified => "verified",
            Self::VerifyFailed => "verify-failed",
            Self::InstallError => "install-error",
        };
        write!(f, "{}", s)
    }
}

/// Result of installing one font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InstallOutcome {
    /// A matching ledger entry already existed; nothing was touched
    AlreadyInstalled,
    /// Copied, registered, and verified
    Installed,
    /// Registered, but the ledger entry or file could not be confirmed
    VerifyFailed,
    /// Copy or ledger write failed
    Failed { reason: String },
}

impl InstallOutcome {
    /// Terminal lifecycle state this outcome corresponds to
    pub fn state(&self) -> FontState {
        match self {
            Self::AlreadyInstalled => FontState::AlreadyInstalled,
            Self::Installed => FontState::Verified,
            Self::VerifyFailed => FontState::VerifyFailed,
            Self::Failed { .. } => FontState::InstallError,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

/// Result of uninstalling one font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UninstallOutcome {
    /// The destination file was deleted
    Uninstalled { ledger_entry_removed: bool },
    /// No destination file existed
    FileNotFound { ledger_entry_removed: bool },
    /// Deleting the ledger entry or the file failed
    Failed { reason: String },
}

impl UninstallOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}
