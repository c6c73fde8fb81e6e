//! # fontsync-core
//!
//! Core library for fontsync providing:
//! - Configuration file parsing (fontsync.yaml)
//! - The error taxonomy shared by the engine and the CLI
//! - Type definitions for discovered fonts, ledger rows, and per-font outcomes

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::FontsyncConfig;
pub use error::{Error, Result};
pub use utils::get_home_dir;
