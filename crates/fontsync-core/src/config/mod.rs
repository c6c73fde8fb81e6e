//! Configuration loading and management

mod loader;

pub use loader::{FontsyncConfig, CONFIG_FILE_NAMES};
