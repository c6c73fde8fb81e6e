//! Type definitions for fontsync configuration and the font data model

mod config_types;
mod font_types;
mod outcome_types;

pub use config_types::*;
pub use font_types::*;
pub use outcome_types::*;
