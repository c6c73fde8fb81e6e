//! Common test utilities for fontsync-engine
//!
//! - Minimal sfnt/TTC byte builders so the identifier can be exercised
//!   without binary fixtures
//! - Scratch source and destination trees

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod fonts;

pub use fixtures::*;
pub use fonts::*;
