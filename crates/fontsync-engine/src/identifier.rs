//! Font family name extraction
//!
//! Reads the `name` table of TrueType/OpenType fonts and collections.
//! Bitmap `.fon` files carry no portable family metadata, so their base
//! name is used. Extraction never fails from the caller's point of view:
//! a font that cannot be parsed is logged and identified by its base name.

use fontsync_core::types::{FontFile, FontType};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use ttf_parser::{name_id, Face, PlatformId};

/// Windows language id for US English
const LANGUAGE_EN_US: u16 = 0x0409;

/// Reasons a family name could not be read from a font
#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse face {index}: {source}")]
    Parse {
        index: u32,
        #[source]
        source: ttf_parser::FaceParsingError,
    },

    #[error("face {index} has no family name record")]
    NoFamilyName { index: u32 },
}

/// Maps font files to human-readable family names
#[derive(Debug, Clone, Copy, Default)]
pub struct FontIdentifier;

impl FontIdentifier {
    pub fn new() -> Self {
        Self
    }

    /// Family names for the font at `path`
    ///
    /// Returns `None` only for unsupported extensions. Parse failures fall
    /// back to the file's base name.
    pub fn identify(&self, path: &Path) -> Option<Vec<String>> {
        let file = FontFile::from_path(path)?;
        Some(self.identify_file(&file))
    }

    /// Family names for an already-classified font file
    pub fn identify_file(&self, file: &FontFile) -> Vec<String> {
        let font_type = file.font_type();
        if font_type == FontType::Raster {
            return vec![file.base_name.clone()];
        }

        match Self::read_family_names(&file.path, font_type) {
            Ok(names) => {
                debug!(
                    "Identified {} as {}",
                    file.path.display(),
                    names.join(", ")
                );
                names
            }
            Err(e) => {
                warn!(
                    "Could not read family name from {} ({}); using file name '{}'",
                    file.path.display(),
                    e,
                    file.base_name
                );
                vec![file.base_name.clone()]
            }
        }
    }

    fn read_family_names(path: &Path, font_type: FontType) -> Result<Vec<String>, IdentifyError> {
        let data = std::fs::read(path)?;

        let face_count = match font_type {
            FontType::TrueTypeCollection => ttf_parser::fonts_in_collection(&data).unwrap_or(1),
            _ => 1,
        };

        let mut names: Vec<String> = Vec::new();
        for index in 0..face_count {
            let face = Face::parse(&data, index)
                .map_err(|source| IdentifyError::Parse { index, source })?;
            let family = family_name(&face).ok_or(IdentifyError::NoFamilyName { index })?;
            // Faces of one collection commonly share a family
            if !names.contains(&family) {
                names.push(family);
            }
        }

        // A collection header that declares no faces
        if names.is_empty() {
            return Err(IdentifyError::NoFamilyName { index: 0 });
        }

        Ok(names)
    }
}

/// Primary family name (name id 1) of a face
///
/// A Windows US English record is preferred; otherwise the first record
/// that decodes as Unicode is used.
fn family_name(face: &Face<'_>) -> Option<String> {
    let mut fallback = None;

    for name in face.names() {
        if name.name_id != name_id::FAMILY {
            continue;
        }
        let Some(value) = name.to_string() else {
            continue;
        };
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }

        if name.platform_id == PlatformId::Windows && name.language_id == LANGUAGE_EN_US {
            return Some(value);
        }
        fallback.get_or_insert(value);
    }

    fallback
}
