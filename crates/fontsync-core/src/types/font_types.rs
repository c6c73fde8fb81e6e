//! Discovered font files, dedup keys, and resolved install candidates

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::DedupMode;

/// Type label used for extensions fontsync does not recognise
pub const UNKNOWN_TYPE_LABEL: &str = "(Font)";

/// Separator between face family names of a font collection
pub const COLLECTION_FAMILY_SEPARATOR: &str = " & ";

/// Font file format, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontType {
    /// `.ttf`
    TrueType,
    /// `.otf`
    OpenType,
    /// `.ttc`
    TrueTypeCollection,
    /// `.fon` bitmap fonts
    Raster,
}

impl FontType {
    /// Extensions the catalog picks up, lower-case and without the dot
    pub const EXTENSIONS: [&'static str; 4] = ["ttf", "otf", "ttc", "fon"];

    /// Parse an extension (with or without a leading dot, any case)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "ttf" => Some(Self::TrueType),
            "otf" => Some(Self::OpenType),
            "ttc" => Some(Self::TrueTypeCollection),
            "fon" => Some(Self::Raster),
            _ => None,
        }
    }

    /// Canonical lower-case extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TrueType => "ttf",
            Self::OpenType => "otf",
            Self::TrueTypeCollection => "ttc",
            Self::Raster => "fon",
        }
    }

    /// Parenthesised suffix used in ledger display names
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::TrueType => "(TrueType)",
            Self::OpenType => "(OpenType)",
            Self::TrueTypeCollection => "(TrueType Collection)",
            Self::Raster => "(All Res)",
        }
    }
}

/// Type label for an arbitrary extension, `(Font)` when unrecognised
pub fn type_label_for_extension(extension: &str) -> &'static str {
    FontType::from_extension(extension)
        .map(|t| t.type_label())
        .unwrap_or(UNKNOWN_TYPE_LABEL)
}

/// Ledger display name: `"<family> <type label>"`
pub fn registry_name(family: &str, extension: &str) -> String {
    format!("{} {}", family, type_label_for_extension(extension))
}

/// A font file found while scanning the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// File name without extension
    pub base_name: String,
    /// Lower-case extension, one of [`FontType::EXTENSIONS`]
    pub extension: String,
}

impl FontFile {
    /// Build a font file from a path, or `None` if the extension is not a font
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let font_type = FontType::from_extension(path.extension()?.to_str()?)?;
        let base_name = path.file_stem()?.to_string_lossy().into_owned();

        Some(Self {
            path,
            base_name,
            extension: font_type.extension().to_string(),
        })
    }

    /// Font type for this file
    pub fn font_type(&self) -> FontType {
        // `from_path` only accepts known extensions
        FontType::from_extension(&self.extension).unwrap_or(FontType::TrueType)
    }

    /// File name as it appears on disk (and in the destination directory)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", self.base_name, self.extension))
    }

    /// Dedup key of this file under the given mode
    pub fn dedup_key(&self, mode: DedupMode) -> DedupKey {
        DedupKey::new(self, mode)
    }
}

/// Key used to collapse discovered files into one install candidate
///
/// The base name is lowercased: Windows font directories and the ledger
/// lookup both ignore case, so `Foo.ttf` and `foo.ttf` are one font.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub base_name: String,
    /// `None` when the catalog keys on base name only
    pub extension: Option<String>,
}

impl DedupKey {
    pub fn new(file: &FontFile, mode: DedupMode) -> Self {
        let extension = match mode {
            DedupMode::Extension => Some(file.extension.clone()),
            DedupMode::BaseName => None,
        };
        Self {
            base_name: file.base_name.to_lowercase(),
            extension,
        }
    }
}

impl std::fmt::Display for DedupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.extension {
            Some(ext) => write!(f, "({}, {})", self.base_name, ext),
            None => write!(f, "({})", self.base_name),
        }
    }
}

/// The resolved install candidate for one dedup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    pub file: FontFile,
    /// Family names extracted from the font; a collection may expose several
    pub family_names: Vec<String>,
}

impl FontRecord {
    pub fn new(file: FontFile, family_names: Vec<String>) -> Self {
        Self { file, family_names }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }

    pub fn extension(&self) -> &str {
        &self.file.extension
    }

    pub fn file_name(&self) -> String {
        self.file.file_name()
    }

    /// Display family used for the ledger entry
    ///
    /// Collections register every face under one entry, so their family
    /// names are joined. Falls back to the base name when nothing was
    /// extracted.
    pub fn family(&self) -> String {
        if self.family_names.is_empty() {
            return self.file.base_name.clone();
        }
        self.family_names.join(COLLECTION_FAMILY_SEPARATOR)
    }

    /// Ledger display name, e.g. `"Arial Bold (TrueType)"`
    pub fn registry_name(&self) -> String {
        registry_name(&self.family(), self.extension())
    }
}
