//! Hand-built font binaries
//!
//! Each face carries only the tables a parser needs to accept it (`head`,
//! `hhea`, `maxp`) plus a `name` table with the requested family records.
//! Table offsets are absolute, as in a real collection.

#![allow(dead_code)]

/// Windows language id for US English
pub const EN_US: u16 = 0x0409;
/// Windows language id for German
pub const DE_DE: u16 = 0x0407;

const TRUETYPE_MAGIC: u32 = 0x0001_0000;
const OPENTYPE_MAGIC: u32 = u32::from_be_bytes(*b"OTTO");
const COLLECTION_MAGIC: u32 = u32::from_be_bytes(*b"ttcf");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    TrueType,
    OpenType,
}

impl Flavor {
    fn magic(self) -> u32 {
        match self {
            Flavor::TrueType => TRUETYPE_MAGIC,
            Flavor::OpenType => OPENTYPE_MAGIC,
        }
    }
}

/// Single-face font whose only family record is `family` (Windows, en-US)
pub fn font_bytes(flavor: Flavor, family: &str) -> Vec<u8> {
    face_bytes(flavor, &[(EN_US, family)], 0)
}

/// Single-face font with several Windows family records `(language, name)`
pub fn font_bytes_with_names(flavor: Flavor, names: &[(u16, &str)]) -> Vec<u8> {
    face_bytes(flavor, names, 0)
}

/// TrueType collection with one face per family
pub fn collection_bytes(families: &[&str]) -> Vec<u8> {
    let header_len = 12 + 4 * families.len();
    let mut out = Vec::new();
    push_u32(&mut out, COLLECTION_MAGIC);
    push_u32(&mut out, 0x0001_0000);
    push_u32(&mut out, families.len() as u32);
    out.resize(header_len, 0);

    for (i, family) in families.iter().enumerate() {
        pad4(&mut out);
        let base = out.len();
        out[12 + 4 * i..16 + 4 * i].copy_from_slice(&(base as u32).to_be_bytes());
        out.extend(face_bytes(Flavor::TrueType, &[(EN_US, family)], base));
    }
    out
}

/// One face whose table offsets are relative to the start of the file,
/// `base` being where this face will be placed
fn face_bytes(flavor: Flavor, names: &[(u16, &str)], base: usize) -> Vec<u8> {
    // Sorted by tag
    let tables: [(&[u8; 4], Vec<u8>); 4] = [
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"maxp", maxp_table()),
        (b"name", name_table(names)),
    ];

    let directory_len = 12 + 16 * tables.len();
    let mut out = Vec::new();
    push_u32(&mut out, flavor.magic());
    push_u16(&mut out, tables.len() as u16);
    push_u16(&mut out, 64); // searchRange
    push_u16(&mut out, 2); // entrySelector
    push_u16(&mut out, 0); // rangeShift

    let mut body = Vec::new();
    for (tag, data) in &tables {
        let offset = base + directory_len + body.len();
        out.extend_from_slice(*tag);
        push_u32(&mut out, 0); // checksum
        push_u32(&mut out, offset as u32);
        push_u32(&mut out, data.len() as u32);
        body.extend_from_slice(data);
        pad4(&mut body);
    }

    out.extend(body);
    out
}

fn head_table() -> Vec<u8> {
    let mut t = vec![0u8; 54];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    t[18..20].copy_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = vec![0u8; 36];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[34..36].copy_from_slice(&1u16.to_be_bytes()); // numberOfHMetrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0000_5000);
    push_u16(&mut t, 1); // numGlyphs
    t
}

/// Format 0 name table holding only family (id 1) records
fn name_table(names: &[(u16, &str)]) -> Vec<u8> {
    let storage_offset = 6 + 12 * names.len();
    let mut records = Vec::new();
    let mut storage = Vec::new();

    for (language, name) in names {
        let encoded: Vec<u8> = name.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        push_u16(&mut records, 3); // Windows
        push_u16(&mut records, 1); // Unicode BMP
        push_u16(&mut records, *language);
        push_u16(&mut records, 1); // family
        push_u16(&mut records, encoded.len() as u16);
        push_u16(&mut records, storage.len() as u16);
        storage.extend(encoded);
    }

    let mut t = Vec::new();
    push_u16(&mut t, 0);
    push_u16(&mut t, names.len() as u16);
    push_u16(&mut t, storage_offset as u16);
    t.extend(records);
    t.extend(storage);
    t
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn pad4(out: &mut Vec<u8>) {
    while out.len() % 4 != 0 {
        out.push(0);
    }
}
