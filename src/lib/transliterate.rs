//! Unicode to ASCII transliteration.
//!
//! Text first goes through NFD, loses its non-spacing marks and is recomposed
//! with NFC; whatever is still non-ASCII is then mapped through a
//! [`Transliterate`] oracle. Code points the oracle has no approximation for
//! map to the empty string and disappear from the output.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::classify::is_nonspacing_mark;

/// NFD, drop every non-spacing mark, NFC.
pub fn strip_accents(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let stripped: String = text.nfd().filter(|c| !is_nonspacing_mark(*c)).collect();
    stripped.nfc().collect()
}

/// Source of ASCII approximations for single code points.
pub trait Transliterate: Send + Sync {
    /// ASCII fragment for one code point; empty when unmapped.
    fn transliterate_rune(&self, c: char) -> &str;

    /// Full pipeline: strip accents, then transliterate what is left.
    fn to_ascii(&self, text: &str) -> String {
        let stripped = strip_accents(text);
        if stripped.is_ascii() {
            return stripped;
        }
        let mut out = String::with_capacity(stripped.len());
        for c in stripped.chars() {
            if c.is_ascii() {
                out.push(c);
            } else {
                out.push_str(self.transliterate_rune(c));
            }
        }
        out
    }
}

/// Oracle backed by the static `any_ascii` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyAscii;

impl Transliterate for AnyAscii {
    #[inline]
    fn transliterate_rune(&self, c: char) -> &str {
        any_ascii::any_ascii_char(c)
    }
}

/// Oracle built from an explicit table. ASCII passes through unchanged and
/// anything missing from the table maps to the empty string.
#[derive(Debug, Clone, Default)]
pub struct CharTable {
    table: HashMap<char, String>,
}

impl CharTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, c: char, ascii: impl Into<String>) -> Self {
        self.insert(c, ascii);
        self
    }

    pub fn insert(&mut self, c: char, ascii: impl Into<String>) {
        let ascii = ascii.into();
        debug_assert!(ascii.is_ascii(), "table entry for {:?} is not ASCII", c);
        self.table.insert(c, ascii);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for CharTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut table = CharTable::new();
        for (c, ascii) in iter {
            table.insert(c, ascii);
        }
        table
    }
}

impl Transliterate for CharTable {
    fn transliterate_rune(&self, c: char) -> &str {
        if c.is_ascii() {
            let i = c as usize;
            return &ASCII[i..i + 1];
        }
        self.table.get(&c).map(String::as_str).unwrap_or("")
    }
}

/// Transliterate `text` with the default [`AnyAscii`] oracle.
///
/// # Example
/// ```
/// assert_eq!(wordcount_rs::to_ascii("Ⓒⓔⓣⓣⓔ ⓕⓘⓛⓛⓔ ⓐⓘⓜⓔ ⓛⓘⓡⓔ"), "Cette fille aime lire");
/// assert_eq!(wordcount_rs::to_ascii("café"), "cafe");
/// ```
pub fn to_ascii(text: &str) -> String {
    AnyAscii.to_ascii(text)
}

/// Single code point variant of [`to_ascii`], used per rune by the scanner.
pub fn rune_to_ascii(c: char) -> &'static str {
    any_ascii::any_ascii_char(c)
}

// All 128 ASCII code points in order, sliced by code point value.
const ASCII: &str = "\
    \x00\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0A\x0B\x0C\x0D\x0E\x0F\
    \x10\x11\x12\x13\x14\x15\x16\x17\x18\x19\x1A\x1B\x1C\x1D\x1E\x1F\
    \x20\x21\x22\x23\x24\x25\x26\x27\x28\x29\x2A\x2B\x2C\x2D\x2E\x2F\
    \x30\x31\x32\x33\x34\x35\x36\x37\x38\x39\x3A\x3B\x3C\x3D\x3E\x3F\
    \x40\x41\x42\x43\x44\x45\x46\x47\x48\x49\x4A\x4B\x4C\x4D\x4E\x4F\
    \x50\x51\x52\x53\x54\x55\x56\x57\x58\x59\x5A\x5B\x5C\x5D\x5E\x5F\
    \x60\x61\x62\x63\x64\x65\x66\x67\x68\x69\x6A\x6B\x6C\x6D\x6E\x6F\
    \x70\x71\x72\x73\x74\x75\x76\x77\x78\x79\x7A\x7B\x7C\x7D\x7E\x7F";
