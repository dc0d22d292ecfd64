// Library interface for wordcount-rs
// Exposes the scanner, word store and transliterator used by both binaries and the fuzz targets

pub mod classify;
mod error;
pub mod input;
pub mod output;
pub mod scanner;
#[cfg(test)]
mod scanner_test;
pub mod transliterate;
pub mod word_store;

pub use classify::{RuneCategories, RuneCategory, classify};
pub use error::{Error, Result};
pub use input::load_file;
pub use scanner::{Rune, RuneReport, Scanner};
pub use transliterate::{AnyAscii, CharTable, Transliterate, rune_to_ascii, strip_accents, to_ascii};
pub use word_store::{WordStore, WordStoreConfig};

use serde::Serialize;

/// Snapshot of the counters produced by one scan.
///
/// `line_count` starts at 1: a buffer without any `\n` is a single line.
/// Invalid UTF-8 bytes are reported separately and never counted as runes.
///
/// # Example
/// ```
/// use wordcount_rs::{Scanner, WordStore, WordStoreConfig};
///
/// let store = WordStore::new(WordStoreConfig::default());
/// let result = Scanner::new(&store).count_words("Cette fille aime lire".as_bytes());
/// assert_eq!(result.line_count, 1);
/// assert_eq!(result.total_words, 4);
/// assert_eq!(result.distinct_words, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountResults {
    pub line_count: usize,
    pub rune_count: usize,
    pub rune_letter_count: usize,
    pub invalid_byte_count: usize,
    pub distinct_words: usize,
    pub total_words: usize,
}
