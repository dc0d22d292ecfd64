//! Single-pass word scanner over a raw byte buffer.
//!
//! The buffer is decoded code point by code point. Letters are transliterated
//! and appended to the current word, whitespace and `\n` flush the word into
//! the [`WordStore`], everything else is reported and skipped without ending
//! the word. Invalid UTF-8 is consumed one byte at a time and reported.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::classify::{RuneCategories, classify, is_letter, is_space};
use crate::transliterate::{AnyAscii, Transliterate};
use crate::word_store::WordStore;
use crate::CountResults;

/// A decoded unit of the input: a code point or a byte that did not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rune {
    Char(char),
    Invalid(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub offset: usize,
    pub width: usize,
    pub rune: Rune,
}

/// Decode `buf` in order. Each byte of a malformed sequence comes out as its
/// own `Rune::Invalid` of width 1.
pub(crate) fn decode(buf: &[u8]) -> impl Iterator<Item = Decoded> + '_ {
    let mut offset = 0;
    buf.utf8_chunks().flat_map(move |chunk| {
        let start = offset;
        let valid = chunk.valid();
        let invalid = chunk.invalid();
        let invalid_start = start + valid.len();
        offset = invalid_start + invalid.len();

        let chars = valid.char_indices().map(move |(i, c)| Decoded {
            offset: start + i,
            width: c.len_utf8(),
            rune: Rune::Char(c),
        });
        let bytes = invalid.iter().enumerate().map(move |(i, b)| Decoded {
            offset: invalid_start + i,
            width: 1,
            rune: Rune::Invalid(*b),
        });
        chars.chain(bytes)
    })
}

/// Tokenizer feeding a shared [`WordStore`].
pub struct Scanner<'s, T: Transliterate = AnyAscii> {
    store: &'s WordStore,
    transliterator: T,
}

impl<'s> Scanner<'s> {
    pub fn new(store: &'s WordStore) -> Self {
        Self::with_transliterator(store, AnyAscii)
    }
}

impl<'s, T: Transliterate> Scanner<'s, T> {
    pub fn with_transliterator(store: &'s WordStore, transliterator: T) -> Self {
        Self {
            store,
            transliterator,
        }
    }

    pub fn store(&self) -> &'s WordStore {
        self.store
    }

    /// Scan the whole buffer and count its words. Never fails: malformed
    /// input is reported through `tracing` and skipped.
    ///
    /// `distinct_words` and `total_words` are read from the store after the
    /// scan, so a store shared between scans reports its cumulative totals.
    pub fn count_words(&self, buf: &[u8]) -> CountResults {
        let mut res = CountResults {
            line_count: 1,
            ..CountResults::default()
        };
        let mut line_start = 0;
        let mut word = String::new();

        for Decoded { offset, rune, .. } in decode(buf) {
            let col = offset - line_start;
            let c = match rune {
                Rune::Invalid(byte) => {
                    res.invalid_byte_count += 1;
                    warn!(
                        offset,
                        line = res.line_count,
                        col,
                        byte = %format!("{:#04x}", byte),
                        "invalid utf8 encoding"
                    );
                    continue;
                }
                Rune::Char(c) => c,
            };
            res.rune_count += 1;

            if c == '\n' {
                debug!(line = res.line_count, col, word = word.as_str(), "end of line");
                self.flush(&mut word);
                res.line_count += 1;
                line_start = offset + 1;
            } else if is_letter(c) {
                res.rune_letter_count += 1;
                if c.is_ascii() {
                    word.push(c);
                } else {
                    word.push_str(self.transliterator.transliterate_rune(c));
                }
            } else if is_space(c) {
                trace!(line = res.line_count, col, word = word.as_str(), "space");
                self.flush(&mut word);
            } else {
                trace!(
                    line = res.line_count,
                    rune = res.rune_count,
                    code_point = %format!("U+{:04X}", c as u32),
                    categories = %classify(c),
                    ascii = self.transliterator.transliterate_rune(c),
                    "discarded"
                );
            }
        }

        debug!(line = res.line_count, word = word.as_str(), "end of buffer");
        self.flush(&mut word);

        res.distinct_words = self.store.distinct_count();
        res.total_words = self.store.total_word_count();
        debug!(
            lines = res.line_count,
            words = res.total_words,
            runes = res.rune_count,
            letters = res.rune_letter_count,
            invalid = res.invalid_byte_count,
            "scan complete"
        );
        res
    }

    /// One report row per decoded unit except `\n`, which only advances the
    /// line. Rows are produced lazily and the store is never touched.
    pub fn analyse<'b>(&'b self, buf: &'b [u8]) -> impl Iterator<Item = RuneReport<'b>> + 'b {
        let mut line = 1;
        let mut line_start = 0;

        decode(buf).filter_map(move |Decoded { offset, width, rune }| {
            if rune == Rune::Char('\n') {
                line += 1;
                line_start = offset + width;
                return None;
            }
            let (ascii, categories) = match rune {
                Rune::Char(c) => (self.transliterator.transliterate_rune(c), classify(c)),
                Rune::Invalid(_) => ("", RuneCategories::empty()),
            };
            Some(RuneReport {
                line,
                column: offset - line_start,
                offset,
                rune,
                ascii,
                categories,
            })
        })
    }

    // Reuses the word's allocation.
    fn flush(&self, word: &mut String) {
        if !word.is_empty() && !self.store.add_word_count(word) {
            trace!(word = word.as_str(), "word too short, dropped");
        }
        word.clear();
    }
}

/// One row of the per-rune analysis table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneReport<'a> {
    pub line: usize,
    /// Byte offset from the start of the line.
    pub column: usize,
    pub offset: usize,
    pub rune: Rune,
    pub ascii: &'a str,
    pub categories: RuneCategories,
}

impl RuneReport<'_> {
    pub const HEADER: &'static str = "#[line:col](byte offset)\tdecimal\thex\tUnicode\tAscii\ttype";
}

impl fmt::Display for RuneReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]({})\t", self.line, self.column, self.offset)?;
        match self.rune {
            Rune::Char(c) => {
                let value = c as u32;
                write!(f, "{:8}\t{:#6x}\tU+{:04X}", value, value, value)?;
                if !c.is_control() {
                    write!(f, " '{}'", c)?;
                }
                write!(f, "\t['{}']\t({})", self.ascii, self.categories)
            }
            Rune::Invalid(byte) => write!(f, "{:8}\t{:#6x}\tinvalid utf8", byte, byte),
        }
    }
}
