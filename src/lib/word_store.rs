use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::transliterate::strip_accents;

/// Word store settings, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStoreConfig {
    /// A word is kept only if its code-point length is strictly greater.
    pub min_word_length: usize,
    pub fold_case: bool,
    pub strip_accents: bool,
}

impl Default for WordStoreConfig {
    fn default() -> Self {
        Self {
            min_word_length: 1,
            fold_case: true,
            strip_accents: true,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    words: HashMap<String, usize>,
    total: usize,
}

/// Word frequency table keyed by the normalized word.
///
/// All access goes through an `RwLock`: snapshots and counters may be read
/// concurrently, every increment is exclusive.
#[derive(Debug)]
pub struct WordStore {
    config: WordStoreConfig,
    inner: RwLock<Inner>,
}

impl WordStore {
    pub fn new(config: WordStoreConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(Inner {
                words: HashMap::with_capacity(100),
                total: 0,
            }),
        }
    }

    pub fn config(&self) -> &WordStoreConfig {
        &self.config
    }

    /// Normalize `word` and count it. Returns `false` when the length filter
    /// rejects it, which includes the empty word.
    pub fn add_word_count(&self, word: &str) -> bool {
        if word.chars().count() <= self.config.min_word_length {
            return false;
        }
        let key = self.normalize(word);
        trace!(word, key = key.as_str(), "counting word");

        let mut inner = self.write();
        *inner.words.entry(key).or_insert(0) += 1;
        inner.total += 1;
        true
    }

    /// Number of distinct keys.
    pub fn distinct_count(&self) -> usize {
        self.read().words.len()
    }

    /// Accepted words, repeats included.
    pub fn total_word_count(&self) -> usize {
        self.read().total
    }

    /// Sorted copy of the table taken under the read lock.
    pub fn snapshot(&self) -> BTreeMap<String, usize> {
        let inner = self.read();
        inner
            .words
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    }

    /// Count for an already normalized key.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.read().words.get(key).copied()
    }

    fn normalize(&self, word: &str) -> String {
        let folded = if self.config.fold_case {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        if self.config.strip_accents {
            strip_accents(&folded)
        } else {
            folded
        }
    }

    // A panic while holding the lock cannot leave the table half-updated, so
    // a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new(WordStoreConfig::default())
    }
}
