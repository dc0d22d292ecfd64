#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;
use wordcount_rs::{Scanner, WordStore, WordStoreConfig};

fuzz_target!(|data: &[u8]| {
    // Map fuzz bytes onto ASCII letters and whitespace so the expected words
    // can be computed with split_whitespace
    const ALPHABET: &[u8] = b"abcXYZ \t\n\r";
    let text: String = data
        .iter()
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect();
    let min = data.first().map(|b| (*b % 4) as usize).unwrap_or(0);

    let store = WordStore::new(WordStoreConfig {
        min_word_length: min,
        fold_case: false,
        strip_accents: false,
    });
    Scanner::new(&store).count_words(text.as_bytes());

    let mut expected: BTreeMap<String, usize> = BTreeMap::new();
    for word in text.split_whitespace().filter(|w| w.len() > min) {
        *expected.entry(word.to_string()).or_insert(0) += 1;
    }
    assert_eq!(store.snapshot(), expected);
});
