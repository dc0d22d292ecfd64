#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcount_rs::{Scanner, WordStore, WordStoreConfig};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes under every normalization policy: must never panic
    for fold_case in [false, true] {
        for strip_accents in [false, true] {
            let store = WordStore::new(WordStoreConfig {
                min_word_length: 0,
                fold_case,
                strip_accents,
            });
            let result = Scanner::new(&store).count_words(data);

            assert!(result.total_words >= result.distinct_words);
            assert!(result.rune_letter_count <= result.rune_count);
            assert_eq!(
                store.snapshot().values().sum::<usize>(),
                result.total_words,
                "table and total disagree"
            );
        }
    }
});
