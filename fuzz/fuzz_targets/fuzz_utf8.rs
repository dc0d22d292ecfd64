#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcount_rs::{Scanner, WordStore};

fuzz_target!(|data: &[u8]| {
    // Invalid and truncated sequences are consumed one byte at a time
    let store = WordStore::default();
    let result = Scanner::new(&store).count_words(data);

    assert!(result.rune_count + result.invalid_byte_count <= data.len());

    // If data is valid UTF-8, runes and lines should match std
    if let Ok(s) = std::str::from_utf8(data) {
        assert_eq!(result.invalid_byte_count, 0);
        assert_eq!(result.rune_count, s.chars().count(), "valid UTF-8 rune count should match std");
        assert_eq!(result.line_count, 1 + s.matches('\n').count());
    } else {
        assert!(result.invalid_byte_count > 0);
    }
});
