#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcount_rs::to_ascii;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let once = to_ascii(text);
    assert!(once.is_ascii());
    assert_eq!(to_ascii(&once), once, "transliteration is not idempotent");
    if text.is_ascii() {
        assert_eq!(once, text);
    }
});
