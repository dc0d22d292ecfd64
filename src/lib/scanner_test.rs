#[cfg(test)]
pub mod tests {
    use crate::scanner::{Rune, Scanner, decode};
    use crate::transliterate::CharTable;
    use crate::word_store::{WordStore, WordStoreConfig};
    use crate::CountResults;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use rstest_reuse;
    use rstest_reuse::*;
    use std::collections::BTreeMap;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    // Helper to create expected CountResults
    pub fn counts(
        line_count: usize,
        rune_count: usize,
        rune_letter_count: usize,
        invalid_byte_count: usize,
        distinct_words: usize,
        total_words: usize,
    ) -> CountResults {
        CountResults {
            line_count,
            rune_count,
            rune_letter_count,
            invalid_byte_count,
            distinct_words,
            total_words,
        }
    }

    fn store(min_word_length: usize) -> WordStore {
        WordStore::new(WordStoreConfig {
            min_word_length,
            fold_case: true,
            strip_accents: true,
        })
    }

    fn words(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(w, n)| (w.to_string(), *n)).collect()
    }

    // Template: inputs whose letters are all ASCII, so every transliterator
    // must agree on them.
    #[template]
    #[rstest]
    // Empty and whitespace-only buffers
    #[case::empty("", counts(1, 0, 0, 0, 0, 0))]
    #[case::spaces_and_newlines("  \n  \n", counts(3, 6, 0, 0, 0, 0))]
    #[case::punctuation_only("--- ...", counts(1, 7, 0, 0, 0, 0))]
    // Plain words
    #[case::sentence("Cette fille aime lire", counts(1, 21, 18, 0, 4, 4))]
    #[case::trailing_newline("hello\n", counts(2, 6, 5, 0, 1, 1))]
    #[case::repeated_word("one two one", counts(1, 11, 9, 0, 2, 3))]
    #[case::case_variants("Hello HELLO hello", counts(1, 17, 15, 0, 1, 3))]
    // Whitespace flavours all end a word
    #[case::tab_and_crlf("one\ttwo\r\nthree", counts(2, 14, 11, 0, 3, 3))]
    #[case::no_break_space("hello\u{00A0}world", counts(1, 11, 10, 0, 2, 2))]
    #[case::em_space("hello\u{2003}world", counts(1, 11, 10, 0, 2, 2))]
    // Non-letters are skipped without ending the word
    #[case::contraction("don't stop", counts(1, 10, 8, 0, 2, 2))]
    #[case::digits_inside_word("abc123def", counts(1, 9, 6, 0, 1, 1))]
    #[case::comma_joins("a,b c", counts(1, 5, 3, 0, 2, 2))]
    pub fn common_scan_cases(#[case] input: &str, #[case] expected: CountResults) {}

    #[apply(common_scan_cases)]
    fn test_count_words_any_ascii(input: &str, expected: CountResults) {
        let store = store(0);
        let result = Scanner::new(&store).count_words(input.as_bytes());
        assert_eq!(result, expected);
    }

    #[apply(common_scan_cases)]
    fn test_count_words_stub_table(input: &str, expected: CountResults) {
        let store = store(0);
        let result = Scanner::with_transliterator(&store, CharTable::new()).count_words(input.as_bytes());
        assert_eq!(result, expected);
    }

    #[test]
    fn test_sentence_words() {
        let store = store(0);
        Scanner::new(&store).count_words("Cette fille aime lire".as_bytes());
        assert_eq!(
            store.snapshot(),
            words(&[("aime", 1), ("cette", 1), ("fille", 1), ("lire", 1)])
        );
    }

    #[test]
    fn test_accented_variants_accumulate() {
        let store = WordStore::default();
        let result = Scanner::new(&store).count_words("Café CAFE café".as_bytes());
        assert_eq!(result, counts(1, 14, 12, 0, 1, 3));
        assert_eq!(store.snapshot(), words(&[("cafe", 3)]));
    }

    #[test]
    fn test_non_latin_letters_are_transliterated() {
        let store = WordStore::default();
        let result = Scanner::new(&store).count_words("Привет мир".as_bytes());
        assert_eq!(result.rune_letter_count, 9);
        assert_eq!(store.snapshot(), words(&[("mir", 1), ("privet", 1)]));
    }

    #[test]
    fn test_circled_symbols_are_not_letters() {
        let store = WordStore::default();
        let result = Scanner::new(&store).count_words("Ⓒⓔⓣⓣⓔ ⓕⓘⓛⓛⓔ".as_bytes());
        assert_eq!(result, counts(1, 11, 0, 0, 0, 0));
    }

    #[test]
    fn test_newline_resets_the_word() {
        let store = store(0);
        Scanner::new(&store).count_words(b"ab\ncd");
        assert_eq!(store.snapshot(), words(&[("ab", 1), ("cd", 1)]));
    }

    #[test]
    fn test_minimum_length_filter() {
        let store = store(2);
        let result = Scanner::new(&store).count_words(b"a bb ccc");
        assert_eq!(result.total_words, 1);
        assert_eq!(store.snapshot(), words(&[("ccc", 1)]));
    }

    #[test]
    fn test_stub_table_drives_transliteration() {
        let store = store(0);
        let table = CharTable::new().with('ж', "zh");
        let result = Scanner::with_transliterator(&store, table).count_words("жук".as_bytes());
        // Letters the table does not know contribute nothing to the word.
        assert_eq!(result.rune_letter_count, 3);
        assert_eq!(store.snapshot(), words(&[("zh", 1)]));
    }

    #[test]
    fn test_shared_store_reports_cumulative_totals() {
        let store = store(0);
        let scanner = Scanner::new(&store);
        scanner.count_words(b"one two");
        let second = scanner.count_words(b"two three");
        assert_eq!(second.distinct_words, 3);
        assert_eq!(second.total_words, 4);
        assert_eq!(second.line_count, 1);
        assert!(std::ptr::eq(scanner.store(), &store));
    }

    #[rstest]
    #[case::leading_invalid_byte(b"\xFFhello world", counts(1, 11, 10, 1, 2, 2))]
    #[case::invalid_byte_inside_word(b"hel\xFFlo", counts(1, 5, 5, 1, 1, 1))]
    #[case::truncated_sequence(b"ab\xE2\x9C cd", counts(1, 5, 4, 2, 2, 2))]
    #[case::lone_continuation_bytes(b"\x80\x80\nok", counts(2, 3, 2, 2, 1, 1))]
    #[case::overlong_encoding(b"\xC0\xAFx", counts(1, 1, 1, 2, 1, 1))]
    #[case::only_invalid(b"\xFE\xFF", counts(1, 0, 0, 2, 0, 0))]
    fn test_malformed_input_completes(#[case] input: &[u8], #[case] expected: CountResults) {
        let store = store(0);
        let result = Scanner::new(&store).count_words(input);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_decode_reports_offsets_and_widths() {
        let decoded: Vec<(usize, usize, Rune)> = decode(b"a\xC3\xA9\xFFz")
            .map(|d| (d.offset, d.width, d.rune))
            .collect();
        assert_eq!(
            decoded,
            vec![
                (0, 1, Rune::Char('a')),
                (1, 2, Rune::Char('é')),
                (3, 1, Rune::Invalid(0xFF)),
                (4, 1, Rune::Char('z')),
            ]
        );
    }

    #[test]
    fn test_analyse_rows() {
        let store = store(0);
        let scanner = Scanner::new(&store);
        let rows: Vec<_> = scanner.analyse(b"a\nb\xFF").collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].to_string(),
            "[1:0](0)\t      97\t  0x61\tU+0061 'a'\t['a']\t(graphic,letter,lower case,printable)"
        );
        assert_eq!((rows[1].line, rows[1].column, rows[1].offset), (2, 0, 2));
        assert_eq!(rows[2].rune, Rune::Invalid(0xFF));
        assert_eq!(rows[2].to_string(), "[2:1](3)\t     255\t  0xff\tinvalid utf8");
        assert_eq!(store.total_word_count(), 0);
    }

    #[test]
    fn test_analyse_reports_ascii_fragment() {
        let store = store(0);
        let scanner = Scanner::new(&store);
        let rows: Vec<_> = scanner.analyse("é!".as_bytes()).collect();
        assert_eq!(rows[0].ascii, "e");
        assert_eq!(rows[1].column, 2);
        assert!(rows[1].to_string().ends_with("['!']\t(graphic,printable,punct)"));
    }

    #[test]
    fn test_analyse_is_lazy() {
        let store = store(0);
        let scanner = Scanner::new(&store);
        let buf = "日本語".repeat(1_000);
        let mut rows = scanner.analyse(buf.as_bytes());
        let first = rows.next().unwrap();
        assert_eq!((first.offset, first.rune), (0, Rune::Char('日')));
        assert_eq!(rows.next().unwrap().offset, 3);
    }

    // Collects formatted tracing output of the current thread.
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl Write for LogCapture {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogCapture {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect()
        }
    }

    fn scan_with_logs(input: &[u8]) -> Vec<String> {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let store = store(0);
            Scanner::new(&store).count_words(input);
        });
        capture.lines()
    }

    #[test]
    fn test_invalid_byte_emits_warning_with_offset_and_byte() {
        let lines = scan_with_logs(b"\xFFab");
        let warnings: Vec<&String> = lines
            .iter()
            .filter(|l| l.contains("invalid utf8 encoding"))
            .collect();
        assert_eq!(warnings.len(), 1, "lines: {:#?}", lines);
        let warning = warnings[0];
        assert!(warning.contains("WARN"), "{}", warning);
        assert!(warning.contains("offset=0"), "{}", warning);
        assert!(warning.contains("byte=0xff"), "{}", warning);
    }

    #[test]
    fn test_discarded_rune_is_reported() {
        let lines = scan_with_logs(b"a,b\xC0");
        let discarded: Vec<&String> = lines.iter().filter(|l| l.contains("discarded")).collect();
        assert_eq!(discarded.len(), 1, "lines: {:#?}", lines);
        assert!(discarded[0].contains("code_point=U+002C"), "{}", discarded[0]);
        assert!(discarded[0].contains("categories=graphic,printable,punct"), "{}", discarded[0]);
        let warnings = lines.iter().filter(|l| l.contains("byte=0xc0")).count();
        assert_eq!(warnings, 1, "lines: {:#?}", lines);
    }

    proptest! {
        #[test]
        fn prop_total_ge_distinct(input in prop::collection::vec(any::<u8>(), 0..256), min in 0usize..4) {
            let store = store(min);
            let result = Scanner::new(&store).count_words(&input);
            prop_assert!(result.total_words >= result.distinct_words);
        }

        #[test]
        fn prop_every_byte_is_accounted_for(input in prop::collection::vec(any::<u8>(), 0..256)) {
            let widths: usize = decode(&input).map(|d| d.width).sum();
            prop_assert_eq!(widths, input.len());

            let store = store(0);
            let result = Scanner::new(&store).count_words(&input);
            prop_assert!(result.rune_count + result.invalid_byte_count <= input.len());
            if let Ok(text) = std::str::from_utf8(&input) {
                prop_assert_eq!(result.invalid_byte_count, 0);
                prop_assert_eq!(result.rune_count, text.chars().count());
                prop_assert_eq!(result.line_count, 1 + text.matches('\n').count());
            }
        }

        #[test]
        fn prop_matches_split_on_whitespace(input in "[a-zA-Z \t\n]{0,64}", min in 0usize..4) {
            let store = WordStore::new(WordStoreConfig {
                min_word_length: min,
                fold_case: false,
                strip_accents: false,
            });
            let result = Scanner::new(&store).count_words(input.as_bytes());

            let mut expected: BTreeMap<String, usize> = BTreeMap::new();
            for word in input.split_whitespace().filter(|w| w.chars().count() > min) {
                *expected.entry(word.to_string()).or_insert(0) += 1;
            }
            prop_assert_eq!(result.total_words, expected.values().sum::<usize>());
            prop_assert_eq!(store.snapshot(), expected);
        }
    }
}
