//! Serialization of scan results.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::CountResults;

/// Everything a scan produced, in one serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub summary: CountResults,
    pub words: BTreeMap<String, usize>,
}

/// Word table as two-space indented JSON, keys sorted.
pub fn write_words_json<W: Write>(mut out: W, words: &BTreeMap<String, usize>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, words)?;
    writeln!(out)
}

/// Full report (summary and table) as indented JSON.
pub fn write_report_json<W: Write>(mut out: W, report: &WordReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)
}

/// Human-readable summary of a scan.
pub fn summary_line(res: &CountResults) -> String {
    format!(
        "Num lines: {},\tDistinct words: {},\tNum words: {},\tNum runes: {},\tNum letters: {}",
        res.line_count, res.distinct_words, res.total_words, res.rune_count, res.rune_letter_count
    )
}
