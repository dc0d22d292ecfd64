use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;
use wordcount_rs::output::{WordReport, summary_line, write_report_json, write_words_json};
use wordcount_rs::{RuneReport, Scanner, WordStore, WordStoreConfig, load_file};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ", ",
    env!("BUILD_TARGET"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "wordcount",
    version,
    long_version = LONG_VERSION,
    about = "Count the words of FILE after transliterating them to ASCII.",
    long_about = r#"Count the words of FILE after transliterating them to ASCII.
A word is the run of letters between two whitespace characters; other characters are skipped without ending the word.
The word table is printed as JSON followed by a summary line."#
)]
struct WordCountArgs {
    /// Minimum word length; shorter or equal words are not counted
    #[arg(short = 'n', long = "min-length", default_value_t = 1)]
    min_length: usize,

    /// Keep the original case instead of lower-casing words
    #[arg(long = "no-fold-case", action = ArgAction::SetTrue)]
    no_fold_case: bool,

    /// Keep accents in the word keys
    #[arg(long = "keep-accents", action = ArgAction::SetTrue)]
    keep_accents: bool,

    /// Print the per-rune analysis table before counting
    #[arg(short = 'a', long = "analyse", action = ArgAction::SetTrue)]
    analyse: bool,

    /// Print a single JSON document with the summary and the word table
    #[arg(short = 'j', long = "json-report", action = ArgAction::SetTrue)]
    json_report: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Text file to analyse
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,
}

impl WordCountArgs {
    fn store_config(&self) -> WordStoreConfig {
        WordStoreConfig {
            min_word_length: self.min_length,
            fold_case: !self.no_fold_case,
            strip_accents: !self.keep_accents,
        }
    }
}

fn main() {
    let args = WordCountArgs::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("wordcount: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &WordCountArgs) -> Result<()> {
    info!(file = %args.file.display(), "reading input");
    let content = load_file(&args.file)?;

    let store = WordStore::new(args.store_config());
    let scanner = Scanner::new(&store);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.analyse {
        print_analysis(&mut out, scanner.analyse(&content)).context("failed to write analysis")?;
    }

    let res = scanner.count_words(&content);
    let words = store.snapshot();

    if args.json_report {
        let report = WordReport {
            summary: res,
            words,
        };
        write_report_json(&mut out, &report).context("failed to write report")?;
    } else {
        write_words_json(&mut out, &words).context("failed to write word table")?;
        writeln!(out, "{}", summary_line(&res))?;
    }

    info!(
        distinct = res.distinct_words,
        total = res.total_words,
        invalid_bytes = res.invalid_byte_count,
        "done"
    );
    Ok(())
}

fn print_analysis<'a, W: Write>(
    out: &mut W,
    rows: impl Iterator<Item = RuneReport<'a>>,
) -> io::Result<()> {
    let mut line = 0;
    for row in rows {
        if row.line != line {
            line = row.line;
            writeln!(out, "### line {}", line)?;
            writeln!(out, "{}", RuneReport::HEADER)?;
        }
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
