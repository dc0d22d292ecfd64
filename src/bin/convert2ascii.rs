use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::io::{self, IsTerminal};
use tracing::{info, warn};
use wordcount_rs::to_ascii;

/// Renderings of the same sentence that must all come back as plain ASCII.
const CHECKS: &[(&str, &str)] = &[
    ("Ⓒⓔⓣⓣⓔ ⓕⓘⓛⓛⓔ ⓐⓘⓜⓔ ⓛⓘⓡⓔ", "Cette fille aime lire"),
    ("𝓒𝓮𝓽𝓽𝓮 𝓯𝓲𝓵𝓵𝓮 𝓪𝓲𝓶𝓮 𝓵𝓲𝓻𝓮", "Cette fille aime lire"),
    ("ℂ𝕖𝕥𝕥𝕖 𝕗𝕚𝕝𝕝𝕖 𝕒𝕚𝕞𝕖 𝕝𝕚𝕣𝕖", "Cette fille aime lire"),
    (
        "C\u{336}e\u{336}t\u{336}t\u{336}e\u{336} \u{336}f\u{336}i\u{336}l\u{336}l\u{336}e\u{336} \u{336}a\u{336}i\u{336}m\u{336}e\u{336} \u{336}l\u{336}i\u{336}r\u{336}e\u{336}",
        "Cette fille aime lire",
    ),
];

#[derive(Parser, Debug)]
#[command(
    name = "convert2ascii",
    version,
    about = "Print the ASCII transliteration of TEXT.",
    long_about = r#"Print the ASCII transliteration of TEXT.
Accents are removed and other non-ASCII characters are replaced by their closest ASCII equivalent."#
)]
struct ConvertArgs {
    /// Run the built-in conversion checks instead of converting TEXT
    #[arg(long = "check", action = ArgAction::SetTrue)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Unicode text to convert
    #[arg(value_name = "TEXT", required_unless_present = "check")]
    text: Option<String>,
}

fn main() {
    let args = ConvertArgs::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("convert2ascii: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &ConvertArgs) -> Result<()> {
    if let Some(text) = &args.text {
        println!("'{}'\t is equivalent in ASCII to:\t '{}'", text, to_ascii(text));
    }
    if args.check {
        run_checks()?;
    }
    Ok(())
}

fn run_checks() -> Result<()> {
    let mut failures = 0;
    for (input, expected) in CHECKS {
        let converted = to_ascii(input);
        if converted == *expected {
            println!("SUCCESS : '{}'\t is equivalent to:\t '{}'", input, expected);
        } else {
            warn!(input, expected, converted = converted.as_str(), "conversion mismatch");
            println!("FAILURE : '{}'\t did not convert to:\t '{}'", input, expected);
            failures += 1;
        }
    }
    info!(checks = CHECKS.len(), failures, "conversion checks finished");
    if failures > 0 {
        bail!("{} of {} conversion checks failed", failures, CHECKS.len());
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let default_level = match verbose {
        0 => "warn",
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
