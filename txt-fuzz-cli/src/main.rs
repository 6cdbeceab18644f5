use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use txt_fuzz_core::io;
use txt_fuzz_core::{Alphabet, FuzzConfig, FuzzReport, TextFuzzer};

/// Fuzzes text files by introducing random character substitutions, insertions, and deletions.
///
/// Frequencies are per-character probabilities. Explicit flags override
/// values loaded with `--config`, which override the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "txt-fuzz", version)]
struct Args {
    /// Path to the input text file (`-` reads stdin).
    input: PathBuf,

    /// Path to the output text file (`-` writes stdout).
    /// Defaults to `<stem>.fuzzed.<ext>` next to the input, or stdout when reading stdin.
    output: Option<PathBuf>,

    /// Frequency of character substitutions (0.0-1.0) [default: 0.1].
    #[arg(long, alias = "substitution_freq", value_name = "FREQ", allow_negative_numbers = true)]
    substitution_freq: Option<f64>,

    /// Frequency of character insertions (0.0-1.0) [default: 0.05].
    #[arg(long, alias = "insertion_freq", value_name = "FREQ", allow_negative_numbers = true)]
    insertion_freq: Option<f64>,

    /// Frequency of character deletions (0.0-1.0) [default: 0.05].
    #[arg(long, alias = "deletion_freq", value_name = "FREQ", allow_negative_numbers = true)]
    deletion_freq: Option<f64>,

    /// Preserve punctuation marks during fuzzing.
    #[arg(long, alias = "preserve_punctuation", overrides_with = "no_preserve_punctuation")]
    preserve_punctuation: bool,

    /// Fuzz punctuation even if the config file preserves it.
    #[arg(long, overrides_with = "preserve_punctuation")]
    no_preserve_punctuation: bool,

    /// Preserve whitespace (keeps words and lines apart).
    #[arg(long, alias = "preserve_whitespace", overrides_with = "no_preserve_whitespace")]
    preserve_whitespace: bool,

    /// Fuzz whitespace even if the config file preserves it.
    #[arg(long, overrides_with = "preserve_whitespace")]
    no_preserve_whitespace: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Characters used for substitutions and insertions [default: ASCII letters and digits].
    #[arg(long, value_name = "CHARS")]
    alphabet: Option<String>,

    /// JSON file with fuzzing parameters.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Merges the config file (if any) and the explicit flags into a validated configuration.
    fn fuzz_config(&self) -> anyhow::Result<FuzzConfig> {
        let mut config = match &self.config {
            Some(path) => FuzzConfig::from_json_file(path)?,
            None => FuzzConfig::new(),
        };

        if let Some(freq) = self.substitution_freq {
            config.set_substitution_freq(freq)?;
        }
        if let Some(freq) = self.insertion_freq {
            config.set_insertion_freq(freq)?;
        }
        if let Some(freq) = self.deletion_freq {
            config.set_deletion_freq(freq)?;
        }
        if let Some(preserve) = switch(self.preserve_punctuation, self.no_preserve_punctuation) {
            config.preserve_punctuation = preserve;
        }
        if let Some(preserve) = switch(self.preserve_whitespace, self.no_preserve_whitespace) {
            config.preserve_whitespace = preserve;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(chars) = &self.alphabet {
            config.alphabet = Alphabet::new(chars)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Output destination, falling back to a path derived from the input.
    fn output_path(&self) -> anyhow::Result<PathBuf> {
        match &self.output {
            Some(path) => Ok(path.clone()),
            None if io::is_stdio(&self.input) => Ok(PathBuf::from(io::STDIO_PATH)),
            None => Ok(io::default_output_path(&self.input)?),
        }
    }
}

/// Resolves an `--x` / `--no-x` flag pair; `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Validates the arguments, fuzzes the input and writes the result.
fn run(args: &Args) -> anyhow::Result<FuzzReport> {
    let config = args.fuzz_config()?;
    let output = args.output_path()?;
    io::check_output(&output)?;

    info!("Fuzzing file: {}", args.input.display());
    let text = io::read_text(&args.input)?;

    let (fuzzed, report) = TextFuzzer::new(&config).fuzz_with_report(&text);
    io::write_text(&output, &fuzzed)?;
    info!("Fuzzed text saved to: {}", output.display());

    Ok(report)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(report) => {
            info!("{} edits: {}", report.edits(), report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
