use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::FuzzConfig;
use super::edit::Edit;
use super::report::FuzzReport;

/// Single-pass character fuzzer.
///
/// # Responsibilities
/// - Roll one edit per non-exempt character, left to right
/// - Draw replacement and inserted characters from the configured alphabet
/// - Count what it did in a `FuzzReport`
///
/// The random source is generic so tests (and callers that already own an
/// RNG) can drive it; `TextFuzzer::new` picks a `StdRng`.
#[derive(Debug)]
pub struct TextFuzzer<R: Rng = StdRng> {
	config: FuzzConfig,
	rng: R,
}

impl TextFuzzer<StdRng> {
	/// Creates a fuzzer from a configuration.
	///
	/// The RNG is seeded from `config.seed` when present, so the same seed and
	/// input always produce the same output. Otherwise it is seeded from the OS.
	///
	/// The configuration is expected to be validated already; out of range
	/// frequencies are not rejected here but still behave as cumulative
	/// thresholds.
	pub fn new(config: &FuzzConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self::with_rng(config, rng)
	}
}

impl<R: Rng> TextFuzzer<R> {
	/// Creates a fuzzer driven by the given random source. `config.seed` is ignored.
	pub fn with_rng(config: &FuzzConfig, rng: R) -> Self {
		Self { config: config.clone(), rng }
	}

	/// Fuzzes `text` and returns the mutated copy.
	pub fn fuzz(&mut self, text: &str) -> String {
		self.fuzz_with_report(text).0
	}

	/// Fuzzes `text`, returning the mutated copy and the edit counters.
	///
	/// # Notes
	/// - Iterates over `char`s, so multibyte characters are edited as a whole.
	/// - Exempt characters do not consume a roll: toggling an exemption only
	///   changes the rolls of characters after the first exempt one.
	pub fn fuzz_with_report(&mut self, text: &str) -> (String, FuzzReport) {
		let mut fuzzed = String::with_capacity(text.len());
		let mut report = FuzzReport::default();

		for c in text.chars() {
			let edit = if self.config.is_exempt(c) {
				Edit::Preserve
			} else {
				Edit::select(self.rng.random::<f64>(), &self.config)
			};

			match edit {
				Edit::Keep | Edit::Preserve => fuzzed.push(c),
				Edit::Substitute => fuzzed.push(self.config.alphabet.pick(&mut self.rng)),
				Edit::Insert => {
					fuzzed.push(self.config.alphabet.pick(&mut self.rng));
					fuzzed.push(c);
				}
				Edit::Delete => (),
			}
			report.record(edit);
		}

		debug!("Fuzz pass done: {}", report);
		(fuzzed, report)
	}
}

/// Fuzzes `text` once with a fresh fuzzer built from `config`.
pub fn fuzz_text(text: &str, config: &FuzzConfig) -> String {
	TextFuzzer::new(config).fuzz(text)
}
