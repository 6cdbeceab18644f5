use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use crate::error::FuzzError;

/// Tolerance applied to the sum of frequencies (`0.1 + 0.2 + 0.7` is not exactly `1.0`).
const TOTAL_EPSILON: f64 = 1e-9;

/// Fuzzing parameters.
///
/// Frequencies are per-character probabilities. A single roll in `[0, 1)` is
/// drawn for each non-exempt character and compared against the cumulative
/// thresholds `substitution`, `substitution + insertion`,
/// `substitution + insertion + deletion`.
///
/// # Invariants (checked by `validate`)
/// - Every frequency lies in `[0.0, 1.0]`
/// - The three frequencies sum to at most `1.0`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FuzzConfig {
	/// Probability of replacing a character with a random one.
	substitution_freq: f64,

	/// Probability of inserting a random character before a character.
	insertion_freq: f64,

	/// Probability of dropping a character.
	deletion_freq: f64,

	/// Pass ASCII punctuation through untouched.
	pub preserve_punctuation: bool,

	/// Pass whitespace through untouched.
	pub preserve_whitespace: bool,

	/// Seed for reproducible output. `None` seeds from the OS.
	pub seed: Option<u64>,

	/// Characters used for substitutions and insertions.
	pub alphabet: Alphabet,
}

impl Default for FuzzConfig {
	fn default() -> Self {
		Self {
			substitution_freq: 0.1,
			insertion_freq: 0.05,
			deletion_freq: 0.05,
			preserve_punctuation: false,
			preserve_whitespace: false,
			seed: None,
			alphabet: Alphabet::default(),
		}
	}
}

impl FuzzConfig {
	/// Creates a configuration with the default frequencies (0.1 / 0.05 / 0.05).
	pub fn new() -> Self {
		Self::default()
	}

	/// Configuration that never edits anything.
	pub fn identity() -> Self {
		Self { substitution_freq: 0.0, insertion_freq: 0.0, deletion_freq: 0.0, ..Self::default() }
	}

	/// Loads a configuration from a JSON file.
	///
	/// Missing fields take their default value. Unknown fields are rejected.
	///
	/// # Errors
	/// - `ConfigRead` if the file cannot be read
	/// - `ConfigParse` if it is not a valid configuration document
	/// - any validation error from `validate`
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FuzzError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.map_err(|source| FuzzError::ConfigRead { path: path.to_path_buf(), source })?;
		let config: FuzzConfig = serde_json::from_str(&contents)
			.map_err(|source| FuzzError::ConfigParse { path: path.to_path_buf(), source })?;
		config.validate()?;
		Ok(config)
	}

	pub fn substitution_freq(&self) -> f64 {
		self.substitution_freq
	}

	pub fn insertion_freq(&self) -> f64 {
		self.insertion_freq
	}

	pub fn deletion_freq(&self) -> f64 {
		self.deletion_freq
	}

	/// Sum of all edit frequencies, i.e. the probability that a non-exempt
	/// character is edited at all.
	pub fn total_freq(&self) -> f64 {
		self.substitution_freq + self.insertion_freq + self.deletion_freq
	}

	/// Sets the substitution frequency.
	///
	/// # Errors
	/// Returns an error if the value is outside `[0.0, 1.0]` (or NaN).
	/// The total is only checked by `validate`, so frequencies can be
	/// rebalanced one at a time.
	pub fn set_substitution_freq(&mut self, value: f64) -> Result<(), FuzzError> {
		self.substitution_freq = Self::check_freq("substitution", value)?;
		Ok(())
	}

	/// Sets the insertion frequency. See `set_substitution_freq`.
	pub fn set_insertion_freq(&mut self, value: f64) -> Result<(), FuzzError> {
		self.insertion_freq = Self::check_freq("insertion", value)?;
		Ok(())
	}

	/// Sets the deletion frequency. See `set_substitution_freq`.
	pub fn set_deletion_freq(&mut self, value: f64) -> Result<(), FuzzError> {
		self.deletion_freq = Self::check_freq("deletion", value)?;
		Ok(())
	}

	/// Checks every invariant of the configuration.
	pub fn validate(&self) -> Result<(), FuzzError> {
		Self::check_freq("substitution", self.substitution_freq)?;
		Self::check_freq("insertion", self.insertion_freq)?;
		Self::check_freq("deletion", self.deletion_freq)?;

		let total = self.total_freq();
		if total > 1.0 + TOTAL_EPSILON {
			return Err(FuzzError::TotalFrequency(total));
		}
		Ok(())
	}

	/// Whether `c` bypasses the random edits under this configuration.
	pub fn is_exempt(&self, c: char) -> bool {
		(self.preserve_punctuation && c.is_ascii_punctuation())
			|| (self.preserve_whitespace && c.is_whitespace())
	}

	fn check_freq(name: &'static str, value: f64) -> Result<f64, FuzzError> {
		if !(0.0..=1.0).contains(&value) {
			return Err(FuzzError::InvalidFrequency { name, value });
		}
		Ok(value)
	}
}
