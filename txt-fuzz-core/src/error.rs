use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running the fuzzer.
///
/// The transformation itself never fails; every variant comes either from
/// configuration validation or from file I/O around it.
#[derive(Debug, Error)]
pub enum FuzzError {
	#[error("input file not found: {}", path.display())]
	InputNotFound { path: PathBuf },

	#[error("cannot read input {}: {source}", path.display())]
	Input {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("output file cannot be a directory: {}", path.display())]
	OutputIsDirectory { path: PathBuf },

	#[error("cannot derive an output file name from {}", input.display())]
	NoOutputName { input: PathBuf },

	#[error("cannot write output {}: {source}", path.display())]
	Output {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{name} frequency must be between 0 and 1, got {value}")]
	InvalidFrequency { name: &'static str, value: f64 },

	#[error("total modification probability cannot be greater than 1, got {0}")]
	TotalFrequency(f64),

	#[error("replacement alphabet cannot be empty")]
	EmptyAlphabet,

	#[error("cannot read config {}: {source}", path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("invalid config {}: {source}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl FuzzError {
	/// True for failures to locate or read the input text.
	pub fn is_input_error(&self) -> bool {
		matches!(self, FuzzError::InputNotFound { .. } | FuzzError::Input { .. })
	}
}
