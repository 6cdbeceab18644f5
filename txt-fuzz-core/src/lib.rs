//! Character-level text fuzzing library.
//!
//! This crate perturbs text for masking sensitive data in test fixtures:
//! - Random per-character substitutions, insertions and deletions
//! - Optional preservation of punctuation and whitespace
//! - Seeded, reproducible runs
//! - File helpers for reading inputs and writing fuzzed outputs

/// Fuzzing configuration, edit selection and the fuzzer itself.
pub mod fuzzer;

/// I/O utilities (text loading, output checks, default paths).
pub mod io;

/// Error type shared by every fallible operation.
pub mod error;

pub use error::FuzzError;
pub use fuzzer::alphabet::Alphabet;
pub use fuzzer::config::FuzzConfig;
pub use fuzzer::report::FuzzReport;
pub use fuzzer::text_fuzzer::{TextFuzzer, fuzz_text};
