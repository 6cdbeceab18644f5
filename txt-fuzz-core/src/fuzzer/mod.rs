//! Character-level text fuzzing.
//!
//! - Fuzzing parameters and their validation (`FuzzConfig`)
//! - Replacement character sets (`Alphabet`)
//! - Per-character edit selection (`Edit`)
//! - The single-pass fuzzer itself (`TextFuzzer`)
//! - Edit counters (`FuzzReport`)

/// Replacement character set for substitutions and insertions.
pub mod alphabet;

/// Fuzzing parameters, validation and JSON loading.
pub mod config;

/// Per-character edit outcome and roll-to-edit mapping.
pub mod edit;

/// Counters for a fuzzing pass.
pub mod report;

/// High-level fuzzer applying edits over a whole text.
pub mod text_fuzzer;
