use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::error::FuzzError;

/// Characters used by default for substitutions and insertions:
/// ASCII lowercase, ASCII uppercase, then digits.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Set of characters random substitutions and insertions are drawn from.
///
/// ## Invariants
/// - Never empty
/// - No duplicate characters (so every member is equally likely)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
	chars: Vec<char>,
}

impl Alphabet {
	/// Builds an alphabet from the characters of `chars`.
	///
	/// Duplicates are dropped, keeping the first occurrence.
	///
	/// # Errors
	/// Returns `FuzzError::EmptyAlphabet` if `chars` is empty.
	pub fn new(chars: &str) -> Result<Self, FuzzError> {
		let mut unique: Vec<char> = Vec::new();
		for c in chars.chars() {
			if !unique.contains(&c) {
				unique.push(c);
			}
		}
		if unique.is_empty() {
			return Err(FuzzError::EmptyAlphabet);
		}
		Ok(Self { chars: unique })
	}

	/// Picks one character uniformly at random.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> char {
		// Non-empty by construction
		self.chars[rng.random_range(0..self.chars.len())]
	}

	pub fn contains(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}
}

impl Default for Alphabet {
	fn default() -> Self {
		Self { chars: DEFAULT_ALPHABET.chars().collect() }
	}
}

impl TryFrom<String> for Alphabet {
	type Error = FuzzError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Alphabet::new(&value)
	}
}

impl From<Alphabet> for String {
	fn from(alphabet: Alphabet) -> Self {
		alphabet.chars.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn default_is_ascii_alphanumeric() {
		let alphabet = Alphabet::default();
		assert_eq!(alphabet.len(), 62);
		assert!(alphabet.contains('a'));
		assert!(alphabet.contains('Z'));
		assert!(alphabet.contains('7'));
		assert!(!alphabet.contains('!'));
	}

	#[test]
	fn empty_alphabet_is_rejected() {
		assert!(matches!(Alphabet::new(""), Err(FuzzError::EmptyAlphabet)));
	}

	#[test]
	fn duplicates_are_dropped() {
		let alphabet = Alphabet::new("abcabcé").unwrap();
		assert_eq!(alphabet.len(), 4);
		assert_eq!(String::from(alphabet), "abcé");
	}

	#[test]
	fn pick_stays_in_alphabet() {
		let alphabet = Alphabet::new("xyz").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			assert!(alphabet.contains(alphabet.pick(&mut rng)));
		}
	}

	#[test]
	fn single_char_alphabet_always_picks_it() {
		let alphabet = Alphabet::new("#").unwrap();
		let mut rng = StdRng::seed_from_u64(1);
		assert!((0..50).all(|_| alphabet.pick(&mut rng) == '#'));
	}

	#[test]
	fn deserialize_rejects_empty_string() {
		assert!(serde_json::from_str::<Alphabet>("\"\"").is_err());
		let alphabet: Alphabet = serde_json::from_str("\"01\"").unwrap();
		assert_eq!(alphabet, Alphabet::new("01").unwrap());
	}
}
