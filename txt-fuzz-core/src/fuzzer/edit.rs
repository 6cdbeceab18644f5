use super::config::FuzzConfig;

/// What happens to a single input character.
///
/// Conceptually each non-exempt character rolls once against a distribution
/// whose buckets are the configured frequencies, the remainder being `Keep`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
	/// Copied through unchanged after a roll.
	Keep,
	/// Replaced by a random alphabet character.
	Substitute,
	/// Preceded by a random alphabet character.
	Insert,
	/// Dropped.
	Delete,
	/// Exempt from editing (no roll consumed).
	Preserve,
}

impl Edit {
	/// Maps a roll in `[0, 1)` to an edit.
	///
	/// The roll is compared against running totals of the frequencies:
	/// `[0, s)` substitutes, `[s, s + i)` inserts, `[s + i, s + i + d)` deletes,
	/// anything above keeps. A zero frequency yields an empty bucket.
	pub fn select(roll: f64, config: &FuzzConfig) -> Edit {
		let buckets = [
			(config.substitution_freq(), Edit::Substitute),
			(config.insertion_freq(), Edit::Insert),
			(config.deletion_freq(), Edit::Delete),
		];

		let mut threshold = 0.0;
		for (freq, edit) in buckets {
			threshold += freq;
			if roll < threshold {
				return edit;
			}
		}
		Edit::Keep
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(s: f64, i: f64, d: f64) -> FuzzConfig {
		let mut config = FuzzConfig::new();
		config.set_substitution_freq(s).unwrap();
		config.set_insertion_freq(i).unwrap();
		config.set_deletion_freq(d).unwrap();
		config
	}

	#[test]
	fn rolls_fall_into_cumulative_buckets() {
		let config = config(0.2, 0.3, 0.1);
		assert_eq!(Edit::select(0.0, &config), Edit::Substitute);
		assert_eq!(Edit::select(0.19, &config), Edit::Substitute);
		assert_eq!(Edit::select(0.2, &config), Edit::Insert);
		assert_eq!(Edit::select(0.49, &config), Edit::Insert);
		assert_eq!(Edit::select(0.55, &config), Edit::Delete);
		assert_eq!(Edit::select(0.61, &config), Edit::Keep);
		assert_eq!(Edit::select(0.999, &config), Edit::Keep);
	}

	#[test]
	fn rolls_on_a_threshold_go_to_the_next_bucket() {
		let narrow = config(0.16, 0.08, 0.23);
		assert_eq!(Edit::select(0.16, &narrow), Edit::Insert);
		assert_eq!(Edit::select(0.24, &narrow), Edit::Delete);
		assert_eq!(Edit::select(0.47, &narrow), Edit::Keep);

		let wide_insert = config(0.08, 0.81, 0.08);
		assert_eq!(Edit::select(0.97, &wide_insert), Edit::Keep);
	}

	#[test]
	fn selection_matches_running_sums() {
		for step in 0..=30u32 {
			let (s, i, d) = (step as f64 * 0.01, 0.33 - step as f64 * 0.01, 0.27);
			let config = config(s, i, d);
			for roll in [s, s + i, s + i + d] {
				let expected = if roll < s {
					Edit::Substitute
				} else if roll < s + i {
					Edit::Insert
				} else if roll < s + i + d {
					Edit::Delete
				} else {
					Edit::Keep
				};
				assert_eq!(Edit::select(roll, &config), expected, "s={s} i={i} d={d} roll={roll}");
			}
		}
	}

	#[test]
	fn zero_frequencies_always_keep() {
		let config = FuzzConfig::identity();
		for roll in [0.0, 0.25, 0.5, 0.999_999] {
			assert_eq!(Edit::select(roll, &config), Edit::Keep);
		}
	}

	#[test]
	fn empty_bucket_is_skipped() {
		let config = config(0.0, 0.0, 1.0);
		assert_eq!(Edit::select(0.0, &config), Edit::Delete);
		assert_eq!(Edit::select(0.999, &config), Edit::Delete);
	}
}
