use std::fmt;

use super::edit::Edit;

/// Counters collected during a single fuzzing pass.
///
/// ## Invariants
/// - `chars_read == kept + substituted + inserted + deleted + preserved`
/// - `chars_written == chars_read + inserted - deleted`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FuzzReport {
	pub chars_read: usize,
	pub chars_written: usize,
	pub kept: usize,
	pub substituted: usize,
	pub inserted: usize,
	pub deleted: usize,
	pub preserved: usize,
}

impl FuzzReport {
	/// Accounts for one input character handled with `edit`.
	pub(crate) fn record(&mut self, edit: Edit) {
		self.chars_read += 1;
		match edit {
			Edit::Keep => {
				self.kept += 1;
				self.chars_written += 1;
			}
			Edit::Substitute => {
				self.substituted += 1;
				self.chars_written += 1;
			}
			Edit::Insert => {
				self.inserted += 1;
				self.chars_written += 2;
			}
			Edit::Delete => self.deleted += 1,
			Edit::Preserve => {
				self.preserved += 1;
				self.chars_written += 1;
			}
		}
	}

	/// Number of characters that received an edit.
	pub fn edits(&self) -> usize {
		self.substituted + self.inserted + self.deleted
	}
}

impl fmt::Display for FuzzReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} chars in, {} out ({} substituted, {} inserted, {} deleted, {} preserved)",
			self.chars_read, self.chars_written, self.substituted, self.inserted, self.deleted, self.preserved
		)
	}
}
