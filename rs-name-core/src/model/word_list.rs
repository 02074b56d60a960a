use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ListKind, NameGenError, Result};
use crate::io::read_text;

/// An ordered list of name fragments (prefixes or suffixes).
///
/// # Invariants
/// - Every entry is trimmed and non-empty
/// - Source order is preserved, duplicates are kept
///
/// A default `WordList` is empty and stands for "nothing loaded yet".
/// [`WordList::load`] never produces an empty list.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct WordList {
	entries: Vec<String>,
}

impl WordList {
	/// Builds a word list from raw multi-line text.
	///
	/// - Splits on `\n` / `\r\n`
	/// - Trims each line and drops blank ones
	///
	/// # Errors
	/// Returns `EmptyWordList` if no entry survives. `kind` only labels the error.
	pub fn load(raw_text: &str, kind: ListKind) -> Result<Self> {
		let entries: Vec<String> = raw_text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(str::to_owned)
			.collect();

		if entries.is_empty() {
			return Err(NameGenError::EmptyWordList(kind));
		}

		log::debug!("loaded {} {} entries", entries.len(), kind);
		Ok(Self { entries })
	}

	/// Reads a word list file and parses it with [`WordList::load`].
	///
	/// # Errors
	/// - `Io` if the file cannot be read
	/// - `EmptyWordList` if the file holds no usable line
	pub fn from_file<P: AsRef<Path>>(filepath: P, kind: ListKind) -> Result<Self> {
		let text = read_text(&filepath)?;
		Self::load(&text, kind)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.entries.get(index).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.entries
	}

	/// Draws one entry uniformly at random.
	///
	/// Returns `None` if the list is empty.
	pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.entries.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.entries.len());
		Some(&self.entries[index])
	}
}
