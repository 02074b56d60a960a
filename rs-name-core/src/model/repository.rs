use std::path::Path;

use serde::Serialize;

use crate::error::{ListKind, Result};
use crate::io;
use crate::model::generation_input::GeneratorConfig;
use crate::model::generator::NameGenerator;
use crate::model::word_list::WordList;

/// Owns the prefix and suffix lists and lends them to generators.
///
/// # Behavior
/// - Starts empty; generating before a load fails with `EmptyWordList`
/// - Every reload parses first and swaps only on success, so a failed reload keeps
///   the previous lists
/// - `sources` records where each list came from (file stem or `"inline"`)
#[derive(Serialize, Debug, Default, Clone)]
pub struct WordListRepository {
	prefixes: WordList,
	suffixes: WordList,
	sources: WordListSources,
}

/// Where the loaded lists came from: a file stem, `"inline"`, or `None` before the first load.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct WordListSources {
	pub prefixes: Option<String>,
	pub suffixes: Option<String>,
}

const INLINE_SOURCE: &str = "inline";

impl WordListRepository {
	/// Creates a repository from raw prefix and suffix text.
	pub fn from_text(prefix_text: &str, suffix_text: &str) -> Result<Self> {
		let mut repository = Self::default();
		repository.reload_from_text(prefix_text, suffix_text)?;
		Ok(repository)
	}

	/// Creates a repository by loading two word list files.
	pub fn from_files<PP, PS>(prefix_path: PP, suffix_path: PS) -> Result<Self>
	where
		PP: AsRef<Path>,
		PS: AsRef<Path>,
	{
		let mut repository = Self::default();
		repository.reload_from_files(prefix_path, suffix_path)?;
		Ok(repository)
	}

	pub fn prefixes(&self) -> &WordList {
		&self.prefixes
	}

	pub fn suffixes(&self) -> &WordList {
		&self.suffixes
	}

	pub fn sources(&self) -> &WordListSources {
		&self.sources
	}

	pub fn is_loaded(&self) -> bool {
		!self.prefixes.is_empty() && !self.suffixes.is_empty()
	}

	/// Replaces both lists from raw text. Nothing changes unless both parse.
	pub fn reload_from_text(&mut self, prefix_text: &str, suffix_text: &str) -> Result<()> {
		let prefixes = WordList::load(prefix_text, ListKind::Prefixes)?;
		let suffixes = WordList::load(suffix_text, ListKind::Suffixes)?;
		self.prefixes = prefixes;
		self.suffixes = suffixes;
		self.sources = WordListSources {
			prefixes: Some(INLINE_SOURCE.to_owned()),
			suffixes: Some(INLINE_SOURCE.to_owned()),
		};
		Ok(())
	}

	/// Replaces both lists from files. Nothing changes unless both load.
	pub fn reload_from_files<PP, PS>(&mut self, prefix_path: PP, suffix_path: PS) -> Result<()>
	where
		PP: AsRef<Path>,
		PS: AsRef<Path>,
	{
		let prefixes = WordList::from_file(&prefix_path, ListKind::Prefixes)?;
		let suffixes = WordList::from_file(&suffix_path, ListKind::Suffixes)?;
		let sources = (io::get_filename(&prefix_path)?, io::get_filename(&suffix_path)?);

		log::info!(
			"loaded {} prefixes from '{}' and {} suffixes from '{}'",
			prefixes.len(),
			sources.0,
			suffixes.len(),
			sources.1
		);

		self.prefixes = prefixes;
		self.suffixes = suffixes;
		self.sources = WordListSources {
			prefixes: Some(sources.0),
			suffixes: Some(sources.1),
		};
		Ok(())
	}

	/// Replaces only one of the lists from raw text.
	pub fn reload_list(&mut self, kind: ListKind, raw_text: &str) -> Result<()> {
		let list = WordList::load(raw_text, kind)?;
		match kind {
			ListKind::Prefixes => {
				self.prefixes = list;
				self.sources.prefixes = Some(INLINE_SOURCE.to_owned());
			}
			ListKind::Suffixes => {
				self.suffixes = list;
				self.sources.suffixes = Some(INLINE_SOURCE.to_owned());
			}
		}
		Ok(())
	}

	/// Builds a generator borrowing this repository's lists.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `config` is invalid.
	pub fn generator(&self, config: GeneratorConfig) -> Result<NameGenerator<'_>> {
		NameGenerator::new(&self.prefixes, &self.suffixes, config)
	}
}
