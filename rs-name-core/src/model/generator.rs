use rand::Rng;

use crate::error::{ListKind, NameGenError, Result};
use crate::model::connector::{self, ComposedName};
use crate::model::generation_input::GeneratorConfig;
use crate::model::pair_selector;
use crate::model::word_list::WordList;

/// High-level name generator.
///
/// # Responsibilities
/// - Borrow a prefix list and a suffix list for its whole lifetime
/// - Hold a validated, immutable `GeneratorConfig`
/// - Run pair selection then connector insertion for every name
///
/// The random source is passed to each call, so the generator itself holds no mutable
/// state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct NameGenerator<'a> {
	prefixes: &'a WordList,
	suffixes: &'a WordList,
	config: GeneratorConfig,
}

impl<'a> NameGenerator<'a> {
	/// Creates a generator over two word lists.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `config` breaks an invariant.
	/// Empty lists are accepted here and reported when a name is requested.
	pub fn new(prefixes: &'a WordList, suffixes: &'a WordList, config: GeneratorConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { prefixes, suffixes, config })
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Generates one name and keeps its parts.
	///
	/// # Errors
	/// - `EmptyWordList` if a list is empty
	/// - `NoValidPair` if no acceptable pair was found within `max_attempts`
	pub fn compose_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ComposedName> {
		self.ensure_lists()?;

		let pair = pair_selector::select(
			self.prefixes,
			self.suffixes,
			self.config.min_length(),
			self.config.max_length(),
			self.config.max_attempts(),
			rng,
		)?;

		Ok(connector::decide(
			pair.prefix,
			pair.suffix,
			self.config.middle_letter_chance(),
			self.config.max_length(),
			rng,
		))
	}

	/// Generates one name.
	pub fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		self.compose_name(rng).map(ComposedName::into_name)
	}

	/// Generates `count` independent names, in call order.
	///
	/// Duplicates are allowed. On error nothing is returned, not even the names
	/// produced before the failure.
	pub fn generate_names<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<String>> {
		let mut names = Vec::with_capacity(count);
		self.generate_names_into(count, &mut names, rng)?;
		Ok(names)
	}

	/// Clears `names` and fills it with `count` generated names.
	///
	/// `names` is left empty if generation fails.
	pub fn generate_names_into<R: Rng + ?Sized>(
		&self,
		count: usize,
		names: &mut Vec<String>,
		rng: &mut R,
	) -> Result<()> {
		names.clear();
		self.ensure_lists()?;

		for _ in 0..count {
			match self.generate_name(rng) {
				Ok(name) => names.push(name),
				Err(e) => {
					names.clear();
					return Err(e);
				}
			}
		}
		Ok(())
	}

	fn ensure_lists(&self) -> Result<()> {
		if self.prefixes.is_empty() {
			return Err(NameGenError::EmptyWordList(ListKind::Prefixes));
		}
		if self.suffixes.is_empty() {
			return Err(NameGenError::EmptyWordList(ListKind::Suffixes));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	fn lists() -> (WordList, WordList) {
		(
			WordList::load("mor\nel\ntha", ListKind::Prefixes).unwrap(),
			WordList::load("wyn\nak\ndor", ListKind::Suffixes).unwrap(),
		)
	}

	#[test]
	fn invalid_config_fails_at_construction() {
		let (prefixes, suffixes) = lists();
		let config: GeneratorConfig = serde_json_config(r#"{"min_length": 8, "max_length": 4}"#);
		let err = NameGenerator::new(&prefixes, &suffixes, config).unwrap_err();
		assert!(err.is_configuration());
	}

	#[test]
	fn empty_prefixes_error_instead_of_empty_string() {
		let (_, suffixes) = lists();
		let prefixes = WordList::default();
		let generator = NameGenerator::new(&prefixes, &suffixes, GeneratorConfig::default()).unwrap();
		let mut rng = ChaCha8Rng::seed_from_u64(1);

		assert!(matches!(
			generator.generate_name(&mut rng),
			Err(NameGenError::EmptyWordList(ListKind::Prefixes))
		));
	}

	#[test]
	fn generate_names_returns_exact_count() {
		let (prefixes, suffixes) = lists();
		let generator = NameGenerator::new(&prefixes, &suffixes, GeneratorConfig::default()).unwrap();
		let mut rng = ChaCha8Rng::seed_from_u64(2);

		let names = generator.generate_names(5, &mut rng).unwrap();
		assert_eq!(names.len(), 5);
		assert!(generator.generate_names(0, &mut rng).unwrap().is_empty());
	}

	#[test]
	fn generate_names_into_replaces_content() {
		let (prefixes, suffixes) = lists();
		let generator = NameGenerator::new(&prefixes, &suffixes, GeneratorConfig::default()).unwrap();
		let mut rng = ChaCha8Rng::seed_from_u64(3);

		let mut names = vec!["stale".to_owned()];
		generator.generate_names_into(3, &mut names, &mut rng).unwrap();
		assert_eq!(names.len(), 3);
		assert!(!names.contains(&"stale".to_owned()));
	}

	#[test]
	fn exhaustion_leaves_no_partial_output() {
		let prefixes = WordList::load("ab", ListKind::Prefixes).unwrap();
		let suffixes = WordList::load("cd", ListKind::Suffixes).unwrap();
		let mut config = GeneratorConfig::default();
		config.set_length_bounds(10, 12).unwrap();
		config.set_max_attempts(25).unwrap();
		let generator = NameGenerator::new(&prefixes, &suffixes, config).unwrap();
		let mut rng = ChaCha8Rng::seed_from_u64(4);

		let mut names = vec!["stale".to_owned()];
		let err = generator.generate_names_into(3, &mut names, &mut rng).unwrap_err();
		assert!(matches!(err, NameGenError::NoValidPair { attempts: 25 }));
		assert!(names.is_empty());
	}

	#[test]
	fn same_seed_same_names() {
		let (prefixes, suffixes) = lists();
		let generator = NameGenerator::new(&prefixes, &suffixes, GeneratorConfig::default()).unwrap();

		let first = generator.generate_names(20, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
		let second = generator.generate_names(20, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn composed_parts_come_from_the_lists() {
		let (prefixes, suffixes) = lists();
		let generator = NameGenerator::new(&prefixes, &suffixes, GeneratorConfig::new(4, 8, 0.0).unwrap()).unwrap();
		let mut rng = ChaCha8Rng::seed_from_u64(5);

		for _ in 0..50 {
			let name = generator.compose_name(&mut rng).unwrap();
			assert!(prefixes.iter().any(|p| p == name.prefix));
			assert!(suffixes.iter().any(|s| s == name.suffix));
			// Every pair here is at most 6 long, below max_length, so a connector is forced
			assert!(name.connector.is_some());
		}
	}

	fn serde_json_config(json: &str) -> GeneratorConfig {
		serde_json::from_str(json).unwrap()
	}
}
