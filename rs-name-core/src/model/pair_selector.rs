use rand::Rng;

use crate::error::{ListKind, NameGenError, Result};
use crate::model::word_list::WordList;

/// A prefix and a suffix accepted by [`select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
	pub prefix: &'a str,
	pub suffix: &'a str,
}

impl Pair<'_> {
	/// Combined length in characters (UTF-8 aware).
	pub fn combined_length(&self) -> usize {
		self.prefix.chars().count() + self.suffix.chars().count()
	}
}

/// Picks a prefix and a suffix by rejection sampling.
///
/// Each attempt draws one entry uniformly from each list. A pair is accepted when
/// - the lowercased prefix and suffix differ
/// - `min_length <= combined length <= max_length`
///
/// # Errors
/// - `EmptyWordList` if either list is empty (checked before sampling)
/// - `NoValidPair` after `max_attempts` rejected attempts
pub fn select<'a, R: Rng + ?Sized>(
	prefixes: &'a WordList,
	suffixes: &'a WordList,
	min_length: usize,
	max_length: usize,
	max_attempts: usize,
	rng: &mut R,
) -> Result<Pair<'a>> {
	if prefixes.is_empty() {
		return Err(NameGenError::EmptyWordList(ListKind::Prefixes));
	}
	if suffixes.is_empty() {
		return Err(NameGenError::EmptyWordList(ListKind::Suffixes));
	}

	for attempt in 1..=max_attempts {
		// Both lists are non-empty, so the draws always succeed
		let (Some(prefix), Some(suffix)) = (prefixes.random_entry(rng), suffixes.random_entry(rng)) else {
			break;
		};

		let pair = Pair { prefix, suffix };
		if is_acceptable(&pair, min_length, max_length) {
			log::trace!("accepted ({}, {}) after {} attempt(s)", prefix, suffix, attempt);
			return Ok(pair);
		}
	}

	log::warn!(
		"no pair within {}..={} characters after {} attempts",
		min_length,
		max_length,
		max_attempts
	);
	Err(NameGenError::NoValidPair { attempts: max_attempts })
}

/// Checks the acceptance rule of [`select`] for one candidate.
fn is_acceptable(pair: &Pair<'_>, min_length: usize, max_length: usize) -> bool {
	if pair.prefix.to_lowercase() == pair.suffix.to_lowercase() {
		return false;
	}
	let length = pair.combined_length();
	min_length <= length && length <= max_length
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	fn list(text: &str) -> WordList {
		WordList::load(text, ListKind::Prefixes).unwrap()
	}

	#[test]
	fn accepted_pairs_respect_bounds() {
		let prefixes = list("mor\nel\ntha\nx");
		let suffixes = list("wyn\nak\ndor\nbrandoril");
		let mut rng = ChaCha8Rng::seed_from_u64(3);

		for _ in 0..200 {
			let pair = select(&prefixes, &suffixes, 4, 6, 1000, &mut rng).unwrap();
			assert!((4..=6).contains(&pair.combined_length()));
		}
	}

	#[test]
	fn case_insensitive_duplicates_are_rejected() {
		assert!(!is_acceptable(&Pair { prefix: "Dor", suffix: "dOR" }, 1, 10));
		assert!(is_acceptable(&Pair { prefix: "dor", suffix: "dar" }, 1, 10));
	}

	#[test]
	fn length_counts_characters() {
		let pair = Pair { prefix: "é", suffix: "ä" };
		assert_eq!(pair.combined_length(), 2);
	}

	#[test]
	fn only_same_words_exhausts() {
		let prefixes = list("Ash");
		let suffixes = list("ash\nASH");
		let mut rng = ChaCha8Rng::seed_from_u64(0);

		let err = select(&prefixes, &suffixes, 1, 10, 50, &mut rng).unwrap_err();
		assert!(matches!(err, NameGenError::NoValidPair { attempts: 50 }));
	}

	#[test]
	fn unreachable_minimum_exhausts() {
		let prefixes = list("ab");
		let suffixes = list("cd");
		let mut rng = ChaCha8Rng::seed_from_u64(0);

		assert!(matches!(
			select(&prefixes, &suffixes, 10, 12, 20, &mut rng),
			Err(NameGenError::NoValidPair { .. })
		));
	}

	#[test]
	fn empty_lists_fail_before_sampling() {
		let filled = list("ab");
		let empty = WordList::default();
		let mut rng = ChaCha8Rng::seed_from_u64(0);

		assert!(matches!(
			select(&empty, &filled, 1, 10, 20, &mut rng),
			Err(NameGenError::EmptyWordList(ListKind::Prefixes))
		));
		assert!(matches!(
			select(&filled, &empty, 1, 10, 20, &mut rng),
			Err(NameGenError::EmptyWordList(ListKind::Suffixes))
		));
	}
}
