//! Top-level module for prefix/suffix name composition.
//!
//! This module provides:
//! - Fixed alphabets used to choose a connecting letter (`alphabet`)
//! - Word lists of prefixes and suffixes (`WordList`)
//! - Constrained random pair selection (`pair_selector`)
//! - Middle letter insertion (`connector`)
//! - Generation configuration (`GeneratorConfig`)
//! - A high-level generation interface (`NameGenerator`)
//! - Ownership and reloading of the word lists (`WordListRepository`)

/// Vowel, consonant and connector character sets.
pub mod alphabet;

/// Middle letter decision and the structured `ComposedName` output.
pub mod connector;

/// Validated generation parameters (length bounds, middle letter chance, attempt ceiling).
pub mod generation_input;

/// High-level interface producing one name or a batch of names.
///
/// Borrows the word lists read-only and takes the random source per call.
pub mod generator;

/// Rejection sampling of a prefix/suffix pair under length and distinctness rules.
pub mod pair_selector;

/// Owner of the loaded word lists, with atomic reloads from text or files.
pub mod repository;

/// Ordered, trimmed list of name fragments.
pub mod word_list;
