//! Prefix/suffix fantasy name generation library.
//!
//! This crate provides a small name composition system including:
//! - Word lists of prefixes and suffixes loaded from newline-delimited text
//! - Constrained random pair selection with a bounded number of attempts
//! - Phonotactic middle letter insertion between the two fragments
//! - A typed error for configuration, data and exhaustion failures
//!
//! The random source is always supplied by the caller, so generation is
//! reproducible with a seeded generator.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rs_name_core::model::generation_input::GeneratorConfig;
//! use rs_name_core::model::repository::WordListRepository;
//!
//! let repository = WordListRepository::from_text("mor\nel\ntha", "wyn\nak\ndor")?;
//! let generator = repository.generator(GeneratorConfig::default())?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! println!("{}", generator.generate_name(&mut rng)?);
//! # Ok::<(), rs_name_core::error::NameGenError>(())
//! ```

/// Error taxonomy shared by every module.
pub mod error;

/// Core composition logic.
///
/// Exposes the generator, its configuration and the word list types.
pub mod model;

/// I/O utilities (file loading, path helpers).
///
/// Only used to feed word lists; generation itself never performs I/O.
pub mod io;
