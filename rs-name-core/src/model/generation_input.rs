use serde::{Deserialize, Serialize};

use crate::error::{NameGenError, Result};

/// Default minimum combined length of prefix + suffix.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default maximum combined length of prefix + suffix.
pub const DEFAULT_MAX_LENGTH: usize = 8;

/// Default probability of inserting a connector on its own.
pub const DEFAULT_MIDDLE_LETTER_CHANCE: f32 = 0.35;

/// Default ceiling on pair selection attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Parameters controlling name generation.
///
/// # Invariants (checked by [`GeneratorConfig::validate`])
/// - `min_length >= 1`
/// - `max_length >= min_length`
/// - `middle_letter_chance` in `[0.0, 1.0]`
/// - `max_attempts >= 1`
///
/// Deserializing does not validate; a [`crate::model::generator::NameGenerator`]
/// always validates its configuration when it is built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
	min_length: usize,
	max_length: usize,
	middle_letter_chance: f32,
	max_attempts: usize,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			min_length: DEFAULT_MIN_LENGTH,
			max_length: DEFAULT_MAX_LENGTH,
			middle_letter_chance: DEFAULT_MIDDLE_LETTER_CHANCE,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl GeneratorConfig {
	/// Creates a validated configuration with the default attempt ceiling.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if any invariant is broken.
	pub fn new(min_length: usize, max_length: usize, middle_letter_chance: f32) -> Result<Self> {
		let config = Self {
			min_length,
			max_length,
			middle_letter_chance,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		};
		config.validate()?;
		Ok(config)
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	pub fn middle_letter_chance(&self) -> f32 {
		self.middle_letter_chance
	}

	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Sets both length bounds at once.
	///
	/// # Errors
	/// Returns an error if `min_length` is zero or `max_length < min_length`.
	/// The configuration is left untouched on error.
	pub fn set_length_bounds(&mut self, min_length: usize, max_length: usize) -> Result<()> {
		check_lengths(min_length, max_length)?;
		self.min_length = min_length;
		self.max_length = max_length;
		Ok(())
	}

	/// Sets the middle letter chance (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range or NaN.
	pub fn set_middle_letter_chance(&mut self, middle_letter_chance: f32) -> Result<()> {
		check_chance(middle_letter_chance)?;
		self.middle_letter_chance = middle_letter_chance;
		Ok(())
	}

	/// Sets the attempt ceiling of the pair selector.
	///
	/// # Errors
	/// Returns an error if `max_attempts` is zero.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<()> {
		check_attempts(max_attempts)?;
		self.max_attempts = max_attempts;
		Ok(())
	}

	/// Checks every invariant.
	pub fn validate(&self) -> Result<()> {
		check_lengths(self.min_length, self.max_length)?;
		check_chance(self.middle_letter_chance)?;
		check_attempts(self.max_attempts)
	}
}

fn check_lengths(min_length: usize, max_length: usize) -> Result<()> {
	if min_length == 0 {
		return Err(NameGenError::InvalidConfiguration("min_length must be at least 1".to_owned()));
	}
	if max_length < min_length {
		return Err(NameGenError::InvalidConfiguration(format!(
			"max_length ({}) must be >= min_length ({})",
			max_length, min_length
		)));
	}
	Ok(())
}

fn check_chance(middle_letter_chance: f32) -> Result<()> {
	if !(0.0..=1.0).contains(&middle_letter_chance) {
		return Err(NameGenError::InvalidConfiguration(format!(
			"middle_letter_chance must be between 0.0 and 1.0, got {}",
			middle_letter_chance
		)));
	}
	Ok(())
}

fn check_attempts(max_attempts: usize) -> Result<()> {
	if max_attempts == 0 {
		return Err(NameGenError::InvalidConfiguration("max_attempts must be at least 1".to_owned()));
	}
	Ok(())
}
