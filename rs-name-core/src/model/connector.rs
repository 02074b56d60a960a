use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::alphabet::candidates_for;

/// Upper bound on connector draws before falling back to a deterministic pick.
///
/// Every candidate alphabet has at least five letters and at most two are excluded,
/// so this is never reached in practice.
const MAX_CONNECTOR_DRAWS: usize = 1_000;

/// A generated name split into its parts.
///
/// `Display` (and [`ComposedName::into_name`]) gives the final string:
/// `prefix + connector + suffix`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ComposedName {
	pub prefix: String,
	pub connector: Option<char>,
	pub suffix: String,
}

impl ComposedName {
	/// Length of the final name in characters.
	pub fn len(&self) -> usize {
		self.prefix.chars().count() + usize::from(self.connector.is_some()) + self.suffix.chars().count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn into_name(self) -> String {
		self.to_string()
	}
}

impl fmt::Display for ComposedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.prefix)?;
		if let Some(c) = self.connector {
			write!(f, "{}", c)?;
		}
		f.write_str(&self.suffix)
	}
}

/// Decides whether a connector goes between `prefix` and `suffix`, and which one.
///
/// A connector is inserted if any of these holds:
/// - a uniform draw in `[0, 1)` is below `middle_letter_chance`
/// - the prefix ends with the character the suffix starts with
/// - the plain concatenation is shorter than `max_length`
///
/// The uniform draw is always taken so the random stream does not depend on the other rules.
pub fn decide<R: Rng + ?Sized>(
	prefix: &str,
	suffix: &str,
	middle_letter_chance: f32,
	max_length: usize,
	rng: &mut R,
) -> ComposedName {
	let roll: f32 = rng.random();
	let combined_length = prefix.chars().count() + suffix.chars().count();

	let boundary_match = match (prefix.chars().next_back(), suffix.chars().next()) {
		(Some(last), Some(first)) => last == first,
		_ => false,
	};

	let insert = roll < middle_letter_chance || boundary_match || combined_length < max_length;
	let connector = if insert { pick_connector(prefix, suffix, rng) } else { None };

	ComposedName {
		prefix: prefix.to_owned(),
		connector,
		suffix: suffix.to_owned(),
	}
}

/// Picks a connecting letter for the boundary between `prefix` and `suffix`.
///
/// Returns `None` when either fragment is empty (there is no boundary to look at).
/// The connector differs from both boundary characters (exact comparison).
pub fn pick_connector<R: Rng + ?Sized>(prefix: &str, suffix: &str, rng: &mut R) -> Option<char> {
	let last = prefix.chars().next_back()?;
	let first = suffix.chars().next()?;
	let candidates = candidates_for(last, first);

	let allowed = |c: char| c != last && c != first;

	for _ in 0..MAX_CONNECTOR_DRAWS {
		let candidate = candidates[rng.random_range(0..candidates.len())];
		if allowed(candidate) {
			log::debug!("connector '{}' between '{}' and '{}'", candidate, last, first);
			return Some(candidate);
		}
	}

	candidates.iter().copied().find(|c| allowed(*c))
}
