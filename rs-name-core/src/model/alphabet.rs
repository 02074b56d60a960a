//! Fixed character sets used to pick a connecting letter.

/// Lowercase Latin vowels.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// The 21 lowercase Latin letters that are not in [`VOWELS`].
pub const CONSONANTS: &[char] = &[
	'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
	'y', 'z',
];

/// Vowel-heavy set used when one boundary is a vowel and the other is not.
pub const CONNECTORS: &[char] = &['a', 'e', 'i', 'o', 'u', 'l', 'n', 'r', 's', 't'];

/// Returns `true` if `c` is in [`VOWELS`].
///
/// Case-sensitive: uppercase vowels, digits, accented letters and punctuation
/// all count as consonants.
pub fn is_vowel(c: char) -> bool {
	VOWELS.contains(&c)
}

/// Picks the candidate alphabet for a connector from the two boundary characters.
///
/// - consonant / consonant → [`VOWELS`]
/// - vowel / vowel → [`CONSONANTS`]
/// - mixed → [`CONNECTORS`]
pub fn candidates_for(prefix_last: char, suffix_first: char) -> &'static [char] {
	match (is_vowel(prefix_last), is_vowel(suffix_first)) {
		(false, false) => VOWELS,
		(true, true) => CONSONANTS,
		_ => CONNECTORS,
	}
}
