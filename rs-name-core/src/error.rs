use std::fmt;
use std::io;

/// Identifies which of the two word lists an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
	Prefixes,
	Suffixes,
}

impl fmt::Display for ListKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ListKind::Prefixes => f.write_str("prefix"),
			ListKind::Suffixes => f.write_str("suffix"),
		}
	}
}

/// Error type for word list loading and name generation.
///
/// Three families are reported, each as its own variant:
/// - configuration errors, raised when a generator is built
/// - data errors, raised before any sampling starts
/// - exhaustion, raised when the pair selector runs out of attempts
///
/// `Io` only comes out of the file helpers; the generation path never touches the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum NameGenError {
	#[error("{0} word list is empty")]
	EmptyWordList(ListKind),
	#[error("no valid prefix/suffix pair found after {attempts} attempts")]
	NoValidPair { attempts: usize },
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),
	#[error("failed to read word list: {0}")]
	Io(#[from] io::Error),
}

impl NameGenError {
	/// Returns `true` for errors caused by the generator configuration.
	pub fn is_configuration(&self) -> bool {
		matches!(self, NameGenError::InvalidConfiguration(_))
	}
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, NameGenError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_list() {
		let err = NameGenError::EmptyWordList(ListKind::Suffixes);
		assert_eq!(err.to_string(), "suffix word list is empty");
	}

	#[test]
	fn exhaustion_reports_attempts() {
		let err = NameGenError::NoValidPair { attempts: 42 };
		assert_eq!(err.to_string(), "no valid prefix/suffix pair found after 42 attempts");
		assert!(!err.is_configuration());
	}

	#[test]
	fn io_errors_convert() {
		let err: NameGenError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
		assert!(matches!(err, NameGenError::Io(_)));
	}
}
