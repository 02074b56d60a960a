use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Extension of word list files.
pub const WORD_LIST_EXTENSION: &str = "txt";

/// Reads a whole text file into a `String`.
///
/// Line splitting is left to [`crate::model::word_list::WordList::load`].
pub fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/elven.txt"` → `"elven"`
/// - `"elven.txt"` → `"elven"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Builds the path of a named word list inside `folder`.
///
/// `word_list_path("./data", "elven")` → `./data/elven.txt`
pub fn word_list_path<P: AsRef<Path>>(folder: P, name: &str) -> PathBuf {
	folder.as_ref().join(format!("{name}.{WORD_LIST_EXTENSION}"))
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Lists the word lists available in `folder`, by name (file stem, sorted).
pub fn list_word_lists<P: AsRef<Path>>(folder: P) -> io::Result<Vec<String>> {
	list_files(folder, WORD_LIST_EXTENSION)?
		.iter()
		.map(get_filename)
		.collect()
}

/// Resolves a word list name to its path inside `folder`.
///
/// Only bare names of lists present in `folder` are accepted, so the returned
/// path never leaves `folder`.
///
/// # Errors
/// - `InvalidInput` if `name` is empty or holds a path separator or `..`
/// - `NotFound` if no such list exists in `folder`
pub fn resolve_word_list<P: AsRef<Path>>(folder: P, name: &str) -> io::Result<PathBuf> {
	if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("Invalid word list name: {name:?}"),
		));
	}

	if !list_word_lists(&folder)?.iter().any(|available| available == name) {
		return Err(io::Error::new(
			io::ErrorKind::NotFound,
			format!("Unknown word list: {name}"),
		));
	}

	Ok(word_list_path(folder, name))
}
