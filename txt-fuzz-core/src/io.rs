use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::FuzzError;

/// Path standing for stdin (as input) or stdout (as output).
pub const STDIO_PATH: &str = "-";

/// Marker inserted before the extension of default output files.
const FUZZED_SUFFIX: &str = "fuzzed";

/// Whether `path` designates stdin/stdout rather than a file.
pub fn is_stdio<P: AsRef<Path>>(path: P) -> bool {
	path.as_ref() == Path::new(STDIO_PATH)
}

/// Reads a whole UTF-8 text file into memory.
///
/// - `-` reads stdin until EOF
///
/// # Errors
/// - `InputNotFound` if the file does not exist
/// - `Input` for any other read failure (permissions, directory, invalid UTF-8)
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, FuzzError> {
	let path = path.as_ref();
	let input_error = |source: io::Error| {
		if source.kind() == io::ErrorKind::NotFound {
			FuzzError::InputNotFound { path: path.to_path_buf() }
		} else {
			FuzzError::Input { path: path.to_path_buf(), source }
		}
	};

	let mut contents = String::new();
	if is_stdio(path) {
		io::stdin().lock().read_to_string(&mut contents).map_err(input_error)?;
	} else {
		if path.is_dir() {
			return Err(input_error(io::Error::new(io::ErrorKind::InvalidInput, "path is a directory")));
		}
		fs::File::open(path)
			.and_then(|mut file| file.read_to_string(&mut contents))
			.map_err(input_error)?;
	}

	debug!("Read {} bytes from {}", contents.len(), path.display());
	Ok(contents)
}

/// Checks that `path` can be used as an output destination.
///
/// # Errors
/// Returns `OutputIsDirectory` if the path is an existing directory.
pub fn check_output<P: AsRef<Path>>(path: P) -> Result<(), FuzzError> {
	let path = path.as_ref();
	if !is_stdio(path) && path.is_dir() {
		return Err(FuzzError::OutputIsDirectory { path: path.to_path_buf() });
	}
	Ok(())
}

/// Writes `text` to `path`, replacing any existing file.
///
/// - `-` writes to stdout
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), FuzzError> {
	let path = path.as_ref();
	check_output(path)?;
	let output_error = |source: io::Error| FuzzError::Output { path: path.to_path_buf(), source };

	if is_stdio(path) {
		let mut stdout = io::stdout().lock();
		stdout.write_all(text.as_bytes()).map_err(output_error)?;
		stdout.flush().map_err(output_error)?;
	} else {
		fs::write(path, text).map_err(output_error)?;
	}

	debug!("Wrote {} bytes to {}", text.len(), path.display());
	Ok(())
}

/// Builds the default output path for an input file.
///
/// Example:
/// `data/input.txt` → `data/input.fuzzed.txt`
/// `data/README` → `data/README.fuzzed`
///
/// # Errors
/// Returns `NoOutputName` if the input path has no file name (e.g. `..`).
pub fn default_output_path<P: AsRef<Path>>(input_path: P) -> Result<PathBuf, FuzzError> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| FuzzError::NoOutputName { input: input_path.to_path_buf() })?;

	let mut file_name = file_stem.to_os_string();
	file_name.push(".");
	file_name.push(FUZZED_SUFFIX);
	if let Some(extension) = input_path.extension() {
		file_name.push(".");
		file_name.push(extension);
	}

	Ok(parent.join(file_name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_utf8_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("input.txt");
		fs::write(&path, "héllo, wörld\n").unwrap();
		assert_eq!(read_text(&path).unwrap(), "héllo, wörld\n");
	}

	#[test]
	fn missing_input_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_text(dir.path().join("nope.txt")).unwrap_err();
		assert!(matches!(err, FuzzError::InputNotFound { .. }));
		assert!(err.is_input_error());
	}

	#[test]
	fn directory_input_is_an_input_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_text(dir.path()).unwrap_err();
		assert!(matches!(err, FuzzError::Input { .. }));
		assert!(err.is_input_error());
	}

	#[test]
	fn invalid_utf8_is_an_input_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("binary.dat");
		fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
		assert!(matches!(read_text(&path), Err(FuzzError::Input { .. })));
	}

	#[test]
	fn output_directory_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(check_output(dir.path()), Err(FuzzError::OutputIsDirectory { .. })));
		assert!(matches!(write_text(dir.path(), "x"), Err(FuzzError::OutputIsDirectory { .. })));
		assert!(check_output(dir.path().join("out.txt")).is_ok());
		assert!(check_output(STDIO_PATH).is_ok());
	}

	#[test]
	fn write_then_read_back() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.txt");
		fs::write(&path, "old contents that are longer").unwrap();
		write_text(&path, "new").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "new");
	}

	#[test]
	fn write_into_missing_directory_is_an_output_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing").join("out.txt");
		assert!(matches!(write_text(&path, "x"), Err(FuzzError::Output { .. })));
	}

	#[test]
	fn default_output_keeps_extension() {
		assert_eq!(
			default_output_path("data/input.txt").unwrap(),
			PathBuf::from("data/input.fuzzed.txt")
		);
		assert_eq!(default_output_path("README").unwrap(), PathBuf::from("README.fuzzed"));
		assert_eq!(
			default_output_path("notes.tar.gz").unwrap(),
			PathBuf::from("notes.tar.fuzzed.gz")
		);
		assert!(matches!(default_output_path(".."), Err(FuzzError::NoOutputName { .. })));
	}

	#[test]
	fn dash_is_stdio() {
		assert!(is_stdio("-"));
		assert!(!is_stdio("./-"));
		assert!(!is_stdio("input.txt"));
	}
}
