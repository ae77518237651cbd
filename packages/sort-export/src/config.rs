//! Configuration constants and path helpers for sort-export.

use std::path::{Path, PathBuf};

use crate::error::{Result, SortExportError};

/// Extension of text exports ("Save Text" in the sort tool).
pub const TEXT_EXTENSION: &str = "txt";

/// Extension of sorted JSON documents.
pub const JSON_EXTENSION: &str = "json";

/// File name of the combined document written by `cat`.
///
/// Kept out of directory listings so re-running `cat` never merges a previous result.
pub const COMBINED_OUTPUT_FILE_NAME: &str = "cattedJSON.json";

/// Marker that ends every title line in a text export.
pub const TITLE_SUFFIX: char = ':';

/// Check that `path` is an existing regular file.
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SortExportError::InvalidPath(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(SortExportError::InvalidPath(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Check that `path` is an existing directory.
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SortExportError::InvalidPath(format!(
            "Directory does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(SortExportError::InvalidPath(format!(
            "Path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Output path for a converted text export: same path, `.json` extension.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use sort_export::config::converted_output_path;
///
/// assert_eq!(
///     converted_output_path(Path::new("rings/ring1.txt")),
///     Path::new("rings/ring1.json")
/// );
/// ```
#[must_use]
pub fn converted_output_path(input: &Path) -> PathBuf {
    input.with_extension(JSON_EXTENSION)
}

/// Output path for the combined document of a directory.
#[must_use]
pub fn combined_output_path(dir: &Path) -> PathBuf {
    dir.join(COMBINED_OUTPUT_FILE_NAME)
}
