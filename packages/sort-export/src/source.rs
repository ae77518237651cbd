//! Input sources: text exports on disk and directories of sorted JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{COMBINED_OUTPUT_FILE_NAME, JSON_EXTENSION};
use crate::error::{Result, SortExportError};

/// Split text into lines with surrounding whitespace removed.
///
/// A line holding only whitespace becomes empty and so acts as a separator.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Read a whole text export into memory as a line sequence.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| SortExportError::source_read(path, e))?;
    let lines = split_lines(&text);
    tracing::debug!(path = %path.display(), lines = lines.len(), "Read text export");
    Ok(lines)
}

/// List the sorted JSON files directly inside `dir`, sorted by file name.
///
/// Subdirectories and the combined output file are skipped.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(JSON_EXTENSION) {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(COMBINED_OUTPUT_FILE_NAME) {
            tracing::debug!(path = %path.display(), "Skipping previous combined output");
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_split_lines_strips_terminators_and_whitespace() {
        assert_eq!(
            split_lines("north:\r\n  river \n \t\nsouth:\n"),
            vec!["north:", "river", "", "south:"]
        );
    }

    #[test]
    fn test_split_lines_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring1.txt");
        fs::write(&path, "north:\nriver\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["north:", "river"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_lines(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SortExportError::SourceRead { .. }));
    }

    #[test]
    fn test_list_json_files() {
        let dir = tempdir().unwrap();
        for name in ["ring2.json", "ring1.json", "notes.txt", COMBINED_OUTPUT_FILE_NAME] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_json_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["ring1.json", "ring2.json"]);
    }

    #[test]
    fn test_list_json_files_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(list_json_files(dir.path()).unwrap().is_empty());
    }
}
