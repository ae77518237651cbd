//! File-level operations that tie the parser, merger and JSON writer together.

use std::path::{Path, PathBuf};

use crate::config::TEXT_EXTENSION;
use crate::error::Result;
use crate::merge::merge_files;
use crate::parser::parse;
use crate::source::{list_json_files, read_lines};
use crate::types::Document;

/// Read and parse a text export.
///
/// Parse failures are reported with the file's path attached.
pub fn convert_file(input: &Path) -> Result<Document> {
    if input.extension().and_then(|e| e.to_str()) != Some(TEXT_EXTENSION) {
        tracing::warn!(
            path = %input.display(),
            "Input does not have a .{TEXT_EXTENSION} extension"
        );
    }

    let lines = read_lines(input)?;
    let doc = parse(&lines).map_err(|e| e.in_file(input))?;

    tracing::info!(
        path = %input.display(),
        groups = doc.len(),
        items = doc.item_count(),
        "Converted text export"
    );

    Ok(doc)
}

/// Merge every sorted JSON file in `dir`, in file name order.
///
/// Returns the files that were merged together with the combined document.
pub fn concatenate_dir(dir: &Path) -> Result<(Vec<PathBuf>, Document)> {
    let files = list_json_files(dir)?;
    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "No sorted JSON files found");
    }

    let doc = merge_files(&files)?;
    Ok((files, doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortExportError;
    use crate::json::save_document;
    use crate::types::Group;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_convert_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring1.txt");
        fs::write(&path, "north:\nriver\nbridge\n\nsouth:\n").unwrap();

        let doc = convert_file(&path).unwrap();
        assert_eq!(
            doc,
            Document::new(vec![
                Group::with_items("north", ["river", "bridge"]),
                Group::new("south"),
            ])
        );
    }

    #[test]
    fn test_convert_file_reports_path_and_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring1.txt");
        fs::write(&path, "north:\nriver\n\n\nsouth:\n").unwrap();

        let err = convert_file(&path).unwrap_err();
        assert!(matches!(err, SortExportError::MalformedFile { line: 4, .. }));
        assert!(err.to_string().contains("ring1.txt"));
    }

    #[test]
    fn test_concatenate_dir() {
        let dir = tempdir().unwrap();
        save_document(
            &Document::new(vec![Group::with_items("b", ["2"])]),
            &dir.path().join("ring2.json"),
            false,
        )
        .unwrap();
        save_document(
            &Document::new(vec![Group::with_items("a", ["1"])]),
            &dir.path().join("ring1.json"),
            false,
        )
        .unwrap();

        let (files, doc) = concatenate_dir(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(
            doc,
            Document::new(vec![
                Group::with_items("a", ["1"]),
                Group::with_items("b", ["2"]),
            ])
        );
    }

    #[test]
    fn test_concatenate_empty_dir() {
        let dir = tempdir().unwrap();
        let (files, doc) = concatenate_dir(dir.path()).unwrap();
        assert!(files.is_empty());
        assert!(doc.is_empty());
    }
}
