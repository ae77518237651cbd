//! Reading and writing sorted JSON files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::wire::SortedDocument;
use crate::error::{Result, SortExportError};
use crate::types::Document;

/// Serialize a document to its JSON text.
///
/// Compact output matches what the sort tool writes; `pretty` indents it.
pub fn generate_json(doc: &Document, pretty: bool) -> Result<String> {
    let wire = SortedDocument::from(doc);
    let mut content = if pretty {
        serde_json::to_string_pretty(&wire)?
    } else {
        serde_json::to_string(&wire)?
    };
    content.push('\n');
    Ok(content)
}

/// Deserialize a document from JSON text.
///
/// Keys other than `sorted`, `title`, `textItems` and `text` are ignored.
pub fn parse_json(text: &str) -> serde_json::Result<Document> {
    let wire: SortedDocument = serde_json::from_str(text)?;
    Ok(wire.into())
}

/// Load a sorted JSON file.
///
/// Any failure, whether the file is missing, unreadable or has the wrong shape,
/// is reported as [`SortExportError::SourceRead`] naming the file.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|e| SortExportError::source_read(path, e))?;
    let doc = parse_json(&text).map_err(|e| SortExportError::source_read(path, e))?;

    tracing::debug!(
        path = %path.display(),
        groups = doc.len(),
        "Loaded sorted document"
    );

    Ok(doc)
}

/// Save a document as a JSON file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// A failed run never leaves a partial output file behind.
pub fn save_document(doc: &Document, path: &Path, pretty: bool) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        SortExportError::InvalidPath(format!("{} has no file name", path.display()))
    })?;
    let temp_file = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let content = generate_json(doc, pretty)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote sorted document");
    Ok(())
}
