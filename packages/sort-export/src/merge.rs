//! Concatenation of sorted documents.

use std::path::Path;

use crate::error::Result;
use crate::json::load_document;
use crate::types::Document;

/// Merge documents by concatenating their groups in input order.
///
/// Groups are moved as-is: titles that repeat across (or within) inputs stay
/// separate groups.
///
/// # Examples
/// ```
/// use sort_export::merge::merge;
/// use sort_export::types::{Document, Group};
///
/// let ring1 = Document::new(vec![Group::new("north")]);
/// let ring2 = Document::new(vec![Group::new("north"), Group::new("south")]);
///
/// let combined = merge([ring1, ring2]);
/// assert_eq!(combined.len(), 3);
/// assert!(merge(Vec::<Document>::new()).is_empty());
/// ```
pub fn merge<I>(documents: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    documents
        .into_iter()
        .flat_map(|doc| doc.groups)
        .collect()
}

/// Load each sorted JSON file in order and merge the results.
///
/// Stops at the first file that cannot be loaded.
pub fn merge_files<P: AsRef<Path>>(paths: &[P]) -> Result<Document> {
    let documents = paths
        .iter()
        .map(|path| load_document(path.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge(documents);

    let duplicates = merged.duplicate_titles();
    if !duplicates.is_empty() {
        tracing::warn!(
            count = duplicates.len(),
            "Merged document repeats titles; groups are kept separate"
        );
    }
    tracing::info!(
        files = paths.len(),
        groups = merged.len(),
        items = merged.item_count(),
        "Merged sorted documents"
    );

    Ok(merged)
}
