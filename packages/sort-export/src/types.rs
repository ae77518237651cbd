//! Core data types for sort-export.
//!
//! A sort produces codes (group titles), each owning zero or more node texts.
//! These types hold that structure independently of any file format; see
//! [`crate::json`] for the on-disk representation.

use std::collections::HashSet;

use crate::error::Result;

/// One titled bucket of node texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Code title, without the trailing colon used in text exports.
    pub title: String,

    /// Node texts in export order. May be empty; duplicates are kept.
    pub items: Vec<String>,
}

impl Group {
    /// Create a group with no items.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Create a group with the given items.
    pub fn with_items<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a node text.
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

/// A complete sort result: an ordered list of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub groups: Vec<Group>,
}

impl Document {
    /// Create a document from groups, keeping their order.
    #[must_use]
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Parse a text export held in memory.
    ///
    /// Lines are split and trimmed the same way [`crate::source::read_lines`]
    /// does for files.
    pub fn parse_text(text: &str) -> Result<Self> {
        crate::parser::parse(&crate::source::split_lines(text))
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the document holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of node texts across all groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Titles that occur more than once, in order of their second occurrence.
    #[must_use]
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for group in &self.groups {
            let title = group.title.as_str();
            if !seen.insert(title) && reported.insert(title) {
                duplicates.push(title);
            }
        }

        duplicates
    }
}

impl FromIterator<Group> for Document {
    fn from_iter<T: IntoIterator<Item = Group>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builders() {
        let mut group = Group::new("north");
        assert!(group.items.is_empty());

        group.push("river");
        group.push("river");
        assert_eq!(group, Group::with_items("north", ["river", "river"]));
    }

    #[test]
    fn test_document_counts() {
        let doc = Document::new(vec![
            Group::with_items("a", ["x", "y"]),
            Group::new("b"),
            Group::with_items("c", ["z"]),
        ]);

        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
        assert_eq!(doc.item_count(), 3);
        assert!(Document::default().is_empty());
    }

    #[test]
    fn test_duplicate_titles_reported_once() {
        let doc: Document = ["a", "b", "a", "c", "a", "b"]
            .into_iter()
            .map(Group::new)
            .collect();

        assert_eq!(doc.duplicate_titles(), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_text() {
        let doc = Document::parse_text("north:\r\nriver\r\n\r\nsouth:\r\n").unwrap();
        assert_eq!(
            doc,
            Document::new(vec![
                Group::with_items("north", ["river"]),
                Group::new("south"),
            ])
        );
    }
}
