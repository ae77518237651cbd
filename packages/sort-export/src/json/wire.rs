//! Serde structs mirroring the on-disk JSON layout.

use serde::{Deserialize, Serialize};

use crate::types::{Document, Group};

/// Top-level JSON object.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SortedDocument {
    pub sorted: Vec<SortedGroup>,
}

/// One entry of the `sorted` list.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SortedGroup {
    pub title: String,
    pub text_items: Vec<TextItem>,
}

/// A single node text, wrapped in its own object.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct TextItem {
    pub text: String,
}

impl From<&Document> for SortedDocument {
    fn from(doc: &Document) -> Self {
        Self {
            sorted: doc.groups.iter().map(SortedGroup::from).collect(),
        }
    }
}

impl From<&Group> for SortedGroup {
    fn from(group: &Group) -> Self {
        Self {
            title: group.title.clone(),
            text_items: group
                .items
                .iter()
                .map(|text| TextItem { text: text.clone() })
                .collect(),
        }
    }
}

impl From<SortedDocument> for Document {
    fn from(doc: SortedDocument) -> Self {
        doc.sorted.into_iter().map(Group::from).collect()
    }
}

impl From<SortedGroup> for Group {
    fn from(group: SortedGroup) -> Self {
        Self {
            title: group.title,
            items: group.text_items.into_iter().map(|item| item.text).collect(),
        }
    }
}
