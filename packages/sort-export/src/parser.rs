//! Line-group parser for text exports.
//!
//! A text export is a run of blocks. Each block is a title line ending in
//! `:`, followed by zero or more item lines, followed by at most one empty
//! separator line:
//!
//! ```text
//! north:
//! river
//! bridge
//!
//! south:
//! ```
//!
//! The parser walks the lines once with a cursor and never backtracks.

use crate::config::TITLE_SUFFIX;
use crate::error::{Result, SortExportError};
use crate::types::{Document, Group};

/// Position in a line sequence.
struct LineCursor<'a, S> {
    lines: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> LineCursor<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        Self { lines, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(|line| line.as_ref())
    }

    /// 1-based number of the line under the cursor.
    fn line_number(&self) -> usize {
        self.pos + 1
    }

    /// Consume a title line and start a group for it.
    fn read_title(&mut self) -> Result<Group> {
        let line_number = self.line_number();
        let line = self.peek().ok_or_else(|| {
            SortExportError::malformed(line_number, "expected a title line, found end of input")
        })?;

        if line.is_empty() {
            return Err(SortExportError::malformed(
                line_number,
                "expected a title line, found an empty line",
            ));
        }

        let title = line.strip_suffix(TITLE_SUFFIX).ok_or_else(|| {
            SortExportError::malformed(
                line_number,
                format!("title line '{line}' does not end with '{TITLE_SUFFIX}'"),
            )
        })?;

        self.pos += 1;
        Ok(Group::new(title))
    }

    /// Append item lines to `group` until a separator or the end of input.
    ///
    /// Returns `true` if a separator was consumed.
    fn read_items_until_separator(&mut self, group: &mut Group) -> bool {
        while let Some(line) = self.peek() {
            self.pos += 1;
            if line.is_empty() {
                return true;
            }
            group.push(line);
        }
        false
    }
}

/// Parse a line sequence into a [`Document`].
///
/// Lines must already have their terminators removed. Fails with
/// [`SortExportError::MalformedInput`] when an empty line appears where a
/// title is expected, when a title line lacks its trailing colon, or when a
/// separator is the last line.
///
/// # Examples
/// ```
/// use sort_export::parser::parse;
///
/// let doc = parse(&["alpha:", "", "beta:", "x", "y"]).unwrap();
/// assert_eq!(doc.groups[0].title, "alpha");
/// assert!(doc.groups[0].items.is_empty());
/// assert_eq!(doc.groups[1].items, vec!["x", "y"]);
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Document> {
    let mut cursor = LineCursor::new(lines);
    let mut groups = Vec::new();

    while !cursor.at_end() {
        let mut group = cursor.read_title()?;
        let separated = cursor.read_items_until_separator(&mut group);

        tracing::debug!(title = %group.title, items = group.items.len(), "Parsed group");
        groups.push(group);

        if separated && cursor.at_end() {
            return Err(SortExportError::malformed(
                cursor.pos,
                "separator is not followed by another block",
            ));
        }
    }

    Ok(Document::new(groups))
}
