//! sort-export - Convert card-sort text exports to JSON and merge sorted documents.
//!
//! The sort web tool can save a result either as text (codes followed by their
//! node texts) or as JSON. This crate turns the text form into the JSON form,
//! and concatenates the per-ring JSON documents of a larger sort into one.
//!
//! # Example
//!
//! ```
//! use sort_export::{merge, parse, Document};
//!
//! let ring1 = parse(&["north:", "river", "", "south:"]).unwrap();
//! let ring2 = Document::parse_text("north:\nbridge\n").unwrap();
//!
//! let combined = merge([ring1, ring2]);
//! assert_eq!(combined.len(), 3);
//! assert_eq!(combined.item_count(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`types`]: `Group` and `Document`
//! - [`parser`]: line-group parser for text exports
//! - [`merge`]: concatenation of documents
//! - [`json`]: JSON file format
//! - [`source`]: reading text exports and listing JSON files
//! - [`convert`]: file-level convert and concatenate operations
//! - [`config`]: constants and path helpers
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod json;
pub mod merge;
pub mod parser;
pub mod source;
pub mod types;

// Re-export main functions
pub use convert::{concatenate_dir, convert_file};
pub use merge::{merge, merge_files};
pub use parser::parse;

// Re-export commonly used items
pub use error::{Result, SortExportError};
pub use types::{Document, Group};
