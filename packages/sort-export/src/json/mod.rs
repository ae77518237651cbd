//! JSON representation of sorted documents.
//!
//! The file format is shared with the sort web tool's "Save JSON" output:
//!
//! ```json
//! {"sorted":[{"title":"north","textItems":[{"text":"river"}]}]}
//! ```

mod wire;
mod writer;

pub use writer::{generate_json, load_document, parse_json, save_document};
