//! Document tree model for RD documents.
//!
//! An external RD parser turns RD markup into a tree of typed nodes and hands it
//! over as JSON. This crate holds the model for that tree and loads it:
//!
//! - [`Document`] - the root (`DocumentElement`), owning the top-level [`Block`]s
//! - [`Block`] - headlines, paragraphs, verbatim blocks and the four list kinds
//! - [`Inline`] - text, formatting, index entries, footnotes and references
//!
//! # Example
//!
//! ```
//! let doc = rd_tree::from_str(r#"{
//!     "source_name": "foo.rd",
//!     "blocks": [
//!         {"type": "Headline", "level": 1, "content": [{"type": "StringElement", "content": "NAME"}]}
//!     ]
//! }"#)?;
//! assert_eq!(doc.blocks.len(), 1);
//! # Ok::<(), rd_tree::Error>(())
//! ```

use std::{fs::File, io::BufReader, io::Read, path::Path};

use tracing::instrument;

mod error;
mod model;
mod validate;

pub use error::Error;
pub use model::*;

/// Load a document tree from its JSON form.
///
/// # Errors
///
/// Returns [`Error::UnhandledNodeKind`] when a node carries an unknown `type`,
/// and [`Error::Json`] when the input is not a well-formed tree.
#[instrument(level = "debug", skip(input))]
pub fn from_str(input: &str) -> Result<Document, Error> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Load a document tree from a reader.
///
/// # Errors
///
/// Same as [`from_str`], plus [`Error::Io`] if reading fails.
#[instrument(level = "debug", skip(reader))]
pub fn from_reader<R: Read>(reader: R) -> Result<Document, Error> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    from_value(value)
}

/// Load a document tree from a file.
///
/// If the tree does not report a source name, the file path is used instead.
///
/// # Errors
///
/// Same as [`from_reader`].
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
    let file = File::open(path.as_ref())?;
    let mut doc = from_reader(BufReader::new(file))?;
    if doc.source_name.is_none() {
        doc.source_name = Some(path.as_ref().display().to_string());
    }
    Ok(doc)
}

fn from_value(value: serde_json::Value) -> Result<Document, Error> {
    validate::node_kinds(&value)?;
    let doc = serde_json::from_value(value)?;
    Ok(doc)
}
