//! The data models for an RD document tree.
//!
//! The tree is produced by an external RD parser and handed over as JSON. Every
//! node carries a `type` tag naming its kind (`Headline`, `TextBlock`, ...), which
//! is how the enums below are (de)serialized.

use serde::{Deserialize, Serialize};

mod inlines;
mod lists;

pub use inlines::*;
pub use lists::*;

/// A `Document` is the root of an RD document tree (the `DocumentElement`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the source the parser read the document from, if it reported one.
    ///
    /// Used as the fallback manual page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            source_name: None,
            blocks,
        }
    }

    /// Set the name of the source this document was read from.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

/// A `Block` is a top-level or nested block element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    Headline(Headline),
    TextBlock(TextBlock),
    Verbatim(Verbatim),
    ItemList(ItemList),
    EnumList(EnumList),
    DescList(DescList),
    MethodList(MethodList),
}

impl Block {
    #[must_use]
    pub fn headline(level: i64, content: Vec<Inline>) -> Self {
        Block::Headline(Headline { level, content })
    }

    #[must_use]
    pub fn text_block(content: Vec<Inline>) -> Self {
        Block::TextBlock(TextBlock { content })
    }

    #[must_use]
    pub fn verbatim<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::Verbatim(Verbatim {
            lines: lines.into_iter().map(Into::into).collect(),
        })
    }

    /// Name of the node kind, as it appears in the `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Headline(_) => "Headline",
            Block::TextBlock(_) => "TextBlock",
            Block::Verbatim(_) => "Verbatim",
            Block::ItemList(_) => "ItemList",
            Block::EnumList(_) => "EnumList",
            Block::DescList(_) => "DescList",
            Block::MethodList(_) => "MethodList",
        }
    }
}

/// A `Headline` is a section heading. Level 1 is the outermost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub level: i64,
    #[serde(default)]
    pub content: Vec<Inline>,
}

/// A `TextBlock` is a paragraph of inline content.
///
/// Text inside a paragraph keeps the line terminators of the source, so the
/// content of a paragraph normally ends with a newline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub content: Vec<Inline>,
}

/// A `Verbatim` block holds preformatted lines, without their terminators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verbatim {
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Kind of the root node.
pub const DOCUMENT_KIND: &str = "DocumentElement";

/// Kinds that may appear where a block is expected.
pub const BLOCK_KINDS: &[&str] = &[
    "Headline",
    "TextBlock",
    "Verbatim",
    "ItemList",
    "EnumList",
    "DescList",
    "MethodList",
];

/// Kinds that may appear where inline content is expected.
pub const INLINE_KINDS: &[&str] = &[
    "StringElement",
    "Verb",
    "Emphasis",
    "Code",
    "Var",
    "Keyboard",
    "Index",
    "Footnote",
    "Reference",
];

/// Every value the `type` tag of a node may take.
pub const NODE_KINDS: &[&str] = &[
    "DocumentElement",
    "Headline",
    "TextBlock",
    "Verbatim",
    "ItemList",
    "EnumList",
    "DescList",
    "MethodList",
    "ItemListItem",
    "EnumListItem",
    "DescListItem",
    "MethodListItem",
    "StringElement",
    "Verb",
    "Emphasis",
    "Code",
    "Var",
    "Keyboard",
    "Index",
    "Footnote",
    "Reference",
];
