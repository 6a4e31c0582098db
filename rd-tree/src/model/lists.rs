//! List types for RD documents.

use serde::{Deserialize, Serialize};

use super::Block;
use super::inlines::Inline;

/// An `ItemList` is a bulleted list (`*` items in RD).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<ItemListItem>,
}

/// An `EnumList` is a numbered list (`(1)` items in RD).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumList {
    #[serde(default)]
    pub items: Vec<EnumListItem>,
}

/// A `DescList` is a list of term/description pairs (`:` items in RD).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DescList {
    #[serde(default)]
    pub items: Vec<DescListItem>,
}

/// A `MethodList` is a list of method descriptions (`---` items in RD).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodList {
    #[serde(default)]
    pub items: Vec<MethodListItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemListItem {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumListItem {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// An item in a description list.
///
/// `description` may be empty, in which case only the term is shown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DescListItem {
    #[serde(default)]
    pub term: Vec<Inline>,
    #[serde(default)]
    pub description: Vec<Block>,
}

/// An item in a method list.
///
/// The term is the raw method descriptor as written in the source, e.g.
/// `Array#[]=(index, value)` or `open(path, mode)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodListItem {
    pub term: String,
    #[serde(default)]
    pub description: Vec<Block>,
}

impl ItemList {
    #[must_use]
    pub fn new(items: Vec<ItemListItem>) -> Self {
        Self { items }
    }
}

impl EnumList {
    #[must_use]
    pub fn new(items: Vec<EnumListItem>) -> Self {
        Self { items }
    }
}

impl DescList {
    #[must_use]
    pub fn new(items: Vec<DescListItem>) -> Self {
        Self { items }
    }
}

impl MethodList {
    #[must_use]
    pub fn new(items: Vec<MethodListItem>) -> Self {
        Self { items }
    }
}

impl ItemListItem {
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl EnumListItem {
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl DescListItem {
    #[must_use]
    pub fn new(term: Vec<Inline>, description: Vec<Block>) -> Self {
        Self { term, description }
    }
}

impl MethodListItem {
    #[must_use]
    pub fn new(term: impl Into<String>, description: Vec<Block>) -> Self {
        Self {
            term: term.into(),
            description,
        }
    }
}
