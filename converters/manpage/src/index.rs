//! Index entry bookkeeping.
//!
//! Man pages have no index, so an index entry is shown in bold where it
//! appears, and only the first time a given term appears.

use rd_converters_core::visitor::Visitor;
use rd_tree::{Formatted, Inline};
use rustc_hash::FxHashMap;

use crate::{Error, ManpageVisitor, escape::escape, inlines::render_bold};

/// Index terms seen so far, with the ordinal each was first seen at.
///
/// Entries are only ever added; the table lives as long as one traversal.
#[derive(Debug, Default, Clone)]
pub struct IndexTable {
    ordinals: FxHashMap<String, usize>,
    terms: Vec<String>,
}

impl IndexTable {
    /// Record `term`. Returns its ordinal if it was not seen before, `None`
    /// if it is a duplicate.
    pub fn register(&mut self, term: String) -> Option<usize> {
        if self.ordinals.contains_key(&term) {
            return None;
        }
        let ordinal = self.terms.len();
        self.ordinals.insert(term.clone(), ordinal);
        self.terms.push(term);
        Some(ordinal)
    }

    #[must_use]
    pub fn ordinal(&self, term: &str) -> Option<usize> {
        self.ordinals.get(term).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in the order they were first seen.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Visit an index entry.
///
/// The key is built from the direct text children only, so `((:foo:))` and
/// `((:((*foo*)):))` are different entries.
pub(crate) fn visit_index(node: &Formatted, visitor: &mut ManpageVisitor) -> Result<String, Error> {
    let content = visitor.visit_inline_nodes(&node.content)?;
    let key: String = node.content.iter().filter_map(Inline::as_str).collect();
    let key = escape(&key).into_owned();

    match visitor.index.register(key) {
        Some(ordinal) => {
            tracing::trace!(ordinal, "new index entry");
            Ok(render_bold(&content))
        }
        None => {
            tracing::debug!(term = %content, "dropping duplicate index entry");
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_register_assigns_first_seen_ordinals() {
        let mut table = IndexTable::default();
        assert_eq!(table.register("b".to_string()), Some(0));
        assert_eq!(table.register("a".to_string()), Some(1));
        assert_eq!(table.register("b".to_string()), None);
        assert_eq!(table.register("c".to_string()), Some(2));

        assert_eq!(table.len(), 3);
        assert_eq!(table.ordinal("a"), Some(1));
        assert_eq!(table.ordinal("missing"), None);
        assert_eq!(table.terms().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_table() {
        let table = IndexTable::default();
        assert!(table.is_empty());
        assert_eq!(table.terms().count(), 0);
    }
}
