//! Visitor implementation for manpage (troff/man) conversion.

use rd_converters_core::visitor::{BlockContext, Visitor};
use rd_tree::{
    DescList, DescListItem, Document, EnumList, EnumListItem, Formatted, Headline, ItemList,
    ItemListItem, MethodList, MethodListItem, Reference, TextBlock, Verbatim,
};

use crate::{Error, Processor, escape::escape, index::IndexTable, list::ListState};

/// Manpage visitor that renders an RD document tree to troff/man markup.
///
/// The visitor carries the enumeration counters and the index table of one
/// traversal. Both are reset by [`render`](ManpageVisitor::render), so an
/// instance can be reused for several documents one after the other, but it
/// must not be shared between concurrent traversals.
pub struct ManpageVisitor {
    pub(crate) processor: Processor,
    pub(crate) lists: ListState,
    pub(crate) index: IndexTable,
}

impl ManpageVisitor {
    /// Create a new manpage visitor.
    #[must_use]
    pub fn new(processor: Processor) -> Self {
        Self {
            processor,
            lists: ListState::default(),
            index: IndexTable::default(),
        }
    }

    /// Render a whole document to man page text.
    ///
    /// # Errors
    ///
    /// Returns an error if any node cannot be rendered; nothing is produced in
    /// that case.
    #[tracing::instrument(skip_all, fields(source_name = ?doc.source_name))]
    pub fn render(&mut self, doc: &Document) -> Result<String, Error> {
        self.lists = ListState::default();
        self.index = IndexTable::default();
        self.visit_document(doc)
    }

    /// Index terms registered by the last render, in first-seen order.
    #[must_use]
    pub fn index(&self) -> &IndexTable {
        &self.index
    }
}

impl Visitor for ManpageVisitor {
    type Error = Error;

    fn visit_document(&mut self, doc: &Document) -> Result<String, Self::Error> {
        crate::document::visit_document(doc, self)
    }

    fn visit_headline(&mut self, headline: &Headline) -> Result<String, Self::Error> {
        crate::section::visit_headline(headline, self)
    }

    fn visit_text_block(
        &mut self,
        block: &TextBlock,
        context: BlockContext,
    ) -> Result<String, Self::Error> {
        crate::paragraph::visit_text_block(block, context, self)
    }

    fn visit_verbatim(&mut self, verbatim: &Verbatim) -> Result<String, Self::Error> {
        Ok(crate::verbatim::visit_verbatim(verbatim))
    }

    fn visit_item_list(&mut self, list: &ItemList) -> Result<String, Self::Error> {
        crate::list::visit_item_list(list, self)
    }

    fn visit_enum_list(&mut self, list: &EnumList) -> Result<String, Self::Error> {
        crate::list::visit_enum_list(list, self)
    }

    fn visit_desc_list(&mut self, list: &DescList) -> Result<String, Self::Error> {
        crate::list::visit_desc_list(list, self)
    }

    fn visit_method_list(&mut self, list: &MethodList) -> Result<String, Self::Error> {
        crate::list::visit_method_list(list, self)
    }

    fn visit_item_list_item(&mut self, item: &ItemListItem) -> Result<String, Self::Error> {
        crate::list::visit_item_list_item(item, self)
    }

    fn visit_enum_list_item(&mut self, item: &EnumListItem) -> Result<String, Self::Error> {
        crate::list::visit_enum_list_item(item, self)
    }

    fn visit_desc_list_item(&mut self, item: &DescListItem) -> Result<String, Self::Error> {
        crate::list::visit_desc_list_item(item, self)
    }

    fn visit_method_list_item(&mut self, item: &MethodListItem) -> Result<String, Self::Error> {
        crate::list::visit_method_list_item(item, self)
    }

    fn visit_text(&mut self, text: &str) -> Result<String, Self::Error> {
        Ok(escape(text).into_owned())
    }

    fn visit_emphasis(&mut self, node: &Formatted) -> Result<String, Self::Error> {
        crate::inlines::visit_emphasis(node, self)
    }

    fn visit_code(&mut self, node: &Formatted) -> Result<String, Self::Error> {
        crate::inlines::visit_code(node, self)
    }

    fn visit_index(&mut self, node: &Formatted) -> Result<String, Self::Error> {
        crate::index::visit_index(node, self)
    }

    fn visit_footnote(&mut self, _node: &Formatted) -> Result<String, Self::Error> {
        // Man pages have nowhere to put footnotes
        Ok(String::new())
    }

    fn visit_reference(&mut self, reference: &Reference) -> Result<String, Self::Error> {
        crate::reference::visit_reference(reference, self)
    }
}
