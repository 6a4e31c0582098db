//! Visitor pattern for folding an RD document tree into output text.
//!
//! Each `visit_*` method renders one node to a `String`. Container nodes render
//! their children first and then combine the already-rendered pieces, so a
//! whole document is a single bottom-up fold in document order.
//!
//! The trait provides the dispatch (`visit_block`, `visit_inline_node`) and the
//! plain sequencing helpers; converters implement the per-node rules.

use rd_tree::{
    Block, DescList, DescListItem, Document, EnumList, EnumListItem, Formatted, Headline, Inline,
    ItemList, ItemListItem, MethodList, MethodListItem, Reference, TextBlock, Verbatim,
};

/// The kind of node a block is a direct child of.
///
/// Some blocks render differently depending on their parent (a paragraph
/// inside a list item does not start a new paragraph, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContext {
    /// A top-level block of the document.
    Document,
    /// Content of an item in an [`ItemList`].
    ItemListItem,
    /// Content of an item in an [`EnumList`].
    EnumListItem,
    /// Description of an item in a [`DescList`].
    DescListItem,
    /// Description of an item in a [`MethodList`].
    MethodListItem,
}

/// The Visitor trait defines how each node of the tree renders.
pub trait Visitor {
    /// The error type that can be returned during visiting
    type Error;

    /// Render a complete document.
    ///
    /// # Errors
    ///
    /// Returns an error if any node of the document fails to render.
    fn visit_document(&mut self, doc: &Document) -> Result<String, Self::Error>;

    /// Render a sequence of sibling blocks, one string per block.
    ///
    /// # Errors
    ///
    /// Returns an error if any block fails to render.
    fn visit_blocks(
        &mut self,
        blocks: &[Block],
        context: BlockContext,
    ) -> Result<Vec<String>, Self::Error> {
        blocks
            .iter()
            .map(|block| self.visit_block(block, context))
            .collect()
    }

    /// Visit a generic block (delegates to specific block visitors)
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this block fails.
    fn visit_block(&mut self, block: &Block, context: BlockContext) -> Result<String, Self::Error> {
        tracing::trace!(kind = block.kind(), ?context, "visiting block");
        match block {
            Block::Headline(headline) => self.visit_headline(headline),
            Block::TextBlock(text) => self.visit_text_block(text, context),
            Block::Verbatim(verbatim) => self.visit_verbatim(verbatim),
            Block::ItemList(list) => self.visit_item_list(list),
            Block::EnumList(list) => self.visit_enum_list(list),
            Block::DescList(list) => self.visit_desc_list(list),
            Block::MethodList(list) => self.visit_method_list(list),
        }
    }

    /// Visit a headline
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this headline fails.
    fn visit_headline(&mut self, headline: &Headline) -> Result<String, Self::Error>;

    /// Visit a paragraph, knowing what it is nested in
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this paragraph fails.
    fn visit_text_block(
        &mut self,
        block: &TextBlock,
        context: BlockContext,
    ) -> Result<String, Self::Error>;

    /// Visit a verbatim block
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this block fails.
    fn visit_verbatim(&mut self, verbatim: &Verbatim) -> Result<String, Self::Error>;

    /// Visit a bulleted list
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this list fails.
    fn visit_item_list(&mut self, list: &ItemList) -> Result<String, Self::Error>;

    /// Visit a numbered list
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this list fails.
    fn visit_enum_list(&mut self, list: &EnumList) -> Result<String, Self::Error>;

    /// Visit a description list
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this list fails.
    fn visit_desc_list(&mut self, list: &DescList) -> Result<String, Self::Error>;

    /// Visit a method list
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this list fails.
    fn visit_method_list(&mut self, list: &MethodList) -> Result<String, Self::Error>;

    /// Visit a bulleted list item
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this item fails.
    fn visit_item_list_item(&mut self, item: &ItemListItem) -> Result<String, Self::Error>;

    /// Visit a numbered list item
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this item fails.
    fn visit_enum_list_item(&mut self, item: &EnumListItem) -> Result<String, Self::Error>;

    /// Visit a description list item
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this item fails.
    fn visit_desc_list_item(&mut self, item: &DescListItem) -> Result<String, Self::Error>;

    /// Visit a method list item
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this item fails.
    fn visit_method_list_item(&mut self, item: &MethodListItem) -> Result<String, Self::Error>;

    /// Render a sequence of inline nodes and concatenate the results
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of any inline node fails.
    fn visit_inline_nodes(&mut self, nodes: &[Inline]) -> Result<String, Self::Error> {
        let mut result = String::new();
        for node in nodes {
            result.push_str(&self.visit_inline_node(node)?);
        }
        Ok(result)
    }

    /// Visit a single inline node
    ///
    /// # Errors
    ///
    /// Returns an error if conversion of this inline node fails.
    fn visit_inline_node(&mut self, node: &Inline) -> Result<String, Self::Error> {
        match node {
            Inline::Text(text) => self.visit_text(&text.content),
            Inline::Verb(verb) => self.visit_verb(&verb.content),
            Inline::Emphasis(inner) => self.visit_emphasis(inner),
            Inline::Code(inner) => self.visit_code(inner),
            Inline::Var(inner) => self.visit_var(inner),
            Inline::Keyboard(inner) => self.visit_keyboard(inner),
            Inline::Index(inner) => self.visit_index(inner),
            Inline::Footnote(inner) => self.visit_footnote(inner),
            Inline::Reference(reference) => self.visit_reference(reference),
        }
    }

    /// Visit plain text
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be rendered.
    fn visit_text(&mut self, text: &str) -> Result<String, Self::Error>;

    /// Visit literal text. Defaults to rendering it like plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be rendered.
    fn visit_verb(&mut self, text: &str) -> Result<String, Self::Error> {
        self.visit_text(text)
    }

    /// Visit emphasized content
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to render.
    fn visit_emphasis(&mut self, node: &Formatted) -> Result<String, Self::Error>;

    /// Visit code
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to render.
    fn visit_code(&mut self, node: &Formatted) -> Result<String, Self::Error>;

    /// Visit a variable. Defaults to its content, unformatted.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to render.
    fn visit_var(&mut self, node: &Formatted) -> Result<String, Self::Error> {
        self.visit_inline_nodes(&node.content)
    }

    /// Visit keyboard input. Defaults to its content, unformatted.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to render.
    fn visit_keyboard(&mut self, node: &Formatted) -> Result<String, Self::Error> {
        self.visit_inline_nodes(&node.content)
    }

    /// Visit an index entry
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to render.
    fn visit_index(&mut self, node: &Formatted) -> Result<String, Self::Error>;

    /// Visit a footnote. Defaults to rendering nothing.
    ///
    /// # Errors
    ///
    /// The default implementation never returns an error.
    fn visit_footnote(&mut self, _node: &Formatted) -> Result<String, Self::Error> {
        Ok(String::new())
    }

    /// Visit a reference
    ///
    /// # Errors
    ///
    /// Returns an error if the reference cannot be resolved or rendered.
    fn visit_reference(&mut self, reference: &Reference) -> Result<String, Self::Error>;
}
