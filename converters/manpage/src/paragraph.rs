//! Paragraph rendering for manpages.
//!
//! Handles the `.PP` paragraph macro.

use rd_converters_core::visitor::{BlockContext, Visitor};
use rd_tree::TextBlock;

use crate::{Error, ManpageVisitor};

/// Visit a paragraph.
///
/// Inside bulleted, numbered and description list items the item macro has
/// already started a paragraph, so no `.PP` is written there.
pub(crate) fn visit_text_block(
    block: &TextBlock,
    context: BlockContext,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let content = visitor.visit_inline_nodes(&block.content)?;
    match context {
        BlockContext::ItemListItem | BlockContext::EnumListItem | BlockContext::DescListItem => {
            Ok(content)
        }
        BlockContext::Document | BlockContext::MethodListItem => Ok(format!(".PP\n{content}")),
    }
}
