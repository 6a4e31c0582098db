//! Inline node rendering for manpages.

use rd_converters_core::visitor::Visitor;
use rd_tree::Formatted;

use crate::{Error, ManpageVisitor, escape::ZERO_WIDTH};

/// Wrap already-rendered content in bold.
///
/// The first `.` is escaped as well: the content may end up at the start of a
/// line, where a bare `.` would begin a control line.
pub(crate) fn render_bold(content: &str) -> String {
    format!("{ZERO_WIDTH}\\fB{}\\fP", content.replacen('.', "\\.", 1))
}

pub(crate) fn visit_emphasis(
    node: &Formatted,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let content = visitor.visit_inline_nodes(&node.content)?;
    Ok(format!("\\fI{content}\\fP"))
}

pub(crate) fn visit_code(node: &Formatted, visitor: &mut ManpageVisitor) -> Result<String, Error> {
    let content = visitor.visit_inline_nodes(&node.content)?;
    Ok(render_bold(&content))
}
