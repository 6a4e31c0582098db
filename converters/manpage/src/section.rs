//! Headline rendering for manpages.
//!
//! Handles `.SH` (section) and `.SS` (subsection) macros.

use rd_converters_core::visitor::Visitor;
use rd_tree::Headline;

use crate::{Error, ManpageVisitor};

/// Visit a headline. Level 1 (and anything shallower) is a section, deeper
/// levels are subsections.
pub(crate) fn visit_headline(
    headline: &Headline,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let title = visitor.visit_inline_nodes(&headline.content)?;
    if headline.level <= 1 {
        Ok(format!(".SH {title}\n"))
    } else {
        Ok(format!(".SS {title}\n"))
    }
}
