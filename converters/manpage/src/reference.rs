//! Reference rendering for manpages.
//!
//! Man pages cannot link anywhere, so every reference renders as its text.

use rd_converters_core::visitor::Visitor;
use rd_tree::{Reference, ReferenceLabel, inlines_to_string};

use crate::{Error, ManpageVisitor};

/// Prefix the RD parser puts on same-document references to functions.
const FUNCTION_PREFIX: &str = "function#";

pub(crate) fn visit_reference(
    reference: &Reference,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let content = visitor.visit_inline_nodes(&reference.content)?;
    resolve(reference, content)
}

/// Pick the rendering of an already-rendered reference by its label kind.
fn resolve(reference: &Reference, content: String) -> Result<String, Error> {
    match &reference.label {
        ReferenceLabel::Url { .. } | ReferenceLabel::Label {
            filename: Some(_), ..
        } => Ok(content),
        ReferenceLabel::Label { filename: None, .. } => {
            if let Some(stripped) = content.strip_prefix(FUNCTION_PREFIX) {
                Ok(stripped.to_string())
            } else {
                Ok(content)
            }
        }
        ReferenceLabel::Unsupported => Err(Error::UnresolvableReference(inlines_to_string(
            &reference.content,
        ))),
    }
}
