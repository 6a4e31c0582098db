//! Document-level rendering for manpages.
//!
//! Handles the generated-file comment and the `.TH` title header.

use std::{fmt::Write as _, path::Path};

use rd_converters_core::visitor::{BlockContext, Visitor};
use rd_tree::Document;

use crate::{Error, ManpageVisitor, Processor};

/// Generator named in the header comment when none is configured.
const DEFAULT_GENERATOR: &str = "rd2man";

/// Title used when neither an override nor a source name is available.
const UNTITLED: &str = "Untitled";

const RD_EXTENSION: &str = ".rd";

/// Work out the manual page title.
///
/// The override wins over the source name, which wins over `Untitled`. The
/// result is reduced to its file name, without a trailing `.rd` (in any case).
pub(crate) fn derive_title(title_override: Option<&str>, source_name: Option<&str>) -> String {
    let title = title_override.or(source_name).unwrap_or(UNTITLED);
    let basename = Path::new(title)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(title);

    let stem = basename
        .len()
        .checked_sub(RD_EXTENSION.len())
        .and_then(|at| basename.split_at_checked(at))
        .filter(|(_, extension)| extension.eq_ignore_ascii_case(RD_EXTENSION))
        .map_or(basename, |(stem, _)| stem);

    stem.to_string()
}

fn generator_name(processor: &Processor) -> &str {
    let name = processor.options.generator_metadata().name();
    if name.is_empty() {
        DEFAULT_GENERATOR
    } else {
        name
    }
}

/// Visit the document: render the body, then put the header in front of it.
pub(crate) fn visit_document(doc: &Document, visitor: &mut ManpageVisitor) -> Result<String, Error> {
    let body = visitor
        .visit_blocks(&doc.blocks, BlockContext::Document)?
        .concat();

    let title = derive_title(
        visitor.processor.options.title(),
        doc.source_name.as_deref(),
    );
    tracing::debug!(%title, source_name = ?doc.source_name, "derived manual page title");
    let date = visitor.processor.date().format("%B %Y");

    let mut result = String::with_capacity(body.len() + 128);
    writeln!(
        result,
        r#".\" DO NOT MODIFY THIS FILE! it was generated by {}"#,
        generator_name(&visitor.processor)
    )?;
    writeln!(result, ".TH {title} 1 \"{date}\"")?;
    result.push_str(&body);
    result.push('\n');
    Ok(result)
}
