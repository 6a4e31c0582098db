//! List rendering for manpages.
//!
//! Bulleted lists use `.IP` with a bullet glyph, numbered, description and
//! method lists use `.TP` tagged paragraphs.

use rd_converters_core::visitor::{BlockContext, Visitor};
use rd_tree::{
    DescList, DescListItem, EnumList, EnumListItem, ItemList, ItemListItem, MethodList,
    MethodListItem,
};

use crate::{Error, ManpageVisitor, escape::escape, signature::parse_signature};

/// Bullet marker, written before every bulleted item.
const BULLET: &str = ".IP\n.B\n\\(bu\n";

/// Enumeration counters for the numbered lists currently being rendered.
///
/// Each numbered list gets its own counter, so a list nested in an item
/// numbers from 1 and the outer list carries on where it left off.
#[derive(Debug, Default, Clone)]
pub(crate) struct ListState {
    counters: Vec<usize>,
}

impl ListState {
    /// Start a numbered list.
    pub(crate) fn enter(&mut self) {
        self.counters.push(0);
    }

    /// Finish the innermost numbered list.
    pub(crate) fn exit(&mut self) {
        self.counters.pop();
    }

    /// Number of the next item in the innermost list.
    pub(crate) fn next(&mut self) -> usize {
        if let Some(counter) = self.counters.last_mut() {
            *counter += 1;
            *counter
        } else {
            // An item rendered on its own counts as the first of an implicit list
            self.counters.push(1);
            1
        }
    }
}

/// Drop one trailing line terminator, if there is one.
fn chomp(mut rendered: String) -> String {
    if rendered.ends_with('\n') {
        rendered.pop();
    }
    if rendered.ends_with('\r') {
        rendered.pop();
    }
    rendered
}

fn ensure_trailing_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

/// Visit a bulleted list.
pub(crate) fn visit_item_list(
    list: &ItemList,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let items = list
        .items
        .iter()
        .map(|item| {
            // The bullet already breaks the line, drop the blank line after the first line
            visitor
                .visit_item_list_item(item)
                .map(|rendered| rendered.replacen("\n\n", "\n", 1))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{BULLET}{}", items.join(BULLET)))
}

/// Visit a numbered list.
pub(crate) fn visit_enum_list(
    list: &EnumList,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    visitor.lists.enter();
    let items = list
        .items
        .iter()
        .map(|item| visitor.visit_enum_list_item(item))
        .collect::<Result<Vec<_>, _>>();
    visitor.lists.exit();
    Ok(items?.concat())
}

/// Visit a description list.
pub(crate) fn visit_desc_list(
    list: &DescList,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let mut result = String::new();
    for item in &list.items {
        result.push_str(&ensure_trailing_newline(visitor.visit_desc_list_item(item)?));
    }
    Ok(result)
}

/// Visit a method list.
pub(crate) fn visit_method_list(
    list: &MethodList,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let mut result = String::new();
    for item in &list.items {
        result.push_str(&ensure_trailing_newline(
            visitor.visit_method_list_item(item)?,
        ));
    }
    Ok(result)
}

pub(crate) fn visit_item_list_item(
    item: &ItemListItem,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    Ok(visitor
        .visit_blocks(&item.blocks, BlockContext::ItemListItem)?
        .into_iter()
        .map(ensure_trailing_newline)
        .collect())
}

pub(crate) fn visit_enum_list_item(
    item: &EnumListItem,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let number = visitor.lists.next();
    let blocks = visitor.visit_blocks(&item.blocks, BlockContext::EnumListItem)?;
    Ok(format!(".TP\n{number}.\n{}", blocks.join("\n")))
}

pub(crate) fn visit_desc_list_item(
    item: &DescListItem,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let term = visitor.visit_inline_nodes(&item.term)?;
    let description = visitor.visit_blocks(&item.description, BlockContext::DescListItem)?;
    let rendered = render_term_item(&term, &description);
    if description.is_empty() {
        Ok(rendered)
    } else {
        // The list puts the line break back, so a trailing blank line shrinks by one
        Ok(chomp(rendered))
    }
}

pub(crate) fn visit_method_list_item(
    item: &MethodListItem,
    visitor: &mut ManpageVisitor,
) -> Result<String, Error> {
    let signature = parse_signature(&item.term).render()?;
    let term = escape(&signature);
    let description = visitor.visit_blocks(&item.description, BlockContext::MethodListItem)?;
    Ok(render_term_item(&term, &description))
}

/// Render a bold tagged-paragraph term followed by its description, if any.
fn render_term_item(term: &str, description: &[String]) -> String {
    if description.is_empty() {
        format!(".TP\n.fi\n.B\n{term}")
    } else {
        format!(".TP\n.fi\n.B\n{term}\n{}", description.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_state_numbers_each_list() {
        let mut state = ListState::default();
        state.enter();
        assert_eq!(state.next(), 1);
        state.enter();
        assert_eq!(state.next(), 1);
        assert_eq!(state.next(), 2);
        state.exit();
        assert_eq!(state.next(), 2);
        state.exit();
        state.enter();
        assert_eq!(state.next(), 1);
    }

    #[test]
    fn test_ensure_trailing_newline() {
        assert_eq!(ensure_trailing_newline("a".to_string()), "a\n");
        assert_eq!(ensure_trailing_newline("a\n".to_string()), "a\n");
    }

    #[test]
    fn test_chomp() {
        assert_eq!(chomp("a\n\n".to_string()), "a\n");
        assert_eq!(chomp("a\r\n".to_string()), "a");
        assert_eq!(chomp("a".to_string()), "a");
    }

    #[test]
    fn test_render_term_item() {
        assert_eq!(render_term_item("term", &[]), ".TP\n.fi\n.B\nterm");
        assert_eq!(
            render_term_item("term", &["one\n".to_string(), "two\n".to_string()]),
            ".TP\n.fi\n.B\nterm\none\n\ntwo\n"
        );
    }
}
