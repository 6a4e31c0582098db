//! Manpage converter for RD documents.
//!
//! This converter renders an RD document tree (see [`rd_tree`]) into troff
//! source for the `man` macro package, the format read by `man(1)`.
//!
//! # Example
//!
//! ```
//! use rd_converters_core::{Converter, Options};
//! use rd_converters_manpage::Processor;
//! use rd_tree::{Block, Document, Inline};
//!
//! let doc = Document::new(vec![
//!     Block::headline(1, vec![Inline::text("NAME")]),
//!     Block::text_block(vec![Inline::text("ls - list directory contents\n")]),
//! ])
//! .with_source_name("ls.rd");
//!
//! let processor = Processor::new(Options::default())
//!     .with_date(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//! let page = processor.render(&doc)?;
//! assert!(page.contains(".TH ls 1 \"March 2024\"\n"));
//! assert!(page.contains(".SH NAME\n.PP\nls \\- list directory contents\n"));
//! # Ok::<(), rd_converters_manpage::Error>(())
//! ```
//!
//! # Output Format
//!
//! - a generated-file comment and a `.TH` header with the title and date
//! - `.SH` and `.SS` for headlines, `.PP` for paragraphs
//! - `.IP` with a bullet for bulleted lists, `.TP` for numbered, description
//!   and method lists
//! - `.nf`/`.fi` for verbatim blocks
//! - `\fI`, `\fB`, `\fP` for inline formatting

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use rd_converters_core::{Converter, Options};
use rd_tree::Document;

mod document;
mod error;
mod escape;
mod index;
mod inlines;
mod list;
mod manpage_visitor;
mod paragraph;
mod reference;
mod section;
mod signature;
mod verbatim;

pub use error::Error;
pub use escape::escape;
pub use index::IndexTable;
pub use manpage_visitor::ManpageVisitor;
pub use signature::{Relation, Signature, parse_signature};

/// Manual section the generated pages belong to, also used as the output file
/// extension.
pub const OUTPUT_SUFFIX: &str = "1";

/// Manpage converter processor.
#[derive(Clone, Debug)]
pub struct Processor {
    options: Options,
    date: Option<NaiveDate>,
}

impl Processor {
    /// Pin the date shown in the page header instead of using today's date.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Render a document to man page text.
    ///
    /// # Errors
    ///
    /// Returns an error if any node of the document cannot be rendered.
    pub fn render(&self, doc: &Document) -> Result<String, Error> {
        ManpageVisitor::new(self.clone()).render(doc)
    }
}

impl Converter for Processor {
    type Error = Error;

    fn new(options: Options) -> Self {
        Self {
            options,
            date: None,
        }
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn derive_output_path(&self, input: &Path, _doc: &Document) -> Result<Option<PathBuf>, Error> {
        let manpage_path = input.with_extension(OUTPUT_SUFFIX);
        // Avoid overwriting the input file
        if manpage_path == input {
            return Err(Error::OutputPathSameAsInput(input.to_path_buf()));
        }
        Ok(Some(manpage_path))
    }

    fn write_to<W: Write>(
        &self,
        doc: &Document,
        mut writer: W,
        _source_file: Option<&Path>,
    ) -> Result<(), Self::Error> {
        let page = self.render(doc)?;
        writer.write_all(page.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use rd_converters_core::GeneratorMetadata;
    use rd_tree::{
        Block, DescList, DescListItem, EnumList, EnumListItem, Inline, ItemList, ItemListItem,
        MethodList, MethodListItem, ReferenceLabel,
    };

    use super::*;

    fn processor() -> Processor {
        Processor::new(Options::default()).with_date(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
    }

    /// Render the blocks as a whole document and return only the body.
    fn body(blocks: Vec<Block>) -> String {
        let page = processor().render(&Document::new(blocks)).unwrap();
        page.splitn(3, '\n').nth(2).unwrap().to_string()
    }

    fn para(text: &str) -> Block {
        Block::text_block(vec![Inline::text(text)])
    }

    #[test]
    fn test_document_header() {
        let doc = Document::new(vec![]).with_source_name("/docs/Example.RD");
        assert_eq!(
            processor().render(&doc).unwrap(),
            ".\\\" DO NOT MODIFY THIS FILE! it was generated by rd2man\n\
             .TH Example 1 \"October 2026\"\n\n"
        );
    }

    #[test]
    fn test_document_header_uses_override_and_generator() {
        let options = Options::builder()
            .title("grep")
            .generator_metadata(GeneratorMetadata::new("mytool", "1.0"))
            .build();
        let processor =
            Processor::new(options).with_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        let doc = Document::new(vec![]).with_source_name("/docs/Example.rd");
        assert_eq!(
            processor.render(&doc).unwrap(),
            ".\\\" DO NOT MODIFY THIS FILE! it was generated by mytool\n\
             .TH grep 1 \"January 2024\"\n\n"
        );
    }

    #[test]
    fn test_untitled_document() {
        let page = processor().render(&Document::default()).unwrap();
        assert!(page.contains(".TH Untitled 1 "));
    }

    #[test]
    fn test_headlines() {
        assert_eq!(
            body(vec![
                Block::headline(1, vec![Inline::text("NAME")]),
                Block::headline(2, vec![Inline::text("Options")]),
                Block::headline(0, vec![Inline::text("TOP")]),
            ]),
            ".SH NAME\n.SS Options\n.SH TOP\n\n"
        );
    }

    #[test]
    fn test_negative_headline_level_is_a_section() {
        assert_eq!(
            body(vec![Block::headline(-1, vec![Inline::text("BELOW")])]),
            ".SH BELOW\n\n"
        );
    }

    #[test]
    fn test_text_block_prefix_depends_on_parent() {
        let paragraph = para("same text\n");
        let rendered = body(vec![
            paragraph.clone(),
            Block::EnumList(EnumList::new(vec![EnumListItem::new(vec![paragraph])])),
        ]);
        assert_eq!(rendered, ".PP\nsame text\n.TP\n1.\nsame text\n\n");
    }

    #[test]
    fn test_enum_lists_number_from_one() {
        let list = || {
            Block::EnumList(EnumList::new(vec![
                EnumListItem::new(vec![para("a\n")]),
                EnumListItem::new(vec![para("b\n")]),
                EnumListItem::new(vec![para("c\n")]),
            ]))
        };
        assert_eq!(
            body(vec![list(), list()]),
            ".TP\n1.\na\n.TP\n2.\nb\n.TP\n3.\nc\n\
             .TP\n1.\na\n.TP\n2.\nb\n.TP\n3.\nc\n\n"
        );
    }

    #[test]
    fn test_nested_enum_list_does_not_disturb_outer_numbering() {
        let inner = Block::EnumList(EnumList::new(vec![
            EnumListItem::new(vec![para("x\n")]),
            EnumListItem::new(vec![para("y\n")]),
        ]));
        let outer = Block::EnumList(EnumList::new(vec![
            EnumListItem::new(vec![para("one\n"), inner]),
            EnumListItem::new(vec![para("two\n")]),
        ]));
        assert_eq!(
            body(vec![outer]),
            ".TP\n1.\none\n\n.TP\n1.\nx\n.TP\n2.\ny\n.TP\n2.\ntwo\n\n"
        );
    }

    #[test]
    fn test_item_list() {
        let list = Block::ItemList(ItemList::new(vec![
            ItemListItem::new(vec![para("first\n")]),
            ItemListItem::new(vec![para("second\n"), para("more\n")]),
        ]));
        assert_eq!(
            body(vec![list]),
            ".IP\n.B\n\\(bu\nfirst\n.IP\n.B\n\\(bu\nsecond\nmore\n\n"
        );
    }

    #[test]
    fn test_item_list_collapses_first_blank_line() {
        let list = Block::ItemList(ItemList::new(vec![ItemListItem::new(vec![
            para("first\n\n"),
            para("next\n\n"),
        ])]));
        assert_eq!(body(vec![list]), ".IP\n.B\n\\(bu\nfirst\nnext\n\n\n");
    }

    #[test]
    fn test_desc_list() {
        let list = Block::DescList(DescList::new(vec![
            DescListItem::new(vec![Inline::text("--all")], vec![para("show all\n")]),
            DescListItem::new(vec![Inline::text("-q")], vec![]),
        ]));
        assert_eq!(
            body(vec![list]),
            ".TP\n.fi\n.B\n\\-\\-all\nshow all\n.TP\n.fi\n.B\n\\-q\n\n"
        );
    }

    #[test]
    fn test_desc_list_drops_one_trailing_blank_line() {
        let list = Block::DescList(DescList::new(vec![DescListItem::new(
            vec![Inline::text("term")],
            vec![para("text\n\n")],
        )]));
        assert_eq!(body(vec![list]), ".TP\n.fi\n.B\nterm\ntext\n\n");
    }

    #[test]
    fn test_method_list() {
        let list = Block::MethodList(MethodList::new(vec![
            MethodListItem::new("Foo#[]=(i, v)", vec![para("assign\n")]),
            MethodListItem::new("bar(x, y)", vec![]),
        ]));
        assert_eq!(
            body(vec![list]),
            ".TP\n.fi\n.B\nFoo#[i] = v\n.PP\nassign\n.TP\n.fi\n.B\nbar(x, y)\n\n"
        );
    }

    #[test]
    fn test_malformed_method_signature_aborts() {
        let doc = Document::new(vec![Block::MethodList(MethodList::new(vec![
            MethodListItem::new("Foo#[]=()", vec![]),
        ]))]);
        let err = processor().render(&doc).unwrap_err();
        assert!(matches!(err, Error::MalformedSignature(ref raw) if raw == "Foo#[]=()"));
    }

    #[test]
    fn test_inline_formatting() {
        let rendered = body(vec![Block::text_block(vec![
            Inline::emphasis(vec![Inline::text("em")]),
            Inline::text(" "),
            Inline::code(vec![Inline::text(".bashrc")]),
            Inline::text(" "),
            Inline::var(vec![Inline::text("file")]),
            Inline::text(" "),
            Inline::keyboard(vec![Inline::text("C-c")]),
            Inline::footnote(vec![Inline::text("never shown")]),
            Inline::verb("a-b"),
            Inline::text("\n"),
        ])]);
        assert_eq!(
            rendered,
            ".PP\n\\fIem\\fP \\&\\fB\\&\\.bashrc\\fP file C\\-ca\\-b\n\n"
        );
    }

    #[test]
    fn test_footnote_renders_nothing_whatever_it_holds() {
        let rendered = body(vec![Block::text_block(vec![
            Inline::text("see"),
            Inline::footnote(vec![Inline::reference(
                ReferenceLabel::Unsupported,
                vec![Inline::text("nowhere")],
            )]),
            Inline::text("\n"),
        ])]);
        assert_eq!(rendered, ".PP\nsee\n\n");
    }

    #[test]
    fn test_duplicate_index_entries_render_once() {
        let doc = Document::new(vec![Block::text_block(vec![
            Inline::index(vec![Inline::text("grep")]),
            Inline::text(" "),
            Inline::index(vec![Inline::text("sed")]),
            Inline::text(" "),
            Inline::index(vec![Inline::text("grep")]),
            Inline::text("\n"),
        ])]);
        let mut visitor = ManpageVisitor::new(processor());
        let page = visitor.render(&doc).unwrap();
        assert!(page.ends_with(".PP\n\\&\\fBgrep\\fP \\&\\fBsed\\fP \n\n"));
        assert_eq!(visitor.index().ordinal("grep"), Some(0));
        assert_eq!(visitor.index().ordinal("sed"), Some(1));
        assert_eq!(visitor.index().len(), 2);
    }

    #[test]
    fn test_render_resets_state_between_documents() {
        let doc = Document::new(vec![
            Block::text_block(vec![Inline::index(vec![Inline::text("term")])]),
            Block::EnumList(EnumList::new(vec![EnumListItem::new(vec![para("a\n")])])),
        ]);
        let mut visitor = ManpageVisitor::new(processor());
        let first = visitor.render(&doc).unwrap();
        let second = visitor.render(&doc).unwrap();
        assert_eq!(first, second);
        assert!(second.contains("\\fBterm\\fP"));
        assert!(second.contains(".TP\n1.\n"));
    }

    #[test]
    fn test_references() {
        let label = |filename: Option<&str>| ReferenceLabel::Label {
            name: "open".to_string(),
            filename: filename.map(ToString::to_string),
        };
        let rendered = body(vec![Block::text_block(vec![
            Inline::reference(label(None), vec![Inline::text("function#open")]),
            Inline::text(" "),
            Inline::reference(label(Some("io.rd")), vec![Inline::text("function#open")]),
            Inline::text(" "),
            Inline::reference(
                ReferenceLabel::Url {
                    url: "https://ruby-lang.org".to_string(),
                },
                vec![Inline::text("Ruby")],
            ),
            Inline::text("\n"),
        ])]);
        assert_eq!(rendered, ".PP\nopen function#open Ruby\n\n");
    }

    #[test]
    fn test_unsupported_reference_aborts() {
        let doc = Document::new(vec![Block::text_block(vec![Inline::reference(
            ReferenceLabel::Unsupported,
            vec![Inline::text("elsewhere")],
        )])]);
        let err = processor().render(&doc).unwrap_err();
        assert!(matches!(err, Error::UnresolvableReference(ref text) if text == "elsewhere"));
    }

    #[test]
    fn test_write_to() {
        let doc = Document::new(vec![para("hi\n")]).with_source_name("hi.rd");
        let mut output = Vec::new();
        processor().write_to(&doc, &mut output, None).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with(".TH hi 1 \"October 2026\"\n.PP\nhi\n\n"));
    }

    #[test]
    fn test_derive_output_path() {
        let doc = Document::default();
        assert_eq!(
            processor()
                .derive_output_path(Path::new("docs/ls.json"), &doc)
                .unwrap(),
            Some(PathBuf::from("docs/ls.1"))
        );
        let err = processor()
            .derive_output_path(Path::new("docs/ls.1"), &doc)
            .unwrap_err();
        assert!(matches!(err, Error::OutputPathSameAsInput(_)));
    }
}
