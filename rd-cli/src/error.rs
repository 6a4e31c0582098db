use miette::{Diagnostic, NamedSource, SourceSpan};
use rd_converters_manpage::Error;

/// Rich error wrapper for miette display with the offending JSON
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic()]
pub(crate) struct RichError {
    message: String,

    #[help]
    advice: Option<String>,

    #[source_code]
    src: NamedSource<String>,

    #[label("{position_advice}")]
    span: SourceSpan,
    position_advice: String,
}

/// Byte offset of a 1-based line and column, clamped to the source.
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

fn advice(error: &Error) -> Option<String> {
    #[allow(clippy::wildcard_enum_match_arm)]
    match error {
        Error::Tree(rd_tree::Error::Json(_)) => {
            Some("the input must be the JSON document tree produced by the RD parser".to_string())
        }
        Error::UnhandledNodeKind { .. } => Some(format!(
            "blocks can be {}; inline content can be {}",
            rd_tree::BLOCK_KINDS.join(", "),
            rd_tree::INLINE_KINDS.join(", ")
        )),
        Error::MalformedSignature(_) => {
            Some("write subscript assignment as `Owner#[]=(index, value)`".to_string())
        }
        Error::UnresolvableReference(_) => {
            Some("references can only point to a URL or a label".to_string())
        }
        Error::OutputPathSameAsInput(_) => {
            Some("rename the input file or pass --stdout".to_string())
        }
        _ => None,
    }
}

/// Build a report for a failed conversion.
///
/// `source_context` is the name and text of the input, used to point at the
/// error position when the JSON could not be read.
pub(crate) fn display(error: &Error, source_context: Option<(&str, &str)>) -> miette::Report {
    let advice = advice(error);

    if let (Error::Tree(rd_tree::Error::Json(json)), Some((name, source))) = (error, source_context)
        && json.line() > 0
    {
        let line = json.line();
        let column = json.column();
        let offset = offset_of(source, line, column);
        let length = usize::from(offset < source.len());

        return miette::Report::new(RichError {
            message: error.to_string(),
            advice,
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::new(offset.into(), length),
            position_advice: format!("error occurred here (line {line}, column {column})"),
        });
    }

    match advice {
        Some(advice) => miette::miette!(help = advice, "{error}"),
        None => miette::miette!("{error}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_offset_of() {
        let source = "{\n  \"blocks\": [\n}";
        assert_eq!(offset_of(source, 1, 1), 0);
        assert_eq!(offset_of(source, 2, 3), 4);
        assert_eq!(offset_of(source, 3, 1), 16);
        assert_eq!(offset_of(source, 9, 9), source.len());
    }

    #[test]
    fn test_display_points_at_json_error() {
        let source = "{\"blocks\": [}";
        let tree_error = rd_tree::from_str(source).unwrap_err();
        let report = display(&Error::from(tree_error), Some(("broken.json", source)));
        assert!(report.downcast_ref::<RichError>().is_some());
        assert!(report.to_string().starts_with("invalid document tree"));
    }

    #[test]
    fn test_unreadable_input_gets_no_json_help() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let report = display(&Error::from(rd_tree::Error::from(io)), None);
        assert_eq!(report.to_string(), "I/O error: missing.json");
        assert!(report.help().is_none());
    }

    #[test]
    fn test_display_without_source() {
        let report = display(&Error::MalformedSignature("Foo#[]=()".to_string()), None);
        assert!(report.to_string().contains("Foo#[]=()"));
        assert!(report.downcast_ref::<RichError>().is_none());
    }
}
