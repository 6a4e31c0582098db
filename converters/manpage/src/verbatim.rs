//! Verbatim block rendering for manpages.

use rd_tree::Verbatim;

use crate::escape::{ZERO_WIDTH, escape};

/// Indent put in front of every verbatim line.
const INDENT: &str = "    ";

/// Render a verbatim block in no-fill mode (`.nf`/`.fi`).
///
/// Each line is escaped on its own, since any of them could otherwise start
/// with a control character.
pub(crate) fn visit_verbatim(verbatim: &Verbatim) -> String {
    let mut result = String::from(".nf\n");
    for line in &verbatim.lines {
        let line = line.trim_end_matches(['\r', '\n']);
        result.push_str(ZERO_WIDTH);
        result.push_str(INDENT);
        result.push_str(&escape(line));
        result.push('\n');
    }
    result.push_str(".fi\n");
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn verbatim(lines: &[&str]) -> Verbatim {
        Verbatim {
            lines: lines.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_lines_are_indented() {
        assert_eq!(
            visit_verbatim(&verbatim(&["ls -l", "  cd /"])),
            ".nf\n\\&    ls \\-l\n\\&      cd /\n.fi\n"
        );
    }

    #[test]
    fn test_each_line_escaped_once() {
        assert_eq!(
            visit_verbatim(&verbatim(&[".start", "a\\b"])),
            ".nf\n\\&    \\&.start\n\\&    a\\\\b\n.fi\n"
        );
    }

    #[test]
    fn test_line_terminators_are_dropped() {
        assert_eq!(
            visit_verbatim(&verbatim(&["one\n", "two\r\n"])),
            ".nf\n\\&    one\n\\&    two\n.fi\n"
        );
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(visit_verbatim(&verbatim(&[])), ".nf\n.fi\n");
    }
}
