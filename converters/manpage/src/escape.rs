//! Roff character escaping.
//!
//! Literal text has to be escaped before it can be placed in roff output:
//! backslashes and hyphens get a leading backslash, and a `.` or `'` at the
//! start of a line gets a leading `\&` so the line is not read as a control
//! line.

use std::borrow::Cow;

/// Zero-width marker placed in front of a line that would otherwise be taken
/// for a control line.
pub(crate) const ZERO_WIDTH: &str = "\\&";

/// Escape text for safe inclusion in roff output.
///
/// Text that needs no escaping is returned as is.
///
/// # Example
///
/// ```
/// use rd_converters_manpage::escape;
///
/// assert_eq!(escape("--verbose"), "\\-\\-verbose");
/// assert_eq!(escape(".profile"), "\\&.profile");
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !needs_escaping(text) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);
    let mut at_line_start = true;

    for ch in text.chars() {
        match ch {
            '\\' | '-' => result.push('\\'),
            '.' | '\'' if at_line_start => result.push_str(ZERO_WIDTH),
            _ => {}
        }
        result.push(ch);
        at_line_start = ch == '\n';
    }

    Cow::Owned(result)
}

fn needs_escaping(text: &str) -> bool {
    let mut at_line_start = true;
    for ch in text.chars() {
        match ch {
            '\\' | '-' => return true,
            '.' | '\'' if at_line_start => return true,
            _ => {}
        }
        at_line_start = ch == '\n';
    }
    false
}
