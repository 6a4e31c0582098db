//! Error types for the manpage converter.

use std::path::PathBuf;

/// Errors that can occur during manpage conversion.
///
/// None of these are recoverable: any of them aborts the whole conversion and
/// no partial output is written.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Format error during string formatting.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),

    /// The document tree could not be loaded.
    #[error(transparent)]
    Tree(rd_tree::Error),

    /// The tree contains a node kind that has no rendering rule.
    #[error("no rendering rule for node kind '{kind}' (at {path})")]
    UnhandledNodeKind { kind: String, path: String },

    /// A subscript assignment (`[]=`) method descriptor has no comma between
    /// its index arguments and the assigned value.
    #[error("malformed method signature '{0}': expected index arguments and a value separated by a comma")]
    MalformedSignature(String),

    /// A reference carries a label kind that cannot be rendered.
    #[error("cannot resolve reference '{0}': unsupported label kind")]
    UnresolvableReference(String),

    /// Input and output file paths are the same.
    #[error("input file and output file cannot be the same: {0}")]
    OutputPathSameAsInput(PathBuf),
}

impl From<rd_tree::Error> for Error {
    fn from(error: rd_tree::Error) -> Self {
        match error {
            rd_tree::Error::UnhandledNodeKind { kind, path } => {
                Error::UnhandledNodeKind { kind, path }
            }
            // rd_tree::Error is non-exhaustive
            #[allow(clippy::wildcard_enum_match_arm)]
            other => Error::Tree(other),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unhandled_node_kind_is_lifted() {
        let error = Error::from(rd_tree::Error::UnhandledNodeKind {
            kind: "Include".to_string(),
            path: "/blocks/3".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "no rendering rule for node kind 'Include' (at /blocks/3)"
        );
    }

    #[test]
    fn test_tree_errors_keep_their_own_message() {
        let error = Error::from(rd_tree::from_str("{").unwrap_err());
        let message = error.to_string();
        assert!(message.starts_with("invalid document tree: "), "{message}");
        assert_eq!(message.matches("invalid document tree").count(), 1);

        let error = Error::from(rd_tree::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.json",
        )));
        assert_eq!(error.to_string(), "I/O error: missing.json");
    }

    #[test]
    fn test_malformed_signature_reports_descriptor() {
        let error = Error::MalformedSignature("Foo#[]=()".to_string());
        assert!(error.to_string().contains("'Foo#[]=()'"));
    }
}
