/// Errors that can occur while loading a document tree.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree contains a node kind no renderer knows about, or one that is
    /// not allowed where it sits (an inline kind in a block list, say).
    ///
    /// This points at a defect in whatever produced the tree, not at the
    /// document itself.
    #[error("unhandled node kind '{kind}' at {path}")]
    UnhandledNodeKind { kind: String, path: String },
}
