use serde::{Deserialize, Serialize};

/// An `Inline` is an inline node, only valid inside a block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Inline {
    /// Plain text.
    #[serde(rename = "StringElement")]
    Text(StringElement),
    /// Literal text (`(('...'))` in RD).
    Verb(Verb),
    Emphasis(Formatted),
    Code(Formatted),
    Var(Formatted),
    Keyboard(Formatted),
    Index(Formatted),
    Footnote(Formatted),
    Reference(Reference),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StringElement {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    pub content: String,
}

/// Shared shape of every inline node that just wraps other inline nodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Formatted {
    #[serde(default)]
    pub content: Vec<Inline>,
}

/// A `Reference` points at a URL, or at a label in this or another document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub label: ReferenceLabel,
    /// The text shown for the reference.
    #[serde(default)]
    pub content: Vec<Inline>,
}

/// The target of a [`Reference`], tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ReferenceLabel {
    #[serde(rename = "URL")]
    Url { url: String },
    /// A label, in another document when `filename` is set.
    Label {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
    /// Any label kind this model has no representation for.
    #[serde(other)]
    Unsupported,
}

impl Inline {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text(StringElement {
            content: content.into(),
        })
    }

    #[must_use]
    pub fn verb(content: impl Into<String>) -> Self {
        Inline::Verb(Verb {
            content: content.into(),
        })
    }

    #[must_use]
    pub fn emphasis(content: Vec<Inline>) -> Self {
        Inline::Emphasis(Formatted { content })
    }

    #[must_use]
    pub fn code(content: Vec<Inline>) -> Self {
        Inline::Code(Formatted { content })
    }

    #[must_use]
    pub fn var(content: Vec<Inline>) -> Self {
        Inline::Var(Formatted { content })
    }

    #[must_use]
    pub fn keyboard(content: Vec<Inline>) -> Self {
        Inline::Keyboard(Formatted { content })
    }

    #[must_use]
    pub fn index(content: Vec<Inline>) -> Self {
        Inline::Index(Formatted { content })
    }

    #[must_use]
    pub fn footnote(content: Vec<Inline>) -> Self {
        Inline::Footnote(Formatted { content })
    }

    #[must_use]
    pub fn reference(label: ReferenceLabel, content: Vec<Inline>) -> Self {
        Inline::Reference(Reference { label, content })
    }

    /// The raw text of a `StringElement` or `Verb`, `None` for any other node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Inline::Text(text) => Some(&text.content),
            Inline::Verb(verb) => Some(&verb.content),
            Inline::Emphasis(_)
            | Inline::Code(_)
            | Inline::Var(_)
            | Inline::Keyboard(_)
            | Inline::Index(_)
            | Inline::Footnote(_)
            | Inline::Reference(_) => None,
        }
    }
}

/// Concatenate the plain text of inline nodes, descending into formatting.
///
/// Footnotes contribute nothing.
#[must_use]
pub fn inlines_to_string(nodes: &[Inline]) -> String {
    let mut result = String::new();
    for node in nodes {
        match node {
            Inline::Text(text) => result.push_str(&text.content),
            Inline::Verb(verb) => result.push_str(&verb.content),
            Inline::Emphasis(f)
            | Inline::Code(f)
            | Inline::Var(f)
            | Inline::Keyboard(f)
            | Inline::Index(f) => result.push_str(&inlines_to_string(&f.content)),
            Inline::Reference(reference) => {
                result.push_str(&inlines_to_string(&reference.content));
            }
            Inline::Footnote(_) => {}
        }
    }
    result
}
