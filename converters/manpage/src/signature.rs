//! Method signature parsing for method list terms.
//!
//! Method list terms are free-form descriptors in the usual Ruby reference
//! shorthand: `Array#push(obj)`, `File.open(path)`, `Foo::bar`, or a bare
//! `puts(obj)` for a function. They are split into owner, relation, name and
//! arguments so that the subscript operators can be shown the way they are
//! called (`ary[index] = value`) rather than the way they are defined.

use crate::Error;

/// How a method relates to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `Owner#name`
    Instance,
    /// `Owner.name` or `Owner::name`
    Module,
    /// A free function, with no owner.
    Function,
}

impl Relation {
    /// The separator shown between owner and name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Instance => "#",
            Relation::Module => ".",
            Relation::Function => "",
        }
    }
}

/// A method descriptor split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature<'a> {
    raw: &'a str,
    /// Owning class or module, empty for functions.
    pub owner: &'a str,
    pub relation: Relation,
    pub name: &'a str,
    /// Everything after the name, parentheses included.
    pub args: &'a str,
}

/// Split a method descriptor into owner, relation, name and arguments.
///
/// # Example
///
/// ```
/// use rd_converters_manpage::{Relation, parse_signature};
///
/// let sig = parse_signature("Array#push(obj)");
/// assert_eq!(sig.owner, "Array");
/// assert_eq!(sig.relation, Relation::Instance);
/// assert_eq!(sig.name, "push");
/// assert_eq!(sig.args, "(obj)");
/// ```
#[must_use]
pub fn parse_signature(raw: &str) -> Signature<'_> {
    let (head, args) = split_args(raw.trim());
    let (owner, relation, name) = split_owner(head);
    Signature {
        raw,
        owner,
        relation,
        name,
        args,
    }
}

impl Signature<'_> {
    /// Render the signature as it should be displayed.
    ///
    /// `[]` and `[]=` are shown in call form (`Foo#[i]`, `Foo#[i] = v`); every
    /// other name keeps its arguments exactly as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSignature`] for a `[]=` descriptor whose
    /// arguments have no comma separating the index from the value.
    pub fn render(&self) -> Result<String, Error> {
        let prefix = match self.relation {
            Relation::Function => String::new(),
            Relation::Instance | Relation::Module => {
                format!("{}{}", self.owner, self.relation.as_str())
            }
        };

        match self.name {
            "[]" => Ok(format!("{prefix}[{}]", unwrap_parens(self.args))),
            "[]=" => {
                let (index, value) = unwrap_parens(self.args)
                    .rsplit_once(',')
                    .ok_or_else(|| Error::MalformedSignature(self.raw.to_string()))?;
                Ok(format!("{prefix}[{}] = {}", index.trim(), value.trim()))
            }
            name => Ok(format!("{prefix}{name}{}", self.args)),
        }
    }
}

// The head is everything up to the argument list or block.
fn split_args(descriptor: &str) -> (&str, &str) {
    let end = descriptor
        .find(|c: char| c == '(' || c == '{' || c.is_whitespace())
        .unwrap_or(descriptor.len());
    descriptor.split_at(end)
}

fn split_owner(head: &str) -> (&str, Relation, &str) {
    if let Some((owner, name)) = head.split_once('#') {
        return with_owner(owner, Relation::Instance, name, head);
    }

    // `A::B.c` and `A.b::c` both split at the later separator
    let by_dot = head.rsplit_once('.');
    let by_colons = head.rsplit_once("::");
    let split = match (by_dot, by_colons) {
        (Some(dot), Some(colons)) => Some(if dot.0.len() > colons.0.len() {
            dot
        } else {
            colons
        }),
        (dot, colons) => dot.or(colons),
    };

    match split {
        Some((owner, name)) => with_owner(owner, Relation::Module, name, head),
        None => ("", Relation::Function, head),
    }
}

fn with_owner<'a>(
    owner: &'a str,
    relation: Relation,
    name: &'a str,
    head: &'a str,
) -> (&'a str, Relation, &'a str) {
    if owner.is_empty() {
        // `#foo` or `.foo`: nothing to attach the method to
        ("", Relation::Function, name)
    } else if name.is_empty() {
        ("", Relation::Function, head)
    } else {
        (owner, relation, name)
    }
}

fn unwrap_parens(args: &str) -> &str {
    let args = args.trim();
    args.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(args)
        .trim()
}
