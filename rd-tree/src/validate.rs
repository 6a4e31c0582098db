use serde_json::Value;
use tracing::instrument;

use crate::{
    Error,
    model::{BLOCK_KINDS, DOCUMENT_KIND, INLINE_KINDS, NODE_KINDS},
};

/// Where a node sits in the tree, which decides the kinds it may have.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    Block,
    Inline,
    /// An entry of a list, which must be that list's item kind.
    Item(&'static str),
    /// Not a node position (a reference label, for instance).
    Other,
}

impl Slot {
    fn allows(self, kind: &str) -> bool {
        match self {
            Slot::Root => kind == DOCUMENT_KIND,
            Slot::Block => BLOCK_KINDS.contains(&kind),
            Slot::Inline => INLINE_KINDS.contains(&kind),
            Slot::Item(item) => kind == item,
            Slot::Other => NODE_KINDS.contains(&kind),
        }
    }

    /// Slot of the values under `key` in a node of kind `parent`.
    fn child(parent: Option<&str>, key: &str) -> Slot {
        match key {
            "blocks" | "description" => Slot::Block,
            "content" | "term" => Slot::Inline,
            "items" => parent.and_then(item_kind).map_or(Slot::Other, Slot::Item),
            _ => Slot::Other,
        }
    }
}

fn item_kind(list: &str) -> Option<&'static str> {
    match list {
        "ItemList" => Some("ItemListItem"),
        "EnumList" => Some("EnumListItem"),
        "DescList" => Some("DescListItem"),
        "MethodList" => Some("MethodListItem"),
        _ => None,
    }
}

// Check that every `type` tag in a raw tree names a kind allowed where the node
// sits.
//
// Serde would reject a misplaced tag too, but only with a generic message; this
// reports the offending kind together with where it sits in the tree.
#[instrument(level = "trace", skip(value))]
pub(crate) fn node_kinds(value: &Value) -> Result<(), Error> {
    walk(value, Slot::Root, &mut String::new())
}

fn walk(value: &Value, slot: Slot, path: &mut String) -> Result<(), Error> {
    match value {
        Value::Object(map) => {
            let kind = map.get("type").and_then(Value::as_str);
            if let Some(kind) = kind
                && !slot.allows(kind)
            {
                return Err(Error::UnhandledNodeKind {
                    kind: kind.to_string(),
                    path: if path.is_empty() {
                        "/".to_string()
                    } else {
                        path.clone()
                    },
                });
            }
            for (key, child) in map {
                let len = path.len();
                path.push('/');
                path.push_str(key);
                walk(child, Slot::child(kind, key), path)?;
                path.truncate(len);
            }
            Ok(())
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&i.to_string());
                walk(child, slot, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
    }
}
