use crate::dom::document::{Document, NodeId};

/// True when the element's subtree branches into two or more element children
/// anywhere at any depth. Text under such an element aggregates unrelated
/// nested content, so it is rejected as a name source.
///
/// A single-child chain of any length stays suitable until some descendant
/// branches. Elements with only text children are always suitable.
pub fn text_is_unsuitable(doc: &Document, node: NodeId) -> bool {
    let children = doc.children(node);
    match children.len() {
        0 => false,
        1 => text_is_unsuitable(doc, children[0]),
        _ => true,
    }
}
