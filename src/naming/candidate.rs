use crate::dom::document::{Document, NodeId};
use crate::naming::source::NameSource;
use crate::naming::suitability::text_is_unsuitable;

/// First non-empty trimmed value over the source priority list.
///
/// Sources are consulted left to right and the first hit short-circuits. The
/// `text` channel is gated by the suitability filter: structurally rich
/// subtrees contribute nothing. Returns the winning source alongside the
/// value so callers can record the decision.
pub fn select_candidate<'a>(
    doc: &Document,
    node: NodeId,
    sources: &'a [NameSource],
) -> Option<(&'a NameSource, String)> {
    sources.iter().find_map(|source| {
        let raw = resolve_source(doc, node, source);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some((source, trimmed.to_string()))
        }
    })
}

fn resolve_source(doc: &Document, node: NodeId, source: &NameSource) -> String {
    let el = doc.get(node);
    match source {
        NameSource::Id => el.id.clone(),
        NameSource::Class => el.class.clone(),
        NameSource::Text => {
            if text_is_unsuitable(doc, node) {
                String::new()
            } else {
                doc.text_content(node)
            }
        }
        NameSource::Attr(name) => el.attrs.get(name).cloned().unwrap_or_default(),
    }
}
