use crate::dom::document::{Document, NodeId};
use crate::naming::candidate::select_candidate;
use crate::naming::format::{FALLBACK_NAME, NameOptions, format_name};
use crate::naming::source::NameSource;
use crate::naming::suffix::tag_suffix;

/// Outcome of one naming call, including the decision trail.
#[derive(Debug, Clone)]
pub struct DerivedName {
    pub name: String,
    /// Label of the winning source; `None` means the fallback was used.
    pub source: Option<String>,
    /// Raw candidate value before tokenization and casing.
    pub raw: String,
}

/// Derives names for elements. Options and source priority are fixed at
/// construction; build one per naming pass.
#[derive(Debug, Clone)]
pub struct NameBuilder {
    options: NameOptions,
    sources: Vec<NameSource>,
}

impl NameBuilder {
    pub fn new() -> Self {
        Self {
            options: NameOptions::default(),
            sources: NameSource::default_priority(),
        }
    }

    pub fn with_options(options: NameOptions) -> Self {
        Self {
            options,
            sources: NameSource::default_priority(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<NameSource>) -> Self {
        self.sources = sources;
        self
    }

    pub fn options(&self) -> &NameOptions {
        &self.options
    }

    pub fn sources(&self) -> &[NameSource] {
        &self.sources
    }

    /// Derive a name for one element.
    pub fn build_name(&self, doc: &Document, node: NodeId) -> String {
        self.derive(doc, node).name
    }

    /// Derive a name and report which source produced it.
    ///
    /// `svg` nodes are named after their parent element; SVG leaves rarely
    /// carry meaningful attributes of their own. A parentless `svg` root is
    /// named as itself.
    pub fn derive(&self, doc: &Document, node: NodeId) -> DerivedName {
        let node = self.resolve_target(doc, node);

        let (source, raw) = match select_candidate(doc, node, &self.sources) {
            Some((source, raw)) => (Some(source.label().to_string()), raw),
            None => (None, FALLBACK_NAME.to_string()),
        };

        let mut name = format_name(&raw, &self.options);
        if let Some(suffix) = tag_suffix(&doc.get(node).tag) {
            name.push_str(suffix);
        }

        DerivedName { name, source, raw }
    }

    fn resolve_target(&self, doc: &Document, node: NodeId) -> NodeId {
        if doc.get(node).tag.eq_ignore_ascii_case("svg") {
            doc.parent(node).unwrap_or(node)
        } else {
            node
        }
    }
}

impl Default for NameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
