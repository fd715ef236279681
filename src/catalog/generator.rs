use indexmap::IndexMap;

use crate::catalog::descriptor::LocatorDescriptor;
use crate::catalog::resolver::CollisionResolver;
use crate::dom::document::{Document, NodeId};
use crate::naming::builder::NameBuilder;
use crate::trace::event::TraceEvent;
use crate::trace::logger::TraceLogger;

/// Flat, insertion-ordered name -> descriptor document. Serializes as one
/// JSON/YAML object with a key per named element.
pub type ElementCatalog = IndexMap<String, LocatorDescriptor>;

// ============================================================================
// Collaborator seams
// ============================================================================

/// Supplies "TYPE=LOCATOR" strings for elements. The locator construction
/// algorithm itself lives page-side; production snapshots carry its output
/// per node.
pub trait LocatorSource {
    fn build(&self, doc: &Document, node: NodeId) -> Option<String>;
}

/// Decides whether an element is displayed. The visibility algorithm lives
/// page-side; production snapshots carry its verdict per node.
pub trait VisibilityProbe {
    fn is_displayed(&self, doc: &Document, node: NodeId) -> bool;
}

/// Locators recorded in the snapshot by the extractor.
#[derive(Debug, Default)]
pub struct SnapshotLocators;

impl LocatorSource for SnapshotLocators {
    fn build(&self, doc: &Document, node: NodeId) -> Option<String> {
        doc.get(node).locator.clone()
    }
}

/// Visibility verdicts recorded in the snapshot by the extractor.
#[derive(Debug, Default)]
pub struct SnapshotVisibility;

impl VisibilityProbe for SnapshotVisibility {
    fn is_displayed(&self, doc: &Document, node: NodeId) -> bool {
        doc.get(node).visible
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Name one element and package its locator. Returns `None` when the locator
/// collaborator cannot describe the element.
pub fn generate_element(
    doc: &Document,
    node: NodeId,
    builder: &NameBuilder,
    locators: &dyn LocatorSource,
) -> Option<(String, LocatorDescriptor)> {
    let target = locators.build(doc, node)?;
    let name = builder.build_name(doc, node);
    Some((name, LocatorDescriptor::parse(&target)))
}

/// Name every discovered element of the page in document order.
///
/// Discovery matches arrive as `candidate` flags on the snapshot. Hidden
/// elements and elements without a locator are skipped before naming and
/// never consume a name. The whole batch resolves against one
/// [`CollisionResolver`], so the returned catalog has unique keys in
/// encounter order.
pub fn generate_catalog(
    doc: &Document,
    builder: &NameBuilder,
    locators: &dyn LocatorSource,
    visibility: &dyn VisibilityProbe,
    tracer: &TraceLogger,
) -> ElementCatalog {
    let mut catalog = ElementCatalog::new();
    let mut resolver = CollisionResolver::new();

    for node in doc.in_document_order() {
        let el = doc.get(node);
        if !el.candidate {
            continue;
        }
        if !visibility.is_displayed(doc, node) {
            tracer.log(&TraceEvent::skipped(node.index(), &el.tag, "hidden"));
            continue;
        }
        let Some(target) = locators.build(doc, node) else {
            tracer.log(&TraceEvent::skipped(node.index(), &el.tag, "no locator"));
            continue;
        };

        let derived = builder.derive(doc, node);
        let name = resolver.resolve(derived.name.clone());
        if name != derived.name {
            tracer.log(&TraceEvent::collision(&derived.name, &name));
        }
        tracer.log(&TraceEvent::named(node.index(), &el.tag, &derived, &name));

        catalog.insert(name, LocatorDescriptor::parse(&target));
    }

    catalog
}
