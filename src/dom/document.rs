use std::collections::HashMap;

use crate::dom::node::ElementNode;

/// Handle to an element inside a [`Document`]. Ids are assigned in pre-order,
/// so ascending `NodeId` is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Flattened element with parent/child links resolved.
#[derive(Debug)]
pub struct ElementData {
    pub tag: String,
    pub id: String,
    pub class: String,
    pub attrs: HashMap<String, String>,
    pub text: String,
    pub locator: Option<String>,
    pub visible: bool,
    pub candidate: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Immutable arena over one extracted page snapshot.
///
/// Built once from the deserialized [`ElementNode`] tree; naming never
/// mutates it. The arena exists so the naming core can walk upwards (the
/// `svg` parent substitution) as well as downwards.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<ElementData>,
}

impl Document {
    pub fn from_snapshot(root: &ElementNode) -> Self {
        let mut nodes = Vec::new();
        flatten(root, None, &mut nodes);
        Document { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, node: NodeId) -> &ElementData {
        &self.nodes[node.0]
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Element children in document order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn child_element_count(&self, node: NodeId) -> usize {
        self.nodes[node.0].children.len()
    }

    /// Aggregated text of the element and all its descendants, in document
    /// order, joined with single spaces.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(node, &mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, node: NodeId, out: &mut Vec<&'a str>) {
        let el = self.get(node);
        let own = el.text.trim();
        if !own.is_empty() {
            out.push(own);
        }
        for &child in &el.children {
            self.collect_text(child, out);
        }
    }

    pub fn in_document_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Resolve a dotted child-index path relative to the root, e.g. "0.2"
    /// is the third child of the root's first child. The empty path is the
    /// root itself.
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let mut node = self.root();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Some(node);
        }
        for part in trimmed.split('.') {
            let index: usize = part.parse().ok()?;
            node = *self.children(node).get(index)?;
        }
        Some(node)
    }
}

fn flatten(node: &ElementNode, parent: Option<NodeId>, nodes: &mut Vec<ElementData>) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(ElementData {
        tag: node.tag.clone(),
        id: node.id.clone(),
        class: node.class.clone(),
        attrs: node.attrs.clone(),
        text: node.text.clone(),
        locator: node.locator.clone(),
        visible: node.visible,
        candidate: node.candidate,
        parent,
        children: Vec::new(),
    });
    for child in &node.children {
        let child_id = flatten(child, Some(id), nodes);
        nodes[id.0].children.push(child_id);
    }
    id
}
