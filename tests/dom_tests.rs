use element_namer::dom::document::Document;
use element_namer::dom::node::ElementNode;

use crate::common::tree::{NodeExt, doc, el};

mod common;

#[test]
fn flattening_is_preorder_document_order() {
    // BODY > (DIV > SPAN, A): pre-order is BODY, DIV, SPAN, A.
    let root = el("BODY")
        .child(el("DIV").child(el("SPAN")))
        .child(el("A"));
    let doc = doc(root);

    let tags: Vec<&str> = doc
        .in_document_order()
        .map(|n| doc.get(n).tag.as_str())
        .collect();
    assert_eq!(tags, ["BODY", "DIV", "SPAN", "A"]);
}

#[test]
fn parent_links_point_upwards() {
    let root = el("BODY").child(el("DIV").child(el("SPAN")));
    let doc = doc(root);

    let div = doc.children(doc.root())[0];
    let span = doc.children(div)[0];

    assert!(doc.parent(doc.root()).is_none());
    assert_eq!(doc.parent(div), Some(doc.root()));
    assert_eq!(doc.parent(span), Some(div));
}

#[test]
fn text_content_aggregates_descendants_in_order() {
    let root = el("DIV")
        .text("Total")
        .child(el("B").text("42"))
        .child(el("SPAN").text("items"));
    let doc = doc(root);
    assert_eq!(doc.text_content(doc.root()), "Total 42 items");
}

#[test]
fn text_content_skips_blank_segments() {
    let root = el("DIV").text("  ").child(el("SPAN").text("only"));
    let doc = doc(root);
    assert_eq!(doc.text_content(doc.root()), "only");
}

#[test]
fn dotted_paths_resolve_children() {
    let root = el("BODY")
        .child(el("HEADER").child(el("H1").id("title")))
        .child(el("MAIN").child(el("A").id("first")).child(el("A").id("second")));
    let doc = doc(root);

    assert_eq!(doc.find_by_path(""), Some(doc.root()));
    assert_eq!(doc.get(doc.find_by_path("0.0").unwrap()).id, "title");
    assert_eq!(doc.get(doc.find_by_path("1.1").unwrap()).id, "second");
}

#[test]
fn bad_paths_resolve_to_none() {
    let doc = doc(el("BODY").child(el("DIV")));
    assert!(doc.find_by_path("3").is_none());
    assert!(doc.find_by_path("0.0").is_none());
    assert!(doc.find_by_path("x").is_none());
}

#[test]
fn snapshot_nodes_default_missing_fields() {
    let node: ElementNode = serde_json::from_str(r#"{"tag": "DIV"}"#).unwrap();
    assert!(node.id.is_empty());
    assert!(node.class.is_empty());
    assert!(node.attrs.is_empty());
    assert!(node.text.is_empty());
    assert!(node.children.is_empty());
    assert!(node.locator.is_none());
    assert!(node.visible);
    assert!(!node.candidate);
}

#[test]
fn snapshot_trees_deserialize_recursively() {
    let json = r#"
    {
        "tag": "BODY",
        "children": [
            {"tag": "A", "id": "home", "locator": "css=#home", "candidate": true},
            {"tag": "DIV", "visible": false}
        ]
    }"#;
    let root: ElementNode = serde_json::from_str(json).unwrap();
    let doc = Document::from_snapshot(&root);

    assert_eq!(doc.len(), 3);
    let a = doc.children(doc.root())[0];
    let div = doc.children(doc.root())[1];
    assert_eq!(doc.get(a).locator.as_deref(), Some("css=#home"));
    assert!(doc.get(a).candidate);
    assert!(!doc.get(div).visible);
}
