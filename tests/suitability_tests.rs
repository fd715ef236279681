use element_namer::naming::suitability::text_is_unsuitable;

use crate::common::tree::{NodeExt, doc, el};

mod common;

#[test]
fn leaf_element_text_is_suitable() {
    let doc = doc(el("SPAN").text("Checkout"));
    assert!(!text_is_unsuitable(&doc, doc.root()));
}

#[test]
fn text_only_element_is_suitable_regardless_of_length() {
    let doc = doc(el("P").text("a very long paragraph of text that has no child elements at all"));
    assert!(!text_is_unsuitable(&doc, doc.root()));
}

#[test]
fn single_child_chain_stays_suitable() {
    let doc = doc(el("DIV").child(el("SPAN").child(el("B").text("Buy"))));
    assert!(!text_is_unsuitable(&doc, doc.root()));
}

#[test]
fn two_direct_children_are_unsuitable() {
    let doc = doc(el("DIV").child(el("SPAN").text("a")).child(el("SPAN").text("b")));
    assert!(text_is_unsuitable(&doc, doc.root()));
}

#[test]
fn branch_deep_in_a_chain_poisons_the_root() {
    // DIV > SECTION > UL > (LI, LI): the branch three levels down makes the
    // root's aggregated text unsuitable.
    let doc = doc(
        el("DIV").child(
            el("SECTION").child(
                el("UL")
                    .child(el("LI").text("one"))
                    .child(el("LI").text("two")),
            ),
        ),
    );
    assert!(text_is_unsuitable(&doc, doc.root()));
}

#[test]
fn suitability_is_judged_per_node() {
    // The branching parent is unsuitable, but each leaf child is fine.
    let root = el("DIV")
        .child(el("SPAN").text("left"))
        .child(el("SPAN").text("right"));
    let doc = doc(root);
    let children = doc.children(doc.root()).to_vec();

    assert!(text_is_unsuitable(&doc, doc.root()));
    assert!(!text_is_unsuitable(&doc, children[0]));
    assert!(!text_is_unsuitable(&doc, children[1]));
}
