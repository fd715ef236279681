use std::collections::HashMap;

use serde::Deserialize;

/// One element as emitted by the page-side extractor.
///
/// `locator`, `visible` and `candidate` are collaborator outputs computed in
/// the page (locator builders, the visibility check, the discovery query) and
/// carried through the snapshot untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementNode {
    pub tag: String,

    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub class: String,

    #[serde(default)]
    pub attrs: HashMap<String, String>,

    /// Text owned directly by this element, whitespace-normalized by the
    /// extractor. Descendant text lives on the descendants.
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub children: Vec<ElementNode>,

    /// "TYPE=LOCATOR" string from the page-side locator builders, if any.
    #[serde(default)]
    pub locator: Option<String>,

    #[serde(default = "default_visible")]
    pub visible: bool,

    /// True when the page-side discovery query matched this node.
    #[serde(default)]
    pub candidate: bool,
}

fn default_visible() -> bool {
    true
}
