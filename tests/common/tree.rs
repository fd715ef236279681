use std::collections::HashMap;

use element_namer::dom::document::Document;
use element_namer::dom::node::ElementNode;

/// Bare element for building snapshot trees in tests.
pub fn el(tag: &str) -> ElementNode {
    ElementNode {
        tag: tag.to_string(),
        id: String::new(),
        class: String::new(),
        attrs: HashMap::new(),
        text: String::new(),
        children: Vec::new(),
        locator: None,
        visible: true,
        candidate: false,
    }
}

/// Chainable setters so trees read as literals.
pub trait NodeExt: Sized {
    fn id(self, value: &str) -> Self;
    fn class(self, value: &str) -> Self;
    fn text(self, value: &str) -> Self;
    fn attr(self, name: &str, value: &str) -> Self;
    fn child(self, child: ElementNode) -> Self;
    fn locator(self, value: &str) -> Self;
    fn hidden(self) -> Self;
    fn candidate(self) -> Self;
}

impl NodeExt for ElementNode {
    fn id(mut self, value: &str) -> Self {
        self.id = value.to_string();
        self
    }

    fn class(mut self, value: &str) -> Self {
        self.class = value.to_string();
        self
    }

    fn text(mut self, value: &str) -> Self {
        self.text = value.to_string();
        self
    }

    fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    fn locator(mut self, value: &str) -> Self {
        self.locator = Some(value.to_string());
        self
    }

    fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    fn candidate(mut self) -> Self {
        self.candidate = true;
        self
    }
}

pub fn doc(root: ElementNode) -> Document {
    Document::from_snapshot(&root)
}

/// Absolute path of a JSON fixture under tests/fixtures.
pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    base.join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}
