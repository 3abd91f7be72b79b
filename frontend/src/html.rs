//! Declarative view layer.
//!
//! Components describe their markup as a [`VNode`] tree instead of
//! interpolating HTML strings.  Mounting goes through `create_element` /
//! `create_text_node`, so text and attribute values never reach the HTML
//! parser and cannot inject markup.  [`VNode::to_html`] produces the
//! equivalent escaped serialisation; tests use it to inspect views without
//! a browser.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node};

/// Tags that never have children or a closing tag.
const VOID_TAGS: [&str; 4] = ["br", "img", "input", "source"];

#[derive(Clone, Debug, PartialEq)]
pub enum VNode {
    Element(VElement),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VElement {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<VNode>,
}

/// Start an element description.
pub fn el(tag: &'static str) -> VElement {
    VElement {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(content: impl Into<String>) -> VNode {
    VNode::Text(content.into())
}

impl VElement {
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn style(self, style: &str) -> Self {
        self.attr("style", style)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<VNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<VNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> &[VNode] {
        &self.children
    }

    /// Create the DOM element (and its subtree) without attaching it.
    pub fn mount(&self, document: &Document) -> Result<Element, JsValue> {
        let element = document.create_element(self.tag)?;
        for (name, value) in &self.attrs {
            element.set_attribute(name, value)?;
        }
        for child in &self.children {
            let node = child.mount(document)?;
            element.append_child(&node)?;
        }
        Ok(element)
    }

    /// Escaped HTML of this element's children only.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }
}

impl From<VElement> for VNode {
    fn from(el: VElement) -> Self {
        VNode::Element(el)
    }
}

impl VNode {
    pub fn mount(&self, document: &Document) -> Result<Node, JsValue> {
        match self {
            VNode::Element(el) => Ok(el.mount(document)?.into()),
            VNode::Text(content) => Ok(document.create_text_node(content).into()),
        }
    }

    /// Mount and append to `parent`.
    pub fn append_to(&self, document: &Document, parent: &Element) -> Result<Node, JsValue> {
        let node = self.mount(document)?;
        parent.append_child(&node)?;
        Ok(node)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Concatenated text content, as `Node.textContent` would report it.
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text(t) => t.clone(),
            VNode::Element(el) => el.children.iter().map(VNode::text_content).collect(),
        }
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&VElement> {
        match self {
            VNode::Text(_) => None,
            VNode::Element(el) => {
                let matches = el
                    .get_attr("class")
                    .map(|c| c.split_whitespace().any(|c| c == class))
                    .unwrap_or(false);
                if matches {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find_by_class(class))
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VNode::Text(t) => out.push_str(&escape_html(t)),
            VNode::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(el.tag);
                out.push('>');
            }
        }
    }
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn script_tags_become_literal_text() {
        let node: VNode = el("div").text("<script>alert(1)</script>").into();
        assert_eq!(
            node.to_html(),
            "<div>&lt;script&gt;alert(1)&lt;/script&gt;</div>"
        );
    }

    #[test]
    fn attributes_are_quoted_and_escaped() {
        let node: VNode = el("img").attr("alt", "a\"b").attr("src", "/x.png").into();
        assert_eq!(node.to_html(), "<img alt=\"a&quot;b\" src=\"/x.png\">");
    }

    #[test]
    fn find_by_class_walks_children() {
        let node: VNode = el("div")
            .class("outer")
            .child(el("p").class("media-caption big").text("cap"))
            .into();
        let found = node.find_by_class("media-caption").unwrap();
        assert_eq!(found.tag(), "p");
        assert_eq!(VNode::from(found.clone()).text_content(), "cap");
    }

    proptest! {
        #[test]
        fn text_serialises_to_escaped_form(s in any::<String>()) {
            let node: VNode = el("div").text(s.clone()).into();
            prop_assert_eq!(node.to_html(), format!("<div>{}</div>", escape_html(&s)));
            let inner = escape_html(&s);
            prop_assert!(!inner.contains('<'));
            prop_assert!(!inner.contains('>'));
        }
    }
}
