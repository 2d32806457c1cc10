//! Abstract visual tree produced by the formatter.
//!
//! DESIGN
//! ======
//! Renderers build `Node` values instead of markup strings. Text nodes and
//! attribute values are escaped when the tree is turned into HTML, so
//! host-controlled text can never inject tags. The only raw markup allowed
//! is `Node::Trusted`, which takes a `&'static str` and therefore can only
//! hold compile-time constants such as icons.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::fmt::Write;

use serde::Serialize;

/// One node of the visual tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
    Trusted { markup: &'static str },
}

/// An element with classes, optional inline style and children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    /// A `<span>` with the given class.
    #[must_use]
    pub fn span(class: &str) -> Element {
        Element::new("span", class)
    }

    /// A `<div>` with the given class.
    #[must_use]
    pub fn div(class: &str) -> Element {
        Element::new("div", class)
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub fn trusted(markup: &'static str) -> Self {
        Self::Trusted { markup }
    }

    /// Serialize the tree to HTML, escaping every text node and attribute.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(el) => el.write_html(out),
            Self::Text { text } => out.push_str(&escape_html(text)),
            Self::Trusted { markup } => out.push_str(markup),
        }
    }

    /// Concatenated text content, ignoring trusted markup.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(el) => el.text_content(),
            Self::Text { text } => text.clone(),
            Self::Trusted { .. } => String::new(),
        }
    }
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str, class: &str) -> Self {
        Self { tag, class: class.to_owned(), style: None, children: Vec::new() }
    }

    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Serialize this element and its children to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Concatenated text of all descendant text nodes. Trusted markup
    /// contributes nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// HTML of the children only, for adapters that render the element
    /// itself natively and fill it with `inner_html`.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        // Writing to a String cannot fail.
        out.push('<');
        out.push_str(self.tag);
        if !self.class.is_empty() {
            write!(out, " class=\"{}\"", escape_html(&self.class)).unwrap_or_default();
        }
        if let Some(style) = &self.style {
            write!(out, " style=\"{}\"", escape_html(style)).unwrap_or_default();
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        write!(out, "</{}>", self.tag).unwrap_or_default();
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Escape text for use in HTML content or a quoted attribute value.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
