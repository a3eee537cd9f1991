// ABOUTME: Tagged node handle over scraper's tree with capability accessors.
// ABOUTME: Exposes relations, attribute access, text content, and markup serialization per node kind.

//! Node handles.
//!
//! A [`Node`] borrows a single vertex of a parsed document. Which operations
//! apply depends on its [`NodeKind`]: attributes exist only on elements, so
//! callers go through [`Node::as_element`] rather than probing at runtime.

use ego_tree::NodeRef;
use scraper::ElementRef;

/// The kind of a node, with borrowed access to its payload.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Document,
    Element(ElementRef<'a>),
    Text(&'a str),
    Comment(&'a str),
    Doctype(&'a str),
    Other,
}

/// A copyable handle to one node of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    inner: NodeRef<'a, scraper::Node>,
}

impl<'a> Node<'a> {
    pub fn new(inner: NodeRef<'a, scraper::Node>) -> Self {
        Self { inner }
    }

    /// The underlying tree reference.
    pub fn node_ref(&self) -> NodeRef<'a, scraper::Node> {
        self.inner
    }

    pub fn kind(&self) -> NodeKind<'a> {
        match self.inner.value() {
            scraper::Node::Document | scraper::Node::Fragment => NodeKind::Document,
            scraper::Node::Element(_) => match ElementRef::wrap(self.inner) {
                Some(el) => NodeKind::Element(el),
                None => NodeKind::Other,
            },
            scraper::Node::Text(text) => NodeKind::Text(text),
            scraper::Node::Comment(comment) => NodeKind::Comment(comment),
            scraper::Node::Doctype(doctype) => NodeKind::Doctype(doctype.name()),
            _ => NodeKind::Other,
        }
    }

    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        ElementRef::wrap(self.inner)
    }

    pub fn is_element(&self) -> bool {
        self.inner.value().is_element()
    }

    pub fn is_document(&self) -> bool {
        matches!(self.kind(), NodeKind::Document)
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.inner.parent().map(Node::new)
    }

    pub fn first_child(&self) -> Option<Node<'a>> {
        self.inner.first_child().map(Node::new)
    }

    pub fn last_child(&self) -> Option<Node<'a>> {
        self.inner.last_child().map(Node::new)
    }

    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.inner.next_sibling().map(Node::new)
    }

    pub fn prev_sibling(&self) -> Option<Node<'a>> {
        self.inner.prev_sibling().map(Node::new)
    }

    /// The root of the tree this node belongs to (the document node).
    pub fn owner_document(&self) -> Node<'a> {
        self.inner
            .ancestors()
            .last()
            .map(Node::new)
            .unwrap_or(*self)
    }

    /// Tag name of an element; `None` for every other kind.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.as_element().map(|el| el.value().name())
    }

    /// Attribute value of an element; `None` if absent or not an element.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.as_element().and_then(|el| el.value().attr(name))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Concatenated text of this node and its descendants.
    ///
    /// Text and comment nodes yield their own data; the document and
    /// elements yield the text nodes beneath them in document order.
    pub fn text_content(&self) -> String {
        match self.kind() {
            NodeKind::Text(data) | NodeKind::Comment(data) => data.to_string(),
            NodeKind::Element(el) => el.text().collect(),
            NodeKind::Document => self
                .inner
                .descendants()
                .filter_map(|n| n.value().as_text())
                .map(|t| &**t)
                .collect(),
            NodeKind::Doctype(_) | NodeKind::Other => String::new(),
        }
    }

    /// Serializes the node to markup.
    ///
    /// Elements serialize as outer HTML; the document serializes all of
    /// its children.
    pub fn outer_html(&self) -> String {
        match self.kind() {
            NodeKind::Element(el) => el.html(),
            NodeKind::Text(data) => escape_text(data),
            NodeKind::Comment(data) => format!("<!--{}-->", data),
            NodeKind::Doctype(name) => format!("<!DOCTYPE {}>", name),
            NodeKind::Document => self
                .inner
                .children()
                .map(|child| Node::new(child).outer_html())
                .collect(),
            NodeKind::Other => String::new(),
        }
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}
