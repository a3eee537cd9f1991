// ABOUTME: Parsed HTML document owning the scraper tree that wrappers borrow from.
// ABOUTME: Handles empty-input rejection, size limits, fragment mode, and blank text stripping.

use std::str::FromStr;

use ego_tree::{NodeId, NodeRef};
use scraper::Html;

use crate::decode::decode_markup;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::options::LoadOptions;

/// Elements whose whitespace is content and survives blank text stripping.
const PRESERVE_WHITESPACE: &[&str] = &["pre", "textarea", "script", "style"];

/// Phrasing elements; whitespace inside or next to them renders as a space.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "big", "br", "button", "cite", "code", "data", "del", "dfn",
    "em", "font", "i", "img", "input", "ins", "kbd", "label", "mark", "meter", "output",
    "progress", "q", "ruby", "s", "samp", "select", "small", "span", "strike", "strong", "sub",
    "sup", "time", "tt", "u", "var", "wbr",
];

/// An owned, parsed HTML document.
///
/// Every [`DomQuery`](crate::DomQuery) borrows from a `Document`, so the
/// document must outlive all wrappers derived from it.
///
/// A `Document` is `Send` and can be parsed on one thread and queried on
/// another. It is not `Sync`: the tree's string buffers are reference
/// counted without locking, so wrappers over one document stay on the
/// thread that owns it.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document with default options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &LoadOptions::default())
    }

    pub fn parse_with(text: &str, opts: &LoadOptions) -> Result<Self> {
        check_size(text.len(), opts)?;
        Self::build(text, opts)
    }

    /// Decode raw bytes (see [`decode_markup`]) and parse them. The size
    /// limit applies to the raw bytes.
    pub fn from_bytes(bytes: &[u8], content_type: Option<&str>, opts: &LoadOptions) -> Result<Self> {
        check_size(bytes.len(), opts)?;
        Self::build(&decode_markup(bytes, content_type), opts)
    }

    fn build(text: &str, opts: &LoadOptions) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::parse("empty document"));
        }

        let mut html = if opts.fragment {
            Html::parse_fragment(text)
        } else {
            Html::parse_document(text)
        };
        if opts.strip_blank_text {
            strip_blank_text(&mut html);
        }

        Ok(Self { html })
    }

    /// The document node at the top of the tree.
    pub fn root(&self) -> Node<'_> {
        Node::new(self.html.tree.root())
    }

    /// The document element, normally `<html>`.
    pub fn root_element(&self) -> Option<Node<'_>> {
        self.root().node_ref().children().map(Node::new).find(Node::is_element)
    }

    /// Serialize the whole document.
    pub fn html(&self) -> String {
        self.html.html()
    }

    /// Recoverable errors reported by the HTML tokenizer and tree builder.
    pub fn parse_errors(&self) -> impl Iterator<Item = &str> {
        self.html.errors.iter().map(|e| &**e)
    }

    /// The underlying scraper document.
    pub fn as_html(&self) -> &Html {
        &self.html
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn check_size(size: usize, opts: &LoadOptions) -> Result<()> {
    if size > opts.max_input_bytes {
        return Err(Error::TooLarge {
            size,
            limit: opts.max_input_bytes,
        });
    }
    Ok(())
}

/// Text or an inline element: content that whitespace beside it separates.
fn is_inline(node: Option<NodeRef<'_, scraper::Node>>) -> bool {
    match node.map(|n| n.value()) {
        Some(scraper::Node::Element(el)) => INLINE_ELEMENTS.contains(&el.name()),
        Some(scraper::Node::Text(_)) => true,
        _ => false,
    }
}

fn is_ignorable_blank(node: NodeRef<'_, scraper::Node>) -> bool {
    let blank = node
        .value()
        .as_text()
        .is_some_and(|text| text.bytes().all(|b| b.is_ascii_whitespace()));
    if !blank {
        return false;
    }
    if is_inline(node.parent()) || is_inline(node.prev_sibling()) || is_inline(node.next_sibling()) {
        return false;
    }
    !node.ancestors().any(|a| {
        a.value()
            .as_element()
            .is_some_and(|el| PRESERVE_WHITESPACE.contains(&el.name()))
    })
}

fn strip_blank_text(html: &mut Html) {
    let blank: Vec<NodeId> = html
        .tree
        .root()
        .descendants()
        .filter(|node| is_ignorable_blank(*node))
        .map(|node| node.id())
        .collect();

    for id in blank {
        if let Some(mut node) = html.tree.get_mut(id) {
            node.detach();
        }
    }
}
