// ABOUTME: DomQuery, the chainable traversal wrapper over a collection of nodes.
// ABOUTME: Resolves indices and relations with element-only sibling skipping, returning empty results instead of errors.

//! Chainable, null-safe traversal.
//!
//! A [`DomQuery`] wraps an ordered collection of [`Node`]s borrowed from a
//! [`Document`]. Every operation yields a fresh value; an operation that
//! finds nothing yields an empty wrapper (or `None`/`false` for
//! extractions), so long chains never need intermediate checks:
//!
//! ```
//! use domquery::{Document, DomQuery};
//!
//! let doc = Document::parse(r#"<div class="info"><a>Artist</a><h1>Title</h1></div>"#).unwrap();
//! let info = DomQuery::load(&doc).find_by_class("info");
//! assert_eq!(info.find_by_tag("a").text().as_deref(), Some("Artist"));
//! assert_eq!(info.find_by_tag("h1").text().as_deref(), Some("Title"));
//! assert!(info.find_by_tag("table").next().parent().text().is_none());
//! ```

use crate::document::Document;
use crate::error::Result;
use crate::node::Node;
use crate::query::{QueryEngine, CSS_ENGINE};

/// A relation followed from the first node of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    FirstChild,
    LastChild,
    NextSibling,
    PreviousSibling,
    ParentNode,
}

impl Relation {
    fn follow<'a>(self, node: Node<'a>) -> Option<Node<'a>> {
        match self {
            Relation::FirstChild => node.first_child(),
            Relation::LastChild => node.last_child(),
            Relation::NextSibling => node.next_sibling(),
            Relation::PreviousSibling => node.prev_sibling(),
            Relation::ParentNode => node.parent(),
        }
    }

    /// The sibling direction walked when the relation lands on a
    /// non-element node, if the relation skips at all.
    fn skip_direction(self) -> Option<Relation> {
        match self {
            Relation::FirstChild | Relation::NextSibling => Some(Relation::NextSibling),
            Relation::LastChild | Relation::PreviousSibling => Some(Relation::PreviousSibling),
            Relation::ParentNode => None,
        }
    }
}

/// What to resolve against a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Position in the collection; negative or out of range resolves to nothing.
    Index(isize),
    /// Relation of the collection's first node.
    Relation(Relation),
}

/// The first node of a collection.
const FIRST: Key = Key::Index(0);

enum Scope {
    Subtree,
    Document,
}

/// A chainable view over zero or more nodes of one document.
#[derive(Debug, Clone)]
pub struct DomQuery<'a> {
    nodes: Vec<Node<'a>>,
    engine: &'a dyn QueryEngine,
}

impl Default for DomQuery<'_> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            engine: &CSS_ENGINE,
        }
    }
}

impl<'a> DomQuery<'a> {
    /// Wrap the document element of `doc` using the CSS engine.
    pub fn load(doc: &'a Document) -> Self {
        Self::load_with(doc, &CSS_ENGINE)
    }

    /// Wrap the document element of `doc`, answering `find` calls with `engine`.
    pub fn load_with(doc: &'a Document, engine: &'a dyn QueryEngine) -> Self {
        Self {
            nodes: doc.root_element().into_iter().collect(),
            engine,
        }
    }

    /// Wrap an arbitrary collection of nodes.
    pub fn from_nodes(nodes: Vec<Node<'a>>, engine: &'a dyn QueryEngine) -> Self {
        Self { nodes, engine }
    }

    fn with_nodes(&self, nodes: Vec<Node<'a>>) -> Self {
        Self {
            nodes,
            engine: self.engine,
        }
    }

    fn single(&self, node: Node<'a>) -> Self {
        self.with_nodes(vec![node])
    }

    fn empty(&self) -> Self {
        self.with_nodes(Vec::new())
    }

    /// Resolve `key` to a node, skipping over non-element siblings for the
    /// four directional relations.
    pub fn resolve(&self, key: Key) -> Option<Node<'a>> {
        let mut node = match key {
            Key::Index(index) => usize::try_from(index)
                .ok()
                .and_then(|i| self.nodes.get(i).copied())?,
            Key::Relation(relation) => self.nodes.first().and_then(|n| relation.follow(*n))?,
        };
        if node.is_element() {
            return Some(node);
        }

        let direction = match key {
            Key::Relation(relation) => relation.skip_direction(),
            Key::Index(_) => None,
        };
        let Some(direction) = direction else {
            return Some(node);
        };
        loop {
            node = direction.follow(node)?;
            if node.is_element() {
                return Some(node);
            }
        }
    }

    /// Resolve `key` and apply `transform` to the node, yielding `None`
    /// when nothing resolves.
    pub fn resolve_or_default<T>(
        &self,
        key: Key,
        transform: impl FnOnce(Node<'a>) -> Option<T>,
    ) -> Option<T> {
        self.resolve(key).and_then(transform)
    }

    fn chain(&self, key: Key) -> Self {
        match self.resolve(key) {
            Some(node) => self.single(node),
            None => self.empty(),
        }
    }

    fn find_in(&self, expr: &str, scope: Scope) -> Result<Self> {
        let Some(node) = self.resolve(FIRST) else {
            return Ok(self.empty());
        };
        let scope = match scope {
            Scope::Subtree => node,
            Scope::Document => node.owner_document(),
        };
        let found = self.engine.query(expr, scope)?;
        Ok(self.with_nodes(found))
    }

    /// Query the descendants of the first node. An invalid expression
    /// yields an empty wrapper; use [`try_find`](Self::try_find) to see why.
    pub fn find(&self, selector: &str) -> Self {
        self.try_find(selector).unwrap_or_else(|_| self.empty())
    }

    pub fn try_find(&self, selector: &str) -> Result<Self> {
        self.find_in(selector, Scope::Subtree)
    }

    /// Descendants whose `class` attribute contains `name` as a substring.
    pub fn find_by_class(&self, name: &str) -> Self {
        self.find(&self.engine.class_contains(name))
    }

    /// Elements anywhere in the owning document whose `id` equals `id`.
    pub fn find_by_id(&self, id: &str) -> Self {
        self.find_in(&self.engine.id_equals(id), Scope::Document)
            .unwrap_or_else(|_| self.empty())
    }

    /// Descendant elements named `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Self {
        self.find(&self.engine.descendant_tag(tag))
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.resolve_or_default(FIRST, |node| node.tag_name())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.resolve_or_default(FIRST, |node| Some(node.has_attr(name)))
            .unwrap_or(false)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.resolve_or_default(FIRST, |node| node.attr(name))
    }

    /// Markup of the first node; the whole document if it is the document node.
    pub fn html(&self) -> Option<String> {
        self.resolve_or_default(FIRST, |node| Some(node.outer_html()))
    }

    /// Concatenated text content of the first node.
    pub fn text(&self) -> Option<String> {
        self.resolve_or_default(FIRST, |node| Some(node.text_content()))
    }

    /// The node at `index`, or an empty wrapper if out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn eq(&self, index: isize) -> Self {
        self.chain(Key::Index(index))
    }

    /// First element child of the first node.
    pub fn first(&self) -> Self {
        self.chain(Key::Relation(Relation::FirstChild))
    }

    /// Last element child of the first node.
    pub fn last(&self) -> Self {
        self.chain(Key::Relation(Relation::LastChild))
    }

    /// Next element sibling of the first node.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Self {
        self.chain(Key::Relation(Relation::NextSibling))
    }

    /// Previous element sibling of the first node.
    pub fn prev(&self) -> Self {
        self.chain(Key::Relation(Relation::PreviousSibling))
    }

    /// Parent of the first node, which may be the document node.
    pub fn parent(&self) -> Self {
        self.chain(Key::Relation(Relation::ParentNode))
    }

    /// Apply `f` to a single-node wrapper for each node, in order.
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(DomQuery<'a>) -> T,
    {
        self.iter().map(f).collect()
    }

    /// Single-node wrappers for each node, in order.
    pub fn iter(&self) -> impl Iterator<Item = DomQuery<'a>> + '_ {
        self.nodes.iter().map(move |node| self.single(*node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn length(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }
}

impl<'a> IntoIterator for DomQuery<'a> {
    type Item = DomQuery<'a>;
    type IntoIter = std::vec::IntoIter<DomQuery<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        let items: Vec<_> = self.iter().collect();
        items.into_iter()
    }
}
