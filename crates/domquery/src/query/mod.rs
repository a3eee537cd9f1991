// ABOUTME: Tree query engine seam used by the traversal wrapper's find operations.
// ABOUTME: Defines the QueryEngine trait and the default CSS selector engine built on scraper.

//! Query engines.
//!
//! A [`QueryEngine`] evaluates an expression against the strict descendants
//! of a scope node and returns the matches in document order. When the scope
//! is an element, [`CssEngine`] evaluates with it as the `:scope` element,
//! the same as [`ElementRef::select`]. It also knows
//! how to spell the three expressions the wrapper's shortcuts need: a class
//! substring match, an id equality match and a descendant tag match.

pub mod compiled;

use std::fmt;

use scraper::ElementRef;

use crate::error::Result;
use crate::node::Node;

pub use compiled::{get_or_compile, precompile_selectors};

/// Executes query expressions over a parsed tree.
pub trait QueryEngine: fmt::Debug + Send + Sync {
    /// Evaluate `expr` against the descendants of `scope`.
    fn query<'a>(&self, expr: &str, scope: Node<'a>) -> Result<Vec<Node<'a>>>;

    /// Expression matching elements whose `class` attribute contains `class`.
    fn class_contains(&self, class: &str) -> String;

    /// Expression matching elements whose `id` attribute equals `id`.
    fn id_equals(&self, id: &str) -> String;

    /// Expression matching descendant elements named `tag`.
    fn descendant_tag(&self, tag: &str) -> String;
}

/// CSS selector engine backed by `scraper::Selector`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssEngine;

/// Shared instance used when no engine is supplied.
pub static CSS_ENGINE: CssEngine = CssEngine;

impl QueryEngine for CssEngine {
    fn query<'a>(&self, expr: &str, scope: Node<'a>) -> Result<Vec<Node<'a>>> {
        let selector = get_or_compile(expr)?;
        if let Some(element) = scope.as_element() {
            return Ok(element.select(&selector).map(|el| Node::new(*el)).collect());
        }
        Ok(scope
            .node_ref()
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| selector.matches(el))
            .map(|el| Node::new(*el))
            .collect())
    }

    fn class_contains(&self, class: &str) -> String {
        format!("[class*={}]", quote(class))
    }

    fn id_equals(&self, id: &str) -> String {
        format!("[id={}]", quote(id))
    }

    fn descendant_tag(&self, tag: &str) -> String {
        tag.trim().to_string()
    }
}

/// Quote a value as a CSS string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
