// ABOUTME: Main library entry point for the domquery traversal wrapper.
// ABOUTME: Re-exports the public API: Document, DomQuery, Node, QueryEngine, LoadOptions, Error.

//! domquery - chainable, null-safe traversal over parsed HTML.
//!
//! Load markup into a [`Document`], wrap it with [`DomQuery::load`], then
//! chain selection, navigation and extraction calls. Missing results never
//! raise errors: they turn into empty wrappers, `None` or `false`.
//!
//! # Example
//!
//! ```
//! use domquery::{Document, DomQuery, Error};
//!
//! fn main() -> Result<(), Error> {
//!     let doc = Document::parse(r#"
//!         <ul id="tracks">
//!             <li><a href="/one">One</a></li>
//!             <li><a href="/two">Two</a></li>
//!         </ul>
//!     "#)?;
//!
//!     let links = DomQuery::load(&doc)
//!         .find_by_id("tracks")
//!         .find_by_tag("a")
//!         .map(|a| a.attr("href").unwrap_or_default().to_string());
//!     assert_eq!(links, vec!["/one", "/two"]);
//!     Ok(())
//! }
//! ```

mod decode;
pub mod document;
pub mod error;
pub mod node;
pub mod options;
pub mod query;
pub mod wrapper;

pub use crate::decode::{decode_markup, extract_charset};
pub use crate::document::Document;
pub use crate::error::{Error, Result};
pub use crate::node::{Node, NodeKind};
pub use crate::options::{LoadOptions, LoadOptionsBuilder};
pub use crate::query::{CssEngine, QueryEngine, CSS_ENGINE};
pub use crate::wrapper::{DomQuery, Key, Relation};
