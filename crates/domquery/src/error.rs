// ABOUTME: Error types for loading markup and compiling query expressions.
// ABOUTME: Provides the Error enum with Parse, TooLarge, and InvalidSelector variants.

use std::fmt;
use thiserror::Error;

/// Errors raised while loading a document or compiling a query.
///
/// Missing nodes, attributes or relations are never errors; traversal
/// resolves those to an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The markup could not be turned into a document.
    #[error("cannot parse HTML: {0}")]
    Parse(String),

    /// The input exceeds the configured size limit.
    #[error("input is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    /// The query expression was rejected by the query engine.
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

impl Error {
    /// Creates a Parse error with a custom message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates an InvalidSelector error from the engine's diagnostic.
    pub fn invalid_selector(selector: impl Into<String>, err: impl fmt::Display) -> Self {
        Error::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Returns true if this is an InvalidSelector error.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, Error::InvalidSelector { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
