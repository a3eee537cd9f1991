// ABOUTME: Pre-compiled CSS selector cache shared by every query.
// ABOUTME: Compiles each selector string once, remembering failures as well as successes.

//! Selector caching for repeated traversal queries.
//!
//! Chained calls such as `find_by_class("row")` inside a `map` re-issue the
//! same selector once per element, so compiled selectors are kept in a
//! process-wide cache keyed by the selector text.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::error::{Error, Result};

type Compiled = std::result::Result<Selector, String>;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Compiled>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn compile(css: &str) -> Compiled {
    Selector::parse(css).map_err(|e| e.to_string())
}

/// Gets or compiles a CSS selector, caching the result.
pub fn get_or_compile(css: &str) -> Result<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(css) {
            return cached
                .clone()
                .map_err(|msg| Error::invalid_selector(css, msg));
        }
    }

    let compiled = compile(css);
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    cache
        .entry(css.to_string())
        .or_insert(compiled)
        .clone()
        .map_err(|msg| Error::invalid_selector(css, msg))
}

/// Precompiles a batch of selectors into the cache.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            cache.insert(css.to_string(), compile(css));
        }
    }
}
