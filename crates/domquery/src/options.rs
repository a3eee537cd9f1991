// ABOUTME: Configuration for loading markup into a Document.
// ABOUTME: LoadOptionsBuilder provides a fluent API for constructing LoadOptions.

/// Maximum accepted input size by default (10 MB).
pub const MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Options controlling how markup is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop whitespace-only text nodes that separate block content. Spaces
    /// between inline elements are kept.
    pub strip_blank_text: bool,
    /// Parse the input as an HTML fragment rather than a full document.
    pub fragment: bool,
    /// Reject inputs larger than this many bytes.
    pub max_input_bytes: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strip_blank_text: true,
            fragment: false,
            max_input_bytes: MAX_INPUT_BYTES,
        }
    }
}

impl LoadOptions {
    /// Start building a set of options from the defaults.
    pub fn builder() -> LoadOptionsBuilder {
        LoadOptionsBuilder::new()
    }
}

/// Builder for constructing LoadOptions.
#[derive(Debug, Clone)]
pub struct LoadOptionsBuilder {
    opts: LoadOptions,
}

impl LoadOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            opts: LoadOptions::default(),
        }
    }

    /// Keep or drop whitespace-only text nodes.
    pub fn strip_blank_text(mut self, strip: bool) -> Self {
        self.opts.strip_blank_text = strip;
        self
    }

    /// Parse as a fragment instead of a full document.
    pub fn fragment(mut self, fragment: bool) -> Self {
        self.opts.fragment = fragment;
        self
    }

    /// Set the input size limit in bytes.
    pub fn max_input_bytes(mut self, limit: usize) -> Self {
        self.opts.max_input_bytes = limit;
        self
    }

    pub fn build(self) -> LoadOptions {
        self.opts
    }
}

impl Default for LoadOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
