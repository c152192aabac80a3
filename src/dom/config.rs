use html5ever::ParseOpts;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;
use serde::{Deserialize, Serialize};

/// Options controlling how html5ever builds the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Parse `<noscript>` content as if scripting were enabled (default: true)
    pub scripting_enabled: bool,

    /// Report detailed parse errors (slower)
    pub exact_errors: bool,

    /// Treat the input as an iframe `srcdoc` document
    pub iframe_srcdoc: bool,

    /// Leave the doctype node out of the tree
    pub drop_doctype: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scripting_enabled: true,
            exact_errors: false,
            iframe_srcdoc: false,
            drop_doctype: false,
        }
    }
}

impl ParseOptions {
    /// Create options with html5ever's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set scripting mode
    pub fn scripting_enabled(mut self, enabled: bool) -> Self {
        self.scripting_enabled = enabled;
        self
    }

    /// Builder method: request detailed parse errors
    pub fn exact_errors(mut self, exact: bool) -> Self {
        self.exact_errors = exact;
        self
    }

    /// Builder method: parse as an iframe srcdoc
    pub fn iframe_srcdoc(mut self, srcdoc: bool) -> Self {
        self.iframe_srcdoc = srcdoc;
        self
    }

    /// Builder method: drop the doctype node
    pub fn drop_doctype(mut self, drop: bool) -> Self {
        self.drop_doctype = drop;
        self
    }
}

impl From<&ParseOptions> for ParseOpts {
    fn from(options: &ParseOptions) -> Self {
        ParseOpts {
            tokenizer: TokenizerOpts {
                exact_errors: options.exact_errors,
                ..Default::default()
            },
            tree_builder: TreeBuilderOpts {
                exact_errors: options.exact_errors,
                scripting_enabled: options.scripting_enabled,
                iframe_srcdoc: options.iframe_srcdoc,
                drop_doctype: options.drop_doctype,
                ..Default::default()
            },
        }
    }
}
