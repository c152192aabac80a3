use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::dom::config::ParseOptions;
use crate::dom::element::Node;
use crate::error::{QueryError, Result};
use crate::query::Query;

/// A parsed HTML document
///
/// Owns the html5ever tree. Every [`Node`] handed out by a query is a view
/// into this tree.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parse an HTML string with default options
    pub fn parse(html: &str) -> Self {
        Self::parse_with_options(html, &ParseOptions::default())
    }

    /// Parse an HTML string
    ///
    /// html5ever recovers from malformed markup, so this never fails.
    pub fn parse_with_options(html: &str, options: &ParseOptions) -> Self {
        log::debug!("Parsing HTML document ({} bytes)", html.len());
        let dom = parse_document(RcDom::default(), options.into()).one(html);
        Self::from_dom(dom)
    }

    /// Parse a UTF-8 byte stream
    pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Self> {
        let dom = parse_document(RcDom::default(), options.into())
            .from_utf8()
            .read_from(&mut reader)?;
        Ok(Self::from_dom(dom))
    }

    /// Read and parse an HTML file
    pub fn from_path(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading HTML document from {}", path.display());

        let read_failed = |source| QueryError::ReadFailed {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_failed)?;

        match Self::from_reader(BufReader::new(file), options) {
            Err(QueryError::Io(source)) => Err(read_failed(source)),
            other => other,
        }
    }

    /// Adopt a tree built elsewhere
    pub fn from_dom(dom: RcDom) -> Self {
        let document = Self { dom };
        log::debug!("Parsed document with {} elements", document.count_elements());
        document
    }

    /// The document node; queries start here
    pub fn root(&self) -> Node {
        Node::new(self.dom.document.clone())
    }

    /// First element matching `query`, in document order
    pub fn query_selector(&self, query: &Query) -> Option<Node> {
        self.root().query_selector(query)
    }

    /// Every element matching `query`, in document order
    pub fn query_selector_all(&self, query: &Query) -> Vec<Node> {
        self.root().query_selector_all(query)
    }

    /// Count element nodes in the tree
    pub fn count_elements(&self) -> usize {
        self.root().descendants().filter(Node::is_element).count()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.count_elements())
            .finish()
    }
}
