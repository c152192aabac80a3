//! # node-query
//!
//! A small query engine for finding elements in parsed HTML trees.
//!
//! Documents are parsed with html5ever. A [`Query`] describes what to look
//! for: a tag name, one class token, an id and any number of required
//! attribute values. All given constraints must hold. Searches walk the tree
//! depth-first in document order and return either the first match or all
//! of them, as views into the same tree.
//!
//! ## Finding elements
//!
//! ```rust
//! use node_query::{Document, Query};
//!
//! let doc = Document::parse(
//!     r#"<div id="test"><span class="test-class-2"><p class="nested-class">x</p></span><input type="checkbox"/></div>"#,
//! );
//!
//! let input = doc
//!     .query_selector(&Query::new().attribute("type", "checkbox"))
//!     .expect("checkbox exists");
//! assert_eq!(input.tag_name().as_deref(), Some("input"));
//!
//! let nested = doc.query_selector(&Query::new().class("nested-class")).unwrap();
//! assert_eq!(nested.to_string(), r#"<p class="nested-class">x</p>"#);
//! ```
//!
//! ## Chained queries
//!
//! Every [`Node`] can be searched in turn. The starting node itself is never
//! part of the result:
//!
//! ```rust
//! use node_query::{Document, Query};
//!
//! let doc = Document::parse("<ul id=\"a\"><li>1</li><li>2</li></ul><ul><li>3</li></ul>");
//! let list = doc.query_selector(&Query::new().id("a")).unwrap();
//! assert_eq!(list.query_selector_all(&Query::new().tag("li")).len(), 2);
//! ```
//!
//! ## Queries as JSON
//!
//! ```rust
//! # fn main() -> node_query::Result<()> {
//! use node_query::Query;
//!
//! let query = Query::from_json(r#"{"tag": "input", "attributes": [{"key": "type", "value": "checkbox"}]}"#)?;
//! assert_eq!(query.to_string(), "input[type=\"checkbox\"]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: document parsing, parser options and the [`Node`] view
//! - [`query`]: query descriptors, matching and tree search
//! - [`render`]: text reconstruction of nodes
//! - [`error`]: error types and result aliases

pub mod dom;
pub mod error;
pub mod query;
pub mod render;

pub use dom::{Attribute, Document, Node, NodeKind, ParseOptions};
pub use error::{QueryError, Result};
pub use query::{Query, find_all, find_first, matches};
pub use render::{NodeSummary, render};
