//! Parsed document trees and the node view used by queries
//!
//! This module wraps the tree html5ever builds:
//! - Document: owner of a parsed tree, entry point for queries
//! - Node: read-only view of one position in the tree
//! - ParseOptions: parser configuration

pub mod config;
pub mod element;
pub mod tree;

pub use config::ParseOptions;
pub use element::{Attribute, Descendants, Node, NodeKind};
pub use tree::Document;

/// Parse an HTML string with default options
pub fn parse_html(html: &str) -> Document {
    Document::parse(html)
}
