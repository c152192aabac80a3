//! Text reconstruction of nodes for debugging and inspection

use indexmap::IndexMap;
use serde::Serialize;

use crate::dom::{Node, NodeKind};

/// Render a node and its descendants as tag-bracketed text
///
/// - text nodes: their content with surrounding whitespace trimmed
/// - elements: `<tag k="v" ...>` + rendered children + `</tag>`
/// - the document node: its rendered children
/// - doctype, comment and processing instruction nodes: nothing
///
/// Attribute values are written as-is, without escaping.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Open(node.clone())];

    // Closing tags are pushed under an element's children, so deep trees
    // never grow the call stack.
    while let Some(step) = stack.pop() {
        match step {
            Step::Open(node) => open(&node, &mut out, &mut stack),
            Step::Close(tag) => {
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
        }
    }

    out
}

enum Step {
    Open(Node),
    Close(String),
}

fn open(node: &Node, out: &mut String, stack: &mut Vec<Step>) {
    match node.kind() {
        NodeKind::Text => {
            if let Some(text) = node.text() {
                out.push_str(text.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n')));
            }
        }
        NodeKind::Element => {
            let tag = node.tag_name().unwrap_or_default().trim().to_string();

            out.push('<');
            out.push_str(&tag);
            for attr in node.attributes() {
                out.push_str(&format!(" {}=\"{}\"", attr.key, attr.value));
            }
            out.push('>');

            stack.push(Step::Close(tag));
            push_children(node, stack);
        }
        NodeKind::Document => push_children(node, stack),
        NodeKind::Doctype | NodeKind::Comment | NodeKind::ProcessingInstruction => {}
    }
}

fn push_children(node: &Node, stack: &mut Vec<Step>) {
    stack.extend(node.children().into_iter().rev().map(Step::Open));
}

/// Serializable description of a matched element
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeSummary {
    /// Tag name; absent for non-element nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    /// Attributes in document order, first occurrence wins
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Rendered markup
    pub html: String,
}

impl NodeSummary {
    pub fn new(node: &Node) -> Self {
        Self {
            tag_name: node.tag_name(),
            attributes: node.attribute_map(),
            html: render(node),
        }
    }
}

impl From<&Node> for NodeSummary {
    fn from(node: &Node) -> Self {
        Self::new(node)
    }
}
