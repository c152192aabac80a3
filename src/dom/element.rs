use indexmap::IndexMap;
use markup5ever_rcdom::{Handle, NodeData};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use crate::error::QueryError;
use crate::query::{Query, search};

/// A (key, value) attribute pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    /// Create a new attribute pair
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl FromStr for Attribute {
    type Err = QueryError;

    /// Parse `key=value`. Only the first `=` separates, so values may contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self::new(key, value)),
            _ => Err(QueryError::InvalidAttribute(s.to_string())),
        }
    }
}

/// Kind of tree position a [`Node`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Doctype,
    Text,
    Comment,
    Element,
    ProcessingInstruction,
}

/// Read-only view of a position in a parsed tree
///
/// A `Node` holds a reference-counted handle into an `RcDom` built by
/// html5ever. It never copies or mutates the tree; cloning a `Node` only
/// clones the handle. Two nodes are equal when they point at the same tree
/// position.
#[derive(Clone)]
pub struct Node {
    handle: Handle,
}

impl Node {
    /// Wrap a handle produced by the parser
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// The underlying parser handle
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Kind of tree position this node refers to
    pub fn kind(&self) -> NodeKind {
        match &self.handle.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Doctype { .. } => NodeKind::Doctype,
            NodeData::Text { .. } => NodeKind::Text,
            NodeData::Comment { .. } => NodeKind::Comment,
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::ProcessingInstruction { .. } => NodeKind::ProcessingInstruction,
        }
    }

    /// True for element nodes, the only kind a query can match
    pub fn is_element(&self) -> bool {
        matches!(self.handle.data, NodeData::Element { .. })
    }

    /// Raw tag name, for element nodes only
    pub fn tag_name(&self) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    /// Text content, for text nodes only
    pub fn text(&self) -> Option<String> {
        match &self.handle.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }

    /// All attributes in document order, duplicates included.
    /// Non-element nodes have none.
    pub fn attributes(&self) -> Vec<Attribute> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|attr| Attribute::new(attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Value of the first attribute named `key`, or `None` if there is none
    pub fn get_attribute(&self, key: &str) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| attr.name.local.as_ref() == key)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    /// Value of the first attribute named `key`, or an empty string.
    ///
    /// An absent attribute and an attribute with an empty value look the
    /// same here. Use [`Node::get_attribute`] to tell them apart.
    pub fn attribute(&self, key: &str) -> String {
        self.get_attribute(key).unwrap_or_default()
    }

    /// Attributes as an ordered map where the first occurrence of a key wins
    pub fn attribute_map(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for attr in self.attributes() {
            map.entry(attr.key).or_insert(attr.value);
        }
        map
    }

    /// Element ID
    pub fn id(&self) -> Option<String> {
        self.get_attribute("id")
    }

    /// Tokens of the `class` attribute split on single spaces.
    /// Runs of spaces yield empty tokens.
    pub fn classes(&self) -> Vec<String> {
        self.attribute("class").split(' ').map(str::to_string).collect()
    }

    /// Check if the `class` attribute contains `class_name` as an exact token
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attribute("class").split(' ').any(|c| c == class_name)
    }

    /// Parent node, `None` for the document node
    pub fn parent(&self) -> Option<Node> {
        self.parent_handle().map(Node::new)
    }

    /// First child in sibling order
    pub fn first_child(&self) -> Option<Node> {
        self.handle.children.borrow().first().cloned().map(Node::new)
    }

    /// Next node under the same parent.
    ///
    /// Linear in the number of siblings; prefer [`Node::children`] when
    /// walking a whole child list.
    pub fn next_sibling(&self) -> Option<Node> {
        let parent = self.parent_handle()?;
        let siblings = parent.children.borrow();
        let position = siblings.iter().position(|s| Rc::ptr_eq(s, &self.handle))?;
        siblings.get(position + 1).cloned().map(Node::new)
    }

    /// Children in sibling order
    pub fn children(&self) -> Vec<Node> {
        self.handle.children.borrow().iter().cloned().map(Node::new).collect()
    }

    /// All nodes below this one in document order (pre-order, left to right).
    /// The node itself is not included.
    pub fn descendants(&self) -> Descendants {
        let stack = self.handle.children.borrow().iter().rev().cloned().collect();
        Descendants { stack }
    }

    /// First descendant matching `query`, in document order
    pub fn query_selector(&self, query: &Query) -> Option<Node> {
        search::find_first(self, query)
    }

    /// Every descendant matching `query`, in document order
    pub fn query_selector_all(&self, query: &Query) -> Vec<Node> {
        search::find_all(self, query)
    }

    // The parent link is a Cell<Option<Weak>>, so it is taken and put back.
    fn parent_handle(&self) -> Option<Handle> {
        let weak = self.handle.parent.take();
        let parent = weak.as_ref().and_then(Weak::upgrade);
        self.handle.parent.set(weak);
        parent
    }
}

impl From<Handle> for Node {
    fn from(handle: Handle) -> Self {
        Self::new(handle)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handle, &other.handle)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Node");
        debug.field("kind", &self.kind());
        if let Some(tag) = self.tag_name() {
            debug.field("tag_name", &tag).field("attributes", &self.attributes());
        }
        if let Some(text) = self.text() {
            debug.field("text", &text);
        }
        debug.finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

/// Pre-order iterator over the nodes below a [`Node`], driven by an explicit
/// stack so deep trees do not grow the call stack
pub struct Descendants {
    stack: Vec<Handle>,
}

impl Iterator for Descendants {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let handle = self.stack.pop()?;
        self.stack.extend(handle.children.borrow().iter().rev().cloned());
        Some(Node::new(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn first_tag(doc: &Document, tag: &str) -> Node {
        doc.root()
            .descendants()
            .find(|n| n.tag_name().as_deref() == Some(tag))
            .unwrap()
    }

    #[test]
    fn test_attribute_lookup() {
        let doc = Document::parse(r#"<a href="/page" title="">Link</a>"#);
        let link = first_tag(&doc, "a");

        assert_eq!(link.kind(), NodeKind::Element);
        assert_eq!(link.attribute("href"), "/page");
        assert_eq!(link.get_attribute("title"), Some(String::new()));
        assert_eq!(link.get_attribute("rel"), None);
        // absent and empty are indistinguishable through attribute()
        assert_eq!(link.attribute("title"), link.attribute("rel"));
    }

    #[test]
    fn test_attribute_lookup_is_case_sensitive() {
        let doc = Document::parse(r#"<div data-x="1"></div>"#);
        let div = first_tag(&doc, "div");

        assert_eq!(div.attribute("data-x"), "1");
        assert_eq!(div.attribute("DATA-X"), "");
    }

    #[test]
    fn test_duplicate_attribute_first_wins() {
        use html5ever::tendril::StrTendril;
        use html5ever::{LocalName, Namespace, QualName};

        // the tokenizer drops duplicates, so add one to the built tree
        let doc = Document::parse(r#"<div id="a"></div>"#);
        let div = first_tag(&doc, "div");
        if let NodeData::Element { attrs, .. } = &div.handle().data {
            attrs.borrow_mut().push(html5ever::Attribute {
                name: QualName::new(None, Namespace::from(""), LocalName::from("id")),
                value: StrTendril::from("b"),
            });
        }

        assert_eq!(div.attributes(), vec![Attribute::new("id", "a"), Attribute::new("id", "b")]);
        assert_eq!(div.attribute("id"), "a");
        assert_eq!(div.get_attribute("id").as_deref(), Some("a"));
        assert_eq!(div.attribute_map().len(), 1);
        assert_eq!(div.attribute_map()["id"], "a");

        assert!(crate::query::matches(&div, &Query::new().id("a")));
        assert!(!crate::query::matches(&div, &Query::new().id("b")));
        assert!(!crate::query::matches(&div, &Query::new().attribute("id", "b")));
        assert_eq!(doc.query_selector(&Query::new().id("a")), Some(div.clone()));
        assert!(doc.query_selector(&Query::new().id("b")).is_none());
    }

    #[test]
    fn test_attribute_map_keeps_order() {
        let doc = Document::parse(r#"<input type="checkbox" name="agree" checked>"#);
        let input = first_tag(&doc, "input");

        let keys: Vec<_> = input.attribute_map().keys().cloned().collect();
        assert_eq!(keys, vec!["type", "name", "checked"]);
        assert_eq!(input.attribute_map()["checked"], "");
    }

    #[test]
    fn test_classes() {
        let doc = Document::parse(r#"<div class="container  main active"></div>"#);
        let div = first_tag(&doc, "div");

        assert_eq!(div.classes(), vec!["container", "", "main", "active"]);
        assert!(div.has_class("main"));
        assert!(div.has_class("active"));
        assert!(!div.has_class("contain"));
    }

    #[test]
    fn test_structural_accessors() {
        let doc = Document::parse("<ul><li>one</li><li>two</li><li>three</li></ul>");
        let list = first_tag(&doc, "ul");

        let first = list.first_child().unwrap();
        assert_eq!(first.tag_name().as_deref(), Some("li"));

        let second = first.next_sibling().unwrap();
        assert_eq!(second.first_child().unwrap().text().as_deref(), Some("two"));

        let third = second.next_sibling().unwrap();
        assert!(third.next_sibling().is_none());
        assert_eq!(third.parent(), Some(list.clone()));
        assert_eq!(list.children(), vec![first, second, third]);
    }

    #[test]
    fn test_root_has_no_parent_or_sibling() {
        let doc = Document::parse("<p>x</p>");
        let root = doc.root();

        assert_eq!(root.kind(), NodeKind::Document);
        assert!(root.parent().is_none());
        assert!(root.next_sibling().is_none());
        assert!(root.tag_name().is_none());
        assert!(root.attributes().is_empty());
    }

    #[test]
    fn test_descendants_pre_order() {
        let doc = Document::parse("<div><span><b></b></span><i></i></div>");
        let div = first_tag(&doc, "div");

        let tags: Vec<_> = div.descendants().filter_map(|n| n.tag_name()).collect();
        assert_eq!(tags, vec!["span", "b", "i"]);
    }

    #[test]
    fn test_equality_is_identity() {
        let doc = Document::parse("<p></p><p></p>");
        let paragraphs: Vec<_> = doc
            .root()
            .descendants()
            .filter(|n| n.tag_name().as_deref() == Some("p"))
            .collect();

        assert_eq!(paragraphs.len(), 2);
        assert_ne!(paragraphs[0], paragraphs[1]);
        assert_eq!(paragraphs[0], paragraphs[0].clone());
    }

    #[test]
    fn test_attribute_from_str() {
        let attr: Attribute = "type=checkbox".parse().unwrap();
        assert_eq!(attr, Attribute::new("type", "checkbox"));

        let attr: Attribute = "data-eq=a=b".parse().unwrap();
        assert_eq!(attr.value, "a=b");

        let attr: Attribute = "alt=".parse().unwrap();
        assert_eq!(attr.value, "");

        assert!("checkbox".parse::<Attribute>().is_err());
        assert!("=value".parse::<Attribute>().is_err());
    }
}
