//! Query descriptors and the search over a document tree
//!
//! - [`Query`]: tag, class, id and attribute constraints, combined with AND
//! - [`matcher`]: decides whether a single node satisfies a query
//! - [`search`]: depth-first, document-order search for the first or all matches

pub mod matcher;
pub mod search;

pub use matcher::matches;
pub use search::{find_all, find_first};

pub use crate::dom::Attribute;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraints a node must satisfy to match
///
/// Every field is optional: an empty string or empty list imposes no
/// constraint, so `Query::default()` matches every element node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Query {
    /// Exact, case-sensitive tag name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,

    /// A single class token
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,

    /// Exact value of the `id` attribute
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Required attribute values, all of which must hold
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON descriptor such as `{"tag": "input", "attributes": [{"key": "type", "value": "checkbox"}]}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder method: require a tag name
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Builder method: require a class token
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Builder method: require an id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method: require an attribute value
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Builder method: append several attribute constraints
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// True when the query imposes no constraint besides "is an element"
    pub fn is_empty(&self) -> bool {
        self.tag.is_empty() && self.class.is_empty() && self.id.is_empty() && self.attributes.is_empty()
    }
}

/// Selector-like rendering for logs, e.g. `input.agree#terms[type="checkbox"]`
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("*");
        }
        f.write_str(&self.tag)?;
        if !self.class.is_empty() {
            write!(f, ".{}", self.class)?;
        }
        if !self.id.is_empty() {
            write!(f, "#{}", self.id)?;
        }
        for attr in &self.attributes {
            write!(f, "[{}=\"{}\"]", attr.key, attr.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::new()
            .tag("input")
            .class("agree")
            .id("terms")
            .attribute("type", "checkbox");

        assert_eq!(query.tag, "input");
        assert_eq!(query.class, "agree");
        assert_eq!(query.id, "terms");
        assert_eq!(query.attributes, vec![Attribute::new("type", "checkbox")]);
        assert!(!query.is_empty());
        assert!(Query::new().is_empty());
    }

    #[test]
    fn test_query_from_json() {
        let query = Query::from_json(r#"{"tag": "input", "attributes": [{"key": "type", "value": "checkbox"}]}"#).unwrap();

        assert_eq!(query.tag, "input");
        assert!(query.class.is_empty());
        assert!(query.id.is_empty());
        assert_eq!(query.attributes, vec![Attribute::new("type", "checkbox")]);
    }

    #[test]
    fn test_query_from_invalid_json() {
        let err = Query::from_json(r#"{"tag": 5}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid query descriptor"));
    }

    #[test]
    fn test_query_serialization_skips_empty_fields() {
        let query = Query::new().class("nested-class");
        let json = serde_json::to_string(&query).unwrap();

        assert_eq!(json, r#"{"class":"nested-class"}"#);
        assert_eq!(Query::from_json(&json).unwrap(), query);
    }

    #[test]
    fn test_query_display() {
        assert_eq!(Query::new().to_string(), "*");
        assert_eq!(Query::new().id("test").to_string(), "#test");
        assert_eq!(
            Query::new().tag("input").attribute("type", "checkbox").to_string(),
            "input[type=\"checkbox\"]"
        );
    }
}
