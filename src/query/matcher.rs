use crate::dom::Node;
use crate::query::Query;

/// Check whether `node` satisfies every constraint in `query`
///
/// Only element nodes can match. Each non-empty field must hold:
/// the tag name is compared exactly, the class must be one of the tokens of
/// the `class` attribute split on single spaces, and the id and every
/// attribute constraint must equal the node's attribute value.
///
/// Attribute lookups treat a missing attribute as an empty string, so a
/// constraint asking for an empty value also accepts nodes without that
/// attribute.
pub fn matches(node: &Node, query: &Query) -> bool {
    let Some(tag) = node.tag_name() else {
        return false;
    };

    if !query.tag.is_empty() && tag != query.tag {
        return false;
    }

    if !query.class.is_empty() && !node.has_class(&query.class) {
        return false;
    }

    if !query.id.is_empty() && node.attribute("id") != query.id {
        return false;
    }

    query
        .attributes
        .iter()
        .all(|attr| node.attribute(&attr.key) == attr.value)
}
