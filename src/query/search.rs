use crate::dom::Node;
use crate::query::{Query, matcher};

/// Find the first descendant of `node` matching `query`
///
/// Descendants are visited in document order: each child is tested before
/// its own subtree is searched, and a subtree is exhausted before the next
/// sibling. `node` itself is never tested. The walk uses an explicit stack,
/// so arbitrarily deep trees are fine.
pub fn find_first(node: &Node, query: &Query) -> Option<Node> {
    log::debug!("find_first: {}", query);
    let found = node.descendants().find(|n| matcher::matches(n, query));
    if let Some(found) = &found {
        log::trace!("matched {:?}", found);
    }
    found
}

/// Find every descendant of `node` matching `query`, in document order
///
/// Returns an empty list when nothing matches. `node` itself is never tested.
pub fn find_all(node: &Node, query: &Query) -> Vec<Node> {
    log::debug!("find_all: {}", query);
    let found: Vec<Node> = node.descendants().filter(|n| matcher::matches(n, query)).collect();
    log::debug!("find_all: {} matches", found.len());
    found
}
