//! Utility functions for selector rules.
//!
//! Helper functions shared by the card rules for attribute access and
//! child/sibling traversal. Attribute helpers return an empty string when
//! the attribute is missing, so rules can match on values without unwrapping.

use crate::dom;
use dom_query::Selection;

// === Element Attribute Helpers ===

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Check if an attribute is present, regardless of its value
#[inline]
#[must_use]
pub fn has_attr(sel: &Selection, name: &str) -> bool {
    dom::has_attribute(sel, name)
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

// === DOM Traversal ===

/// Get the direct element children of a selection, in document order.
///
/// Text nodes and comments between elements are skipped. An empty selection
/// has no children.
///
/// # Example
///
/// ```rust
/// use serp_cards::selector::utils;
/// use serp_cards::dom;
///
/// let doc = dom::parse("<div>text<span>a</span>more<p>b</p></div>");
/// let div = doc.select("div");
///
/// let children = utils::element_children(&div);
/// assert_eq!(children.len(), 2);
/// assert_eq!(utils::tag(&children[0]), "span");
/// ```
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut children = Vec::new();
    let Some(node) = sel.nodes().first() else {
        return children;
    };
    for child_node in node.children() {
        if child_node.is_element() {
            children.push(Selection::from(child_node));
        }
    }
    children
}

/// Get the first direct element child, if any.
#[inline]
#[must_use]
pub fn first_element_child<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    element_children(sel).into_iter().next()
}

/// Check whether two selections refer to the same element node.
///
/// Empty selections never compare equal, not even to each other.
#[must_use]
pub fn same_element(a: &Selection, b: &Selection) -> bool {
    match (a.nodes().first(), b.nodes().first()) {
        (Some(node_a), Some(node_b)) => node_a.id == node_b.id,
        _ => false,
    }
}
