//! Predicate-based element discovery.
//!
//! Result cards carry no stable class names, so plain CSS selectors are not
//! enough: recognizing a card means looking at a candidate's parent, siblings,
//! and children. This module provides the query engines; the structural rules
//! themselves live in [`cards`].
//!
//! A [`Rule`] is a plain predicate function over a candidate [`Selection`].
//! The engines scan every element matching a tag selector, in document order,
//! and apply the rule to each candidate.

pub mod cards;
pub mod utils;

use dom_query::Selection;

/// A structural rule that tests if a selection matches certain criteria.
///
/// Rules are simple predicate functions used to locate card anchors, section
/// titles, and per-card detail elements.
pub type Rule = fn(&Selection) -> bool;

/// Query for the first element matching the rule.
///
/// Scans elements matching `tag` in document order and returns the first one
/// for which the rule returns true. Use `"*"` as the tag to scan every
/// element.
///
/// # Example
///
/// ```rust
/// use serp_cards::selector::{self, utils};
/// use serp_cards::dom;
///
/// let doc = dom::parse(r#"<a href="/rel">a</a><a href="http://x">b</a>"#);
/// let root = doc.select("html");
///
/// fn absolute_href(sel: &dom_query::Selection) -> bool {
///     utils::attr(sel, "href").starts_with("http")
/// }
///
/// let result = selector::query(&root, "a", absolute_href);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, tag: &str, rule: Rule) -> Option<Selection<'a>> {
    for node in root.select(tag).nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            return Some(sel);
        }
    }
    None
}

/// Query for all elements matching the rule.
///
/// Scans elements matching `tag` in document order and collects every one
/// for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use serp_cards::selector::{self, utils};
/// use serp_cards::dom;
///
/// let doc = dom::parse(r#"<div><img id="a"><img></div>"#);
/// let root = doc.select("div");
///
/// fn has_id(sel: &dom_query::Selection) -> bool {
///     utils::has_attr(sel, "id")
/// }
///
/// let results = selector::query_all(&root, "img", has_id);
/// assert_eq!(results.len(), 1);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, tag: &str, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select(tag).nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn has_id(sel: &Selection) -> bool {
        utils::has_attr(sel, "id")
    }

    fn any_element(_sel: &Selection) -> bool {
        true
    }

    #[test]
    fn test_query_finds_first_match() {
        let doc = dom::parse(r#"<div>a</div><div id="x">b</div><div id="y">c</div>"#);
        let root = doc.select("html");

        let result = query(&root, "div", has_id);
        assert!(result.is_some());
        assert_eq!(dom::text_content(&result.unwrap()), "b".into());
    }

    #[test]
    fn test_query_returns_none_when_no_match() {
        let doc = dom::parse("<div>a</div><div>b</div>");
        let root = doc.select("html");

        assert!(query(&root, "div", has_id).is_none());
    }

    #[test]
    fn test_query_scopes_candidates_by_tag() {
        let doc = dom::parse(r#"<span id="s">x</span><div id="d">y</div>"#);
        let root = doc.select("html");

        let result = query(&root, "div", has_id);
        assert_eq!(dom::text_content(&result.unwrap()), "y".into());
    }

    #[test]
    fn test_query_all_preserves_document_order() {
        let doc = dom::parse(
            r#"
            <div>
                <p id="1">1</p>
                <section>
                    <p id="2">2</p>
                </section>
                <p id="3">3</p>
            </div>
        "#,
        );
        let root = doc.select("div");

        let results = query_all(&root, "p", has_id);
        assert_eq!(results.len(), 3);

        assert_eq!(dom::text_content(&results[0]), "1".into());
        assert_eq!(dom::text_content(&results[1]), "2".into());
        assert_eq!(dom::text_content(&results[2]), "3".into());
    }

    #[test]
    fn test_query_all_returns_empty_when_no_matches() {
        let doc = dom::parse("<div><p>content</p></div>");
        let root = doc.select("div");

        fn never_matches(_sel: &Selection) -> bool {
            false
        }

        let results = query_all(&root, "p", never_matches);
        assert!(results.is_empty());
    }

    #[test]
    fn test_wildcard_tag_scans_every_element() {
        let doc = dom::parse("<div><p>a</p><span>b</span></div>");
        let root = doc.select("div");

        let results = query_all(&root, "*", any_element);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_rule_can_check_multiple_conditions() {
        let doc = dom::parse(
            r#"
            <div>
                <a href="/x"><img alt="pic"></a>
                <a href="/y">text only</a>
            </div>
        "#,
        );
        let root = doc.select("div");

        fn anchor_with_image(sel: &Selection) -> bool {
            utils::has_attr(sel, "href") && sel.select("img").exists()
        }

        let result = query(&root, "a", anchor_with_image);
        assert!(result.is_some());
        assert_eq!(utils::attr(&result.unwrap(), "href"), "/x");
    }
}
