//! Read-only DOM access helpers.
//!
//! Thin wrappers over `dom_query` shared by the locator rules and the field
//! extractors. Card extraction never mutates the tree, so only read
//! operations live here; everything returns either an owned `String` or a
//! zero-copy `StrTendril`.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril so callers can hold text without copying
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// The underlying parser is error-recovering: malformed markup still yields
/// a tree, never a failure.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|value| value.to_string())
}

/// Check if an attribute exists, regardless of its value.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Get the tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|tag| tag.to_string())
}

/// Get all text content of the selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get the parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_read_attributes() {
        let doc = parse(r#"<a href="/link1" id="card">text</a>"#);
        let anchor = doc.select("a");

        assert_eq!(get_attribute(&anchor, "href"), Some("/link1".to_string()));
        assert_eq!(get_attribute(&anchor, "id"), Some("card".to_string()));
        assert_eq!(get_attribute(&anchor, "data-src"), None);
    }

    #[test]
    fn test_has_attribute_matches_presence_not_value() {
        let doc = parse(r#"<div style="">styled</div>"#);
        let div = doc.select("div");

        assert!(has_attribute(&div, "style"));
        assert!(!has_attribute(&div, "role"));
    }

    #[test]
    fn test_tag_name_is_lowercase() {
        let doc = parse("<DIV><WP-GRID-TILE>x</WP-GRID-TILE></DIV>");

        assert_eq!(tag_name(&doc.select("div")), Some("div".to_string()));
        assert_eq!(
            tag_name(&doc.select("wp-grid-tile")),
            Some("wp-grid-tile".to_string())
        );
    }

    #[test]
    fn test_tag_name_on_empty_selection_is_none() {
        let doc = parse("<div>x</div>");
        assert_eq!(tag_name(&doc.select("span")), None);
    }

    #[test]
    fn test_text_content_joins_descendants() {
        let doc = parse("<div>one <span>two</span> three</div>");
        assert_eq!(text_content(&doc.select("div")), "one two three".into());
    }

    #[test]
    fn test_parent_walks_up_one_level() {
        let doc = parse(r#"<div role="presentation"><div><a href="/x">x</a></div></div>"#);
        let anchor = doc.select("a");

        let holder = parent(&anchor);
        assert_eq!(tag_name(&holder), Some("div".to_string()));

        let wrapper = parent(&holder);
        assert_eq!(get_attribute(&wrapper, "role"), Some("presentation".to_string()));
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let doc = parse("<div><a href='/x'>unclosed");
        assert!(doc.select("a").exists());
    }
}
