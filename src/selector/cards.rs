//! Card Selectors
//!
//! Structural rules for locating result cards and their inner elements.
//! Cards carry no stable class names, so every rule matches on tag,
//! attribute presence, and parent/child position instead.
//!
//! Two card layouts are supported:
//! - "tile" cards: a styled `div` wrapping an anchor whose direct child is
//!   an image
//! - "list" cards: a `div` with `role="presentation"` whose first child
//!   `div` holds the anchor

use dom_query::Selection;

use crate::dom;
use crate::selector::utils::{attr, element_children, first_element_child, has_attr, is_tag, same_element};
use crate::selector::Rule;

// ============================================================
// CARD ANCHORS
// ============================================================

/// Card anchor rules, one per supported layout
pub static CARD_ANCHORS: &[Rule] = &[tile_card_anchor, list_card_anchor];

/// Union of both card layouts.
///
/// Matches an anchor recognized by either layout rule, so one
/// document-order scan yields all cards with interleaved layouts kept in
/// source order.
#[must_use]
pub fn card_anchor(sel: &Selection) -> bool {
    CARD_ANCHORS.iter().any(|rule| rule(sel))
}

/// Tile layout: the first image-bearing anchor directly inside a styled div
///
/// Shape: `div[style] > a > img`, anchor and image both direct children.
/// Only the wrapper's first qualifying anchor counts.
#[must_use]
pub fn tile_card_anchor(sel: &Selection) -> bool {
    if !is_image_anchor(sel) {
        return false;
    }

    let wrapper = dom::parent(sel);
    if !is_tag(&wrapper, "div") || !has_attr(&wrapper, "style") {
        return false;
    }

    element_children(&wrapper)
        .iter()
        .find(|child| is_image_anchor(child))
        .is_some_and(|first| same_element(first, sel))
}

/// List layout: the first anchor inside a presentation row's first cell
///
/// Shape: `div[role="presentation"] > div:first-child > a`, where the
/// anchor is the cell's first direct anchor.
#[must_use]
pub fn list_card_anchor(sel: &Selection) -> bool {
    if !is_tag(sel, "a") {
        return false;
    }

    let cell = dom::parent(sel);
    if !is_tag(&cell, "div") {
        return false;
    }

    let row = dom::parent(&cell);
    if !is_tag(&row, "div") || attr(&row, "role") != "presentation" {
        return false;
    }

    // The cell must be the row's first element child
    if !first_element_child(&row).is_some_and(|first| same_element(&first, &cell)) {
        return false;
    }

    element_children(&cell)
        .iter()
        .find(|child| is_tag(child, "a"))
        .is_some_and(|first| same_element(first, sel))
}

/// Anchor whose direct children include an image
fn is_image_anchor(sel: &Selection) -> bool {
    is_tag(sel, "a")
        && element_children(sel)
            .iter()
            .any(|child| is_tag(child, "img"))
}

// ============================================================
// SECTION TITLE
// ============================================================

/// Title text span inside a level-2 heading container
///
/// Shape: `div[role="heading"][aria-level="2"] > span`.
#[must_use]
pub fn section_title_span(sel: &Selection) -> bool {
    if !is_tag(sel, "span") {
        return false;
    }

    let heading = dom::parent(sel);
    is_tag(&heading, "div")
        && attr(&heading, "role") == "heading"
        && attr(&heading, "aria-level") == "2"
}

// ============================================================
// CARD INTERNALS
// ============================================================

/// Image with a non-empty `alt` attribute
///
/// Presence of such an image decides which name/year extraction branch a
/// card takes. Non-empty means the raw attribute value, untrimmed.
#[must_use]
pub fn labeled_img(sel: &Selection) -> bool {
    is_tag(sel, "img") && dom::get_attribute(sel, "alt").is_some_and(|alt| !alt.is_empty())
}

/// Text-bearing cell of a tile: a div directly inside `wp-grid-tile` that
/// contains no image
#[must_use]
pub fn detail_container(sel: &Selection) -> bool {
    is_tag(sel, "div")
        && is_tag(&dom::parent(sel), "wp-grid-tile")
        && !sel.select("img").exists()
}

/// Div nested directly inside another div
///
/// Year text for labeled cards hides in one of these.
#[must_use]
pub fn nested_div(sel: &Selection) -> bool {
    is_tag(sel, "div") && is_tag(&dom::parent(sel), "div")
}

/// The tile's own image: `wp-grid-tile > div > img`
#[must_use]
pub fn tile_img(sel: &Selection) -> bool {
    if !is_tag(sel, "img") {
        return false;
    }

    let cell = dom::parent(sel);
    is_tag(&cell, "div") && is_tag(&dom::parent(&cell), "wp-grid-tile")
}
