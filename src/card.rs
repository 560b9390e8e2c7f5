//! Per-card field extraction.
//!
//! A card is one anchor located by the rules in [`crate::selector::cards`].
//! Each of the four fields (name, year, link, image) is extracted by its own
//! routine, and every routine runs behind the same [`attempt`] combinator:
//! a failure inside one extractor is logged and becomes `None` for that
//! field only, never aborting the other fields or other cards.
//!
//! Name and year branch on the same witness: an `<img>` inside the card
//! with a non-empty `alt`. Labeled cards read the alt text and hunt nested
//! divs for a four-digit year; unlabeled cards read both from the tile's
//! text-bearing detail container.

// Extractors share the Result<Option<String>> shape so the attempt
// combinator applies uniformly, even where a routine cannot currently fail.
#![allow(clippy::unnecessary_wraps)]

use dom_query::Selection;
use tracing::warn;

use crate::dom;
use crate::error::Result;
use crate::image_index::ImageIndex;
use crate::patterns::{CLIENT_PARAM, YEAR_TEXT};
use crate::result::CardRecord;
use crate::selector::{self, cards, utils};

/// Fixed origin prefixed onto every relative card href.
pub const LINK_ORIGIN: &str = "https://www.google.com";

/// Extract one record from a located card anchor.
///
/// `index` is the card's position in document order, used only for
/// diagnostics. Field failures degrade to `null` fields; a missing year
/// omits `extensions` entirely.
#[must_use]
pub fn extract_record(index: usize, card: &Selection, images: &ImageIndex) -> CardRecord {
    let name = attempt(index, "name", || card_name(card));
    let year = attempt(index, "year", || card_year(card));
    let link = attempt(index, "link", || card_link(card));
    let image = attempt(index, "image", || card_image(card, images));

    CardRecord {
        name,
        extensions: year.map(|year| vec![year]),
        link,
        image,
    }
}

/// Run one field extractor, converting failure into absence.
fn attempt(
    index: usize,
    field: &'static str,
    run: impl FnOnce() -> Result<Option<String>>,
) -> Option<String> {
    match run() {
        Ok(value) => value,
        Err(err) => {
            warn!(card = index, field, error = %err, "field extraction failed");
            None
        }
    }
}

/// Item name: the labeled image's alt text, else the first div of the
/// card's detail container.
fn card_name(card: &Selection) -> Result<Option<String>> {
    if let Some(img) = selector::query(card, "img", cards::labeled_img) {
        return Ok(Some(utils::attr(&img, "alt").trim().to_string()));
    }

    let Some(container) = detail_text_container(card) else {
        return Ok(None);
    };
    let Some(first) = utils::first_element_child(&container) else {
        return Ok(None);
    };
    Ok(Some(dom::text_content(&first).trim().to_string()))
}

/// Item year, if the card carries one.
///
/// Labeled cards: first nested `div > div` whose trimmed text is exactly
/// four digits. Unlabeled cards: the trimmed text of the detail container's
/// last div child, with empty text meaning no year.
fn card_year(card: &Selection) -> Result<Option<String>> {
    if selector::query(card, "img", cards::labeled_img).is_some() {
        for candidate in selector::query_all(card, "div", cards::nested_div) {
            let text = dom::text_content(&candidate);
            let trimmed = text.trim();
            if YEAR_TEXT.is_match(trimmed) {
                return Ok(Some(trimmed.to_string()));
            }
        }
        return Ok(None);
    }

    let Some(container) = detail_text_container(card) else {
        return Ok(None);
    };
    let children = utils::element_children(&container);
    let Some(last_div) = children.iter().rev().find(|child| utils::is_tag(child, "div")) else {
        return Ok(None);
    };
    let text = dom::text_content(last_div);
    let trimmed = text.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Absolute link: fixed origin plus the anchor's href, `client=` stripped.
fn card_link(card: &Selection) -> Result<Option<String>> {
    let Some(href) = dom::get_attribute(card, "href") else {
        return Ok(None);
    };
    Ok(Some(strip_client_param(&format!("{LINK_ORIGIN}{href}"))))
}

/// Remove a `client=` query parameter in one replacement pass.
///
/// Both alternation arms match against the original string only, so
/// removing a final `client=` token leaves the `&` that preceded it in
/// place. That quirk is pinned; callers rely on the exact output.
#[must_use]
pub fn strip_client_param(url: &str) -> String {
    if !url.contains("client=") {
        return url.to_string();
    }
    CLIENT_PARAM.replace_all(url, "").into_owned()
}

/// Image source: the card image's id resolved through the index, else its
/// raw `data-src`.
fn card_image(card: &Selection, images: &ImageIndex) -> Result<Option<String>> {
    let Some(img) = locate_card_image(card) else {
        return Ok(None);
    };

    if let Some(id) = dom::get_attribute(&img, "id") {
        if let Some(decoded) = images.resolve(&id) {
            return Ok(Some(decoded.to_string()));
        }
    }
    Ok(dom::get_attribute(&img, "data-src"))
}

/// Find the card's image element.
///
/// A card with a `wp-grid-tile` wrapper only counts its own
/// `wp-grid-tile > div > img`; anything else in the tile is decoration.
/// Cards without a tile take their first descendant image.
fn locate_card_image<'a>(card: &Selection<'a>) -> Option<Selection<'a>> {
    if card.select("wp-grid-tile").exists() {
        return selector::query(card, "img", cards::tile_img);
    }

    let first = card.select("img").first();
    first.exists().then_some(first)
}

/// First detail container whose first element child is a div.
///
/// Name and year of unlabeled cards both read from this container.
fn detail_text_container<'a>(card: &Selection<'a>) -> Option<Selection<'a>> {
    selector::query_all(card, "div", cards::detail_container)
        .into_iter()
        .find(|container| {
            utils::first_element_child(container).is_some_and(|first| utils::is_tag(&first, "div"))
        })
}
