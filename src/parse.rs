//! Document parse orchestration.
//!
//! One call per snapshot: build the image index first (card extraction
//! depends on it), then locate the section title and every card anchor in
//! a single document-order scan, and map each card to a record. The result
//! is always a single-section mapping; per-field failures have already
//! degraded to absent fields by the time records land here.

use tracing::debug;

use crate::card;
use crate::dom::{self, Selection};
use crate::image_index::ImageIndex;
use crate::result::{CardRecord, ParseResult};
use crate::selector::{self, cards};

/// Parse one HTML document into its section of card records.
pub(crate) fn parse_document(html: &str) -> ParseResult {
    let doc = dom::parse(html);

    // Image sources are planted by inline scripts, so the index must exist
    // before any card is read
    let images = ImageIndex::build(&doc);

    let root = doc.select("html");
    let title = section_title(&root);
    let records = collect_records(&root, &images);

    debug!(
        title = %title,
        cards = records.len(),
        images = images.len(),
        "document parsed"
    );

    ParseResult::section(title, records)
}

/// Locate the section heading and normalize it to the mapping key.
///
/// A page without a heading gets the empty-string key; the section itself
/// still exists.
fn section_title(root: &Selection) -> String {
    selector::query(root, "span", cards::section_title_span)
        .map(|span| dom::text_content(&span).trim().to_lowercase())
        .unwrap_or_default()
}

/// Locate every card anchor and extract one record per card, in document
/// order.
fn collect_records(root: &Selection, images: &ImageIndex) -> Vec<CardRecord> {
    selector::query_all(root, "a", cards::card_anchor)
        .iter()
        .enumerate()
        .map(|(index, anchor)| card::extract_record(index, anchor, images))
        .collect()
}
