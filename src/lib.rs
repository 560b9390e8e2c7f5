//! # serp-cards
//!
//! Extracts structured result cards from saved search-results-page
//! snapshots and serializes them to JSON.
//!
//! A snapshot is one saved HTML file. Parsing locates every result card
//! across the two supported layouts, recovers each card's name, year,
//! link, and image (real image sources are obfuscated inside inline
//! scripts, not present in the markup), and returns a single-section
//! mapping from the page's heading to the ordered record list.
//!
//! ## Quick Start
//!
//! ```rust
//! use serp_cards::parse;
//!
//! let html = r#"
//! <div role="heading" aria-level="2"><span>Paintings</span></div>
//! <div style="width:120px">
//!   <a href="/search?q=starry+night"><img alt="The Starry Night"></a>
//! </div>"#;
//!
//! let result = parse(html);
//! assert_eq!(result.title(), Some("paintings"));
//! assert_eq!(result.records()[0].name.as_deref(), Some("The Starry Night"));
//! ```
//!
//! ## Failure model
//!
//! The parse surface never fails outward: a field that cannot be extracted
//! becomes `null`, a missing heading becomes the empty-string section key,
//! and an unreadable file degrades to an empty mapping. Diagnostics are
//! emitted through `tracing`; batch processing in [`batch`] reports
//! per-run counts instead of aborting.

mod error;
mod parse;
mod patterns;
mod result;

/// Batch processing of snapshot directories.
pub mod batch;

/// Per-card field extraction.
pub mod card;

/// Read-only DOM access helpers.
pub mod dom;

/// Snapshot encoding detection and transcoding.
pub mod encoding;

/// Obfuscated image-source recovery from inline scripts.
pub mod image_index;

/// Predicate-based element discovery and the card rules.
pub mod selector;

/// Backslash-escape decoding for single-quoted script literals.
pub mod unescape;

// Public API - re-exports
pub use error::{Error, Result};
pub use image_index::ImageIndex;
pub use result::{CardRecord, ParseResult};

use std::path::Path;

use tracing::warn;

/// Parses one snapshot's HTML into its section of card records.
///
/// Always returns a single-section mapping: the section key is the
/// lower-cased page heading (empty string when absent) and the records
/// follow card order in the document. Individual extraction failures
/// degrade the affected field, never the call.
///
/// # Example
///
/// ```rust
/// use serp_cards::parse;
///
/// let result = parse("<p>no cards here</p>");
/// assert_eq!(result.title(), Some(""));
/// assert!(result.records().is_empty());
/// ```
#[must_use]
pub fn parse(html: &str) -> ParseResult {
    parse::parse_document(html)
}

/// Parses snapshot bytes with automatic encoding detection.
///
/// Sniffs the character encoding (byte-order mark, then `<meta>` charset
/// declaration, then UTF-8), transcodes, and delegates to [`parse`].
/// Invalid byte sequences are replaced rather than rejected.
///
/// # Example
///
/// ```rust
/// use serp_cards::parse_bytes;
///
/// // ISO-8859-1 snapshot with a charset declaration
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>
/// <div style=\"w\"><a href=\"/x\"><img alt=\"Caf\xE9 Terrace\"></a></div>
/// </body></html>";
///
/// let result = parse_bytes(html);
/// assert_eq!(result.records()[0].name.as_deref(), Some("Caf\u{e9} Terrace"));
/// ```
#[must_use]
pub fn parse_bytes(html: &[u8]) -> ParseResult {
    let html_str = encoding::decode_snapshot(html);
    parse(&html_str)
}

/// Parses one snapshot file.
///
/// A file that cannot be read is the document-level failure boundary: the
/// problem is logged with the offending path and the call returns the
/// empty mapping instead of raising.
///
/// # Example
///
/// ```rust
/// let result = serp_cards::parse_file("does/not/exist.html");
/// assert!(result.is_empty());
/// ```
#[must_use]
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => parse_bytes(&bytes),
        Err(err) => {
            warn!(snapshot = %path.display(), error = %err, "snapshot could not be read");
            ParseResult::empty()
        }
    }
}
