//! Result types for extraction output.
//!
//! This module defines the structured output of a parse: one record per
//! located card, grouped under the page's section title. The serialized
//! shape is what lands in the JSON artifacts, so field names and key
//! omission rules here are part of the output contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracted result card.
///
/// Every field is optional: a card whose name, link, or image could not be
/// extracted still produces a record with `null` in the failed field.
/// `extensions` is the exception: it is omitted from the JSON entirely when
/// no year was found, never serialized as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Item name, from the image's alt text or the card's detail text.
    pub name: Option<String>,

    /// Year of the item, as a single-element list when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Absolute link to the result, `client=` parameter stripped.
    pub link: Option<String>,

    /// Resolved image source, usually a decoded data URI.
    pub image: Option<String>,
}

/// Parse output for one document: section title mapped to its records.
///
/// Always a single-key mapping in the normal path; the key is the
/// lower-cased, trimmed section title, or the empty string when the page
/// has no heading. Only a document-level failure (an unreadable file)
/// degrades the result to a mapping with no keys at all.
///
/// Serializes transparently as the mapping itself:
///
/// ```json
/// { "paintings": [ { "name": "...", "link": "...", "image": "..." } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseResult {
    sections: BTreeMap<String, Vec<CardRecord>>,
}

impl ParseResult {
    /// Build the normal single-section result.
    #[must_use]
    pub fn section(title: String, records: Vec<CardRecord>) -> Self {
        let mut sections = BTreeMap::new();
        sections.insert(title, records);
        Self { sections }
    }

    /// The degenerate zero-key result for unreadable documents.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The section title, if the result holds a section.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.sections.keys().next().map(String::as_str)
    }

    /// The extracted records, in document order.
    #[must_use]
    pub fn records(&self) -> &[CardRecord] {
        self.sections.values().next().map_or(&[], Vec::as_slice)
    }

    /// Whether the result holds no section at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
