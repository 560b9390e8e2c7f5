//! Obfuscated image-source recovery.
//!
//! Card images on the page do not carry their real source as a plain
//! attribute. Instead, inline scripts plant it after load:
//!
//! ```text
//! (function(){var s='data:image/jpeg;base64,...\x3d\x3d';var ii=['kximg0'];_setImagesSrc(ii,s);})();
//! ```
//!
//! [`ImageIndex::build`] scans every `<script>` element once, pairs the
//! escaped source literal with the first image id, decodes the literal, and
//! stores `id -> decoded source`. Card extraction then resolves an image
//! element's `id` attribute against the index.
//!
//! Scripts missing either variable are not image scripts and are skipped
//! silently. A literal that fails to decode degrades only its own entry,
//! with a warning.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dom::{self, Document, Selection};
use crate::patterns::{SCRIPT_IMAGE_IDS, SCRIPT_IMAGE_SOURCE, SCRIPT_MARKERS};
use crate::unescape;

/// Mapping from image-element id to its decoded data URI.
///
/// Built once per document, before any card is read, and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageIndex {
    entries: HashMap<String, String>,
}

impl ImageIndex {
    /// Scan all inline scripts in the document and build the index.
    ///
    /// A repeated id overwrites its earlier entry, matching the assignment
    /// order the scripts imply.
    #[must_use]
    pub fn build(doc: &Document) -> Self {
        let mut entries = HashMap::new();

        for script in doc.select("script").nodes() {
            let script_sel = Selection::from(*script);
            let text = dom::text_content(&script_sel);

            // Cheap prefilter before running the capture regexes
            if !SCRIPT_MARKERS.iter().any(|marker| text.contains(*marker)) {
                continue;
            }

            let Some(source) = SCRIPT_IMAGE_SOURCE.captures(&text) else {
                continue;
            };
            let Some(ids) = SCRIPT_IMAGE_IDS.captures(&text) else {
                continue;
            };

            let id = ids[1].to_string();
            match unescape::unescape_literal(&source[1]) {
                Ok(decoded) => {
                    entries.insert(id, decoded);
                }
                Err(err) => {
                    warn!(id = %id, error = %err, "skipping image source that failed to decode");
                }
            }
        }

        debug!(entries = entries.len(), "image index built");
        Self { entries }
    }

    /// Look up the decoded source for an image id.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Number of indexed images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ImageIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
