//! Snapshot encoding detection and transcoding.
//!
//! Saved pages are not always UTF-8; browsers write out whatever the
//! original response declared. This module sniffs the encoding and
//! transcodes to UTF-8 before parsing, so the byte-level entry point
//! accepts legacy snapshots without caller involvement.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match a `charset=` declaration inside any `<meta>` tag, covering both
/// `<meta charset="...">` and the `http-equiv` Content-Type form
#[allow(clippy::expect_used)]
static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Detect the character encoding of a snapshot.
///
/// Detection order:
/// 1. A byte-order mark
/// 2. A `charset=` declaration in a `<meta>` tag within the first 1024 bytes
/// 3. UTF-8 as the web default
#[must_use]
pub fn snapshot_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_length)) = Encoding::for_bom(html) {
        return encoding;
    }

    // Only look at the head of the file; real declarations sit there
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(captures) = CHARSET_DECL.captures(&head_str) {
        if let Some(encoding) = Encoding::for_label(captures[1].as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcode snapshot bytes to a UTF-8 string.
///
/// Invalid byte sequences are replaced rather than rejected, and a leading
/// byte-order mark is dropped. This never fails; at worst the output
/// carries replacement characters.
#[must_use]
pub fn decode_snapshot(html: &[u8]) -> String {
    let encoding = snapshot_encoding(html);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(snapshot_encoding(html), UTF_8);
    }

    #[test]
    fn detect_iso88591_maps_to_windows1252() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG spec
        assert_eq!(snapshot_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_content_type_meta() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#;
        assert_eq!(snapshot_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_without_quotes() {
        let html = b"<meta charset=utf-8>";
        assert_eq!(snapshot_encoding(html), UTF_8);
    }

    #[test]
    fn bom_overrides_meta_declaration() {
        let html = b"\xff\xfe<\0m\0e\0t\0a\0 \0c\0h\0a\0r\0s\0e\0t\0=\0u\0t\0f\0-\08\0>\0";
        assert_eq!(snapshot_encoding(html).name(), "UTF-16LE");
    }

    #[test]
    fn default_to_utf8_when_no_charset() {
        let html = b"<html><body>Test</body></html>";
        assert_eq!(snapshot_encoding(html), UTF_8);
    }

    #[test]
    fn declaration_past_first_kilobyte_is_ignored() {
        let html = format!("<!--{}--><meta charset=\"ISO-8859-1\">", " ".repeat(1100));
        assert_eq!(snapshot_encoding(html.as_bytes()), UTF_8);
    }

    #[test]
    fn decode_iso88591_body() {
        // ISO-8859-1 encoded HTML with a special character (é = 0xE9)
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let result = decode_snapshot(html);
        assert!(result.contains("Caf\u{E9}"));
    }

    #[test]
    fn decode_strips_utf8_bom() {
        let html = b"\xef\xbb\xbf<p>x</p>";
        assert_eq!(decode_snapshot(html), "<p>x</p>");
    }

    #[test]
    fn decode_handles_invalid_bytes_lossily() {
        let html = b"<html><body>Test \xFF\xFF Invalid</body></html>";
        let result = decode_snapshot(html);
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
    }
}
