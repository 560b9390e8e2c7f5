//! Compiled regex patterns and script markers for snapshot parsing.
//!
//! All patterns are compiled once at startup using `LazyLock` and reused for
//! every document.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Obfuscated Image Script Patterns
// =============================================================================

/// Substrings that mark a script as an image-planting script, tolerant of
/// both `name=value` and `name = value` spacing. Scripts without any of
/// these are not worth running the capture regexes over.
pub const SCRIPT_MARKERS: &[&str] = &["s=", "s =", "ii=", "ii ="];

/// Captures the single-quoted literal assigned to the encoded-source
/// variable (`var s='...'`).
pub static SCRIPT_IMAGE_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var\s+s\s*=\s*'([^']+)'").expect("SCRIPT_IMAGE_SOURCE regex")
});

/// Captures the first element of the target-id array literal
/// (`var ii=['...']`).
pub static SCRIPT_IMAGE_IDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var\s+ii\s*=\s*\[\s*'([^']+)'").expect("SCRIPT_IMAGE_IDS regex")
});

// =============================================================================
// Card Field Patterns
// =============================================================================

/// Matches text that is exactly a four-digit year.
pub static YEAR_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}$").expect("YEAR_TEXT regex")
});

/// Removes a `client=` query parameter in one pass: either the
/// `client=<value>` token with an optional following `&`, or an `&` that
/// already ends the string. Both arms only ever match against the original
/// string, which is what gives the transform its pinned trailing-`&`
/// behavior (see `card::strip_client_param`).
pub static CLIENT_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"client=[^&]+&?|&$").expect("CLIENT_PARAM regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_source_captures_quoted_literal() {
        let caps = SCRIPT_IMAGE_SOURCE
            .captures(r"var s='data:image/jpeg;base64,/9j/abc\x3d\x3d';")
            .unwrap();
        assert_eq!(&caps[1], r"data:image/jpeg;base64,/9j/abc\x3d\x3d");
    }

    #[test]
    fn test_script_source_tolerates_spacing() {
        let caps = SCRIPT_IMAGE_SOURCE.captures("var s = 'data:x';").unwrap();
        assert_eq!(&caps[1], "data:x");
    }

    #[test]
    fn test_script_ids_captures_first_array_element() {
        let caps = SCRIPT_IMAGE_IDS
            .captures("var ii=['img_one','img_two'];")
            .unwrap();
        assert_eq!(&caps[1], "img_one");
    }

    #[test]
    fn test_script_ids_tolerates_spacing() {
        let caps = SCRIPT_IMAGE_IDS.captures("var ii = [ 'only_id' ];").unwrap();
        assert_eq!(&caps[1], "only_id");
    }

    #[test]
    fn test_year_text_only_matches_exactly_four_digits() {
        assert!(YEAR_TEXT.is_match("1889"));
        assert!(YEAR_TEXT.is_match("2024"));
        assert!(!YEAR_TEXT.is_match("889"));
        assert!(!YEAR_TEXT.is_match("18890"));
        assert!(!YEAR_TEXT.is_match("1889 "));
        assert!(!YEAR_TEXT.is_match("c. 1889"));
    }

    #[test]
    fn test_client_param_token_includes_following_ampersand() {
        let cleaned = CLIENT_PARAM.replace_all("client=abc&q=1", "");
        assert_eq!(cleaned, "q=1");
    }

    #[test]
    fn test_client_param_matches_trailing_ampersand() {
        let cleaned = CLIENT_PARAM.replace_all("q=1&", "");
        assert_eq!(cleaned, "q=1");
    }
}
