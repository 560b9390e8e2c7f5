//! Decoding of backslash-escaped single-quoted script literals.
//!
//! The image-planting scripts carry their data URIs as JavaScript string
//! literals with `=` and `&` hidden behind `\xHH` escapes (`\x3d`, `\x26`).
//! Parsing never executes scripts, so this module decodes such literals
//! directly. The supported repertoire is the standard JavaScript escape set;
//! anything else is a decode failure so a mangled literal degrades exactly
//! one image instead of producing silent garbage.

use crate::error::{Error, Result};

/// Decodes one backslash-escaped literal body (without its quotes).
///
/// Supported escapes: `\\`, `\'`, `\"`, `\/`, `\n`, `\t`, `\r`, `\f`,
/// `\b`, `\v`, `\0` (when not followed by a digit), `\xHH`, `\uXXXX`, and
/// surrogate pairs written as two `\uXXXX` escapes. `\xHH` decodes to the
/// code point U+00HH, matching how a script engine would read the literal.
pub fn unescape_literal(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let Some(escape) = chars.next() else {
            return Err(Error::Escape("dangling backslash".to_string()));
        };
        match escape {
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            '/' => out.push('/'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'f' => out.push('\u{000C}'),
            'b' => out.push('\u{0008}'),
            'v' => out.push('\u{000B}'),
            '0' => {
                // \0 followed by a digit would be a legacy octal escape
                if chars.peek().is_some_and(char::is_ascii_digit) {
                    return Err(Error::Escape("octal escape".to_string()));
                }
                out.push('\0');
            }
            'x' => {
                let code = hex_escape(&mut chars, 2)?;
                let Some(decoded) = char::from_u32(code) else {
                    return Err(Error::Escape(format!("invalid \\x escape {code:#04x}")));
                };
                out.push(decoded);
            }
            'u' => out.push(unicode_escape(&mut chars)?),
            other => {
                return Err(Error::Escape(format!("unsupported escape \\{other}")));
            }
        }
    }

    Ok(out)
}

/// Reads `digits` hex digits off the iterator.
fn hex_escape<I>(chars: &mut I, digits: usize) -> Result<u32>
where
    I: Iterator<Item = char>,
{
    let mut code = 0u32;
    for _ in 0..digits {
        let Some(digit) = chars.next() else {
            return Err(Error::Escape("truncated hex escape".to_string()));
        };
        let Some(value) = digit.to_digit(16) else {
            return Err(Error::Escape(format!("non-hex digit {digit:?} in escape")));
        };
        code = code * 16 + value;
    }
    Ok(code)
}

/// Reads the remainder of a `\u` escape, combining surrogate pairs.
fn unicode_escape<I>(chars: &mut I) -> Result<char>
where
    I: Iterator<Item = char>,
{
    let code = hex_escape(chars, 4)?;

    if (0xDC00..=0xDFFF).contains(&code) {
        return Err(Error::Escape(format!("lone low surrogate \\u{code:04x}")));
    }
    if (0xD800..=0xDBFF).contains(&code) {
        // High surrogate: the matching low half must follow immediately.
        if chars.next() != Some('\\') || chars.next() != Some('u') {
            return Err(Error::Escape(format!(
                "high surrogate \\u{code:04x} without a following \\u escape"
            )));
        }
        let low = hex_escape(chars, 4)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(Error::Escape(format!(
                "\\u{code:04x} followed by non-surrogate \\u{low:04x}"
            )));
        }
        let scalar = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(scalar).ok_or_else(|| {
            Error::Escape(format!("invalid surrogate pair \\u{code:04x}\\u{low:04x}"))
        });
    }

    char::from_u32(code).ok_or_else(|| Error::Escape(format!("invalid \\u escape {code:#06x}")))
}
