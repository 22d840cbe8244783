// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dialect repair for Ditz-flavoured YAML.
//!
//! The Ditz writer leaves three defects in its output:
//!
//! - Record tags (`!ditz.rubyforge.org,2008-03-06/issue`) carry a comma,
//!   which libyaml refuses in a shorthand tag.
//! - A title beginning with a backtick is written as a plain scalar, but a
//!   backtick cannot start a plain scalar in YAML.
//! - Non-ASCII characters are written as runs of `\xNN` escapes holding the
//!   raw UTF-8 bytes, which a YAML parser reads as one Latin-1 character
//!   per byte.
//!
//! [`repair`] fixes all three at the text level so the result parses with a
//! standard grammar. Parsing itself is left to [`crate::record`].

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::record::TAG_PREFIX;

/// [`TAG_PREFIX`] with its comma percent-encoded. libyaml decodes the escape,
/// so the parsed tag is unchanged.
const ENCODED_TAG_PREFIX: &str = "ditz.rubyforge.org%2C2008-03-06/";

// A tag only appears after a document marker, a sequence dash, or a key.
static RECORD_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(&format!(
        r"(?m)^([ \t]*(?:---[ \t]+|-[ \t]+)?(?:[\w-]+:[ \t]+)?)!{}",
        regex::escape(TAG_PREFIX)
    )) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

// A `\xNN` escape kept whole, or a character that needs escaping inside
// double quotes.
static TITLE_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r#"\\x[0-9A-Fa-f]{2}|["\\]"#) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

// Only a top-level `title:` key; indented lines belong to block scalars.
static BACKTICK_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?m)^title: (`[^\r\n]*)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

// An escaped backslash is matched as a unit so that `\\x41` is never read
// as a byte escape.
static BYTE_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\\\\|(?:\\x[0-9A-Fa-f]{2})+") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Width of one `\xNN` escape in bytes.
const ESCAPE_LEN: usize = 4;

/// Rewrite Ditz record text into conformant YAML.
///
/// Applying `repair` to its own output returns the same text.
///
/// # Errors
///
/// Returns [`Error::InvalidByteEscape`] if a byte-escape run does not decode
/// as UTF-8.
pub fn repair(text: &str) -> Result<String> {
    let tagged = encode_record_tags(text);
    let quoted = quote_backtick_titles(&tagged);
    decode_byte_escapes(&quoted)
}

/// Percent-encode the comma in Ditz record tags.
pub fn encode_record_tags(text: &str) -> String {
    RECORD_TAG_RE
        .replace_all(text, |caps: &Captures| {
            format!("{}!{}", &caps[1], ENCODED_TAG_PREFIX)
        })
        .into_owned()
}

/// Wrap `title: `...` values in double quotes.
///
/// `\xNN` escapes are left intact so that [`decode_byte_escapes`] still
/// sees them.
pub fn quote_backtick_titles(text: &str) -> String {
    BACKTICK_TITLE_RE
        .replace_all(text, |caps: &Captures| {
            let value = TITLE_ESCAPE_RE.replace_all(caps[1].trim_end(), |m: &Captures| {
                let found = &m[0];
                if found.len() > 1 {
                    found.to_string()
                } else {
                    format!("\\{}", found)
                }
            });
            format!("title: \"{}\"", value)
        })
        .into_owned()
}

/// Replace each maximal run of `\xNN` escapes with the text it encodes.
///
/// Each run is decoded on its own. Bytes that decode to ASCII keep their
/// escaped form, which is already valid YAML.
pub fn decode_byte_escapes(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in BYTE_ESCAPE_RE.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let run = m.as_str();
        if run.starts_with("\\\\") {
            out.push_str(run);
        } else {
            decode_run(run, &mut out)?;
        }
        last = m.end();
    }
    out.push_str(&text[last..]);

    Ok(out)
}

fn decode_run(run: &str, out: &mut String) -> Result<()> {
    let bytes = run
        .as_bytes()
        .chunks(ESCAPE_LEN)
        .map(|escape| escape.get(2..).and_then(hex_byte))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| Error::InvalidByteEscape {
            escape: run.to_string(),
            reason: "malformed hex digits".to_string(),
        })?;

    let decoded = String::from_utf8(bytes).map_err(|e| Error::InvalidByteEscape {
        escape: run.to_string(),
        reason: e.to_string(),
    })?;

    let mut offset = 0;
    for c in decoded.chars() {
        let width = c.len_utf8();
        if c.is_ascii() {
            out.push_str(&run[offset * ESCAPE_LEN..(offset + width) * ESCAPE_LEN]);
        } else if needs_unicode_escape(c) {
            out.push_str(&format!("\\u{:04X}", u32::from(c)));
        } else {
            out.push(c);
        }
        offset += width;
    }

    Ok(())
}

/// Characters libyaml folds as line breaks or rejects as non-printable
/// when written literally.
fn needs_unicode_escape(c: char) -> bool {
    matches!(
        c,
        '\u{80}'..='\u{9f}' | '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}'
    )
}

fn hex_byte(digits: &[u8]) -> Option<u8> {
    let digits = std::str::from_utf8(digits).ok()?;
    u8::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
#[path = "repair_tests.rs"]
mod tests;
