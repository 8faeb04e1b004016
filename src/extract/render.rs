//! Markup-to-text rendering.
//!
//! Turns a captured fragment into plain text that keeps the readable
//! structure of the page: paragraphs, list bullets, table rows and inline
//! code. The passes below run in a fixed order; later passes rely on the
//! newlines inserted by earlier ones.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static NON_PROSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .unwrap()
});
static CELL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</t[dh]\s*>\s*<t[dh](?:\s[^>]*)?>").unwrap());
static ROW_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</tr\s*>").unwrap());
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:h[1-6]|p|div|section|blockquote|pre)(?:\s[^>]*)?>").unwrap()
});
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li(?:\s[^>]*)?>").unwrap());
static LIST_CONTAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:ul|ol)(?:\s[^>]*)?>").unwrap());
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<code(?:\s[^>]*)?>(.*?)</code\s*>").unwrap());
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:#(\d{1,7})|#[xX]([0-9a-fA-F]{1,6})|([a-zA-Z]{2,8}));").unwrap());
static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x0B\x0C\u{a0}]+").unwrap());
static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Render a markup fragment to normalized plain text.
///
/// Rendering is idempotent only for fragments without escaped markup.
/// Entities are decoded after tags are stripped, so `&lt;br&gt;` comes out
/// as a literal `<br>`; rendering that output again would treat it as a
/// tag.
pub fn markup_to_text(fragment: &str) -> String {
    let text = NON_PROSE.replace_all(fragment, "");
    let text = CELL_BOUNDARY.replace_all(&text, " | ");
    let text = ROW_END.replace_all(&text, "\n");
    let text = BLOCK_TAG.replace_all(&text, "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = LIST_ITEM.replace_all(&text, "\n- ");
    let text = LIST_CONTAINER.replace_all(&text, "\n");
    let text = INLINE_CODE.replace_all(&text, |caps: &Captures| {
        format!("`{}`", ANY_TAG.replace_all(&caps[1], ""))
    });
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    normalize_whitespace(&text)
}

/// Decode named and numeric character references.
///
/// Unknown names and invalid code points are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(dec) = caps.get(1) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
            } else {
                caps.get(3).and_then(|name| named_entity(name.as_str()))
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "laquo" => '«',
        "raquo" => '»',
        "bull" => '•',
        "middot" => '·',
        "times" => '×',
        "divide" => '÷',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "deg" => '°',
        "larr" => '←',
        "rarr" => '→',
        "uarr" => '↑',
        "darr" => '↓',
        "le" => '≤',
        "ge" => '≥',
        "ne" => '≠',
        "infin" => '∞',
        _ => return None,
    };
    Some(c)
}

/// Fold carriage returns, collapse horizontal runs, trim each line and
/// allow at most one blank line between paragraphs.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let joined = lines.join("\n");
    EXCESS_NEWLINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}
