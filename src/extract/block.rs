//! Element span matching over raw markup.
//!
//! Nothing here builds a document tree. All functions work on byte offsets
//! into an immutable buffer and only track nesting depth of one element
//! name at a time, which is enough to cut a container out of a page
//! snapshot of unknown completeness.
//!
//! Every offset returned points at an ASCII `<` or just past an ASCII `>`,
//! so slicing the buffer with it is always on a char boundary.

use std::ops::Range;

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Structural signature identifying an element in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Literal attribute text, e.g. `data-testid="user-message"`.
    ///
    /// May be an unterminated prefix such as `id="markdown-content-`.
    Attr(&'static str),
    /// A whole whitespace-separated token of the element's `class` attribute.
    Class(&'static str),
    /// A (custom) element name, e.g. `user-query`.
    Element(&'static str),
}

/// One occurrence of a marker inside an opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Where the marker text itself starts.
    pub anchor: usize,
    /// Start (`<`) of the opening tag carrying the marker.
    pub tag_start: usize,
}

/// Offset just past the `>` closing the tag that starts at `lt`.
///
/// Quoted attribute values may contain `>`; they are skipped. An
/// unterminated tag ends at the end of the buffer.
pub fn tag_end(doc: &str, lt: usize) -> usize {
    let bytes = doc.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = lt + 1;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return i + 1,
            None => {}
        }
        i += 1;
    }
    bytes.len()
}

/// Name of the tag starting at `lt` (without `/` for closing tags).
pub fn tag_name_at(doc: &str, lt: usize) -> Option<&str> {
    let rest = doc.get(lt + 1..)?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b':')
        .count();
    if len == 0 || !rest.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }
    Some(&rest[..len])
}

fn is_closing_at(doc: &str, lt: usize) -> bool {
    doc.as_bytes().get(lt + 1) == Some(&b'/')
}

/// True when `doc[at..]` starts with `<name` (or `</name` when `closing`)
/// followed by a tag-name terminator.
fn tag_matches(doc: &str, at: usize, name: &str, closing: bool) -> bool {
    let bytes = doc.as_bytes();
    let mut i = at + 1;
    if closing {
        if bytes.get(i) != Some(&b'/') {
            return false;
        }
        i += 1;
    }
    let end = i + name.len();
    if end > bytes.len() || !bytes[i..end].eq_ignore_ascii_case(name.as_bytes()) {
        return false;
    }
    matches!(
        bytes.get(end),
        None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')
    )
}

/// Offset just past the closing tag matching the opening tag at `open`.
///
/// Scans forward counting same-named opening and closing tags. When the
/// document ends first, the document length is returned and the caller
/// works with the truncated fragment.
pub fn block_end(doc: &str, open: usize) -> usize {
    let name = match tag_name_at(doc, open) {
        Some(name) => name,
        None => return doc.len(),
    };
    if VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name)) {
        return tag_end(doc, open);
    }

    let mut depth = 0usize;
    let mut cursor = open;
    while let Some(rel) = doc[cursor..].find('<') {
        let lt = cursor + rel;
        if tag_matches(doc, lt, name, true) {
            depth = depth.saturating_sub(1);
            let after = tag_end(doc, lt);
            if depth == 0 {
                return after;
            }
            cursor = after;
        } else if tag_matches(doc, lt, name, false) {
            let after = tag_end(doc, lt);
            if !doc[lt..after].ends_with("/>") {
                depth += 1;
            }
            cursor = after;
        } else {
            cursor = lt + 1;
        }
    }
    doc.len()
}

/// Start of the innermost unclosed opening tag before `pos`.
///
/// Walks backward, skipping elements that are opened and closed again
/// before `pos`. With `name` set, unclosed ancestors of other names are
/// passed over until one with that name is found. If `pos` lies inside an
/// opening tag, that tag is the innermost one.
pub fn enclosing_open_tag(doc: &str, pos: usize, name: Option<&str>) -> Option<usize> {
    let mut closed: Vec<&str> = Vec::new();
    let mut cursor = pos.min(doc.len());
    while let Some(lt) = doc[..cursor].rfind('<') {
        cursor = lt;
        let tag_name = match tag_name_at(doc, lt) {
            Some(n) => n,
            None => continue,
        };
        if is_closing_at(doc, lt) {
            closed.push(tag_name);
            continue;
        }
        let end = tag_end(doc, lt);
        if doc[lt..end].ends_with("/>")
            || VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag_name))
        {
            continue;
        }
        if closed
            .last()
            .is_some_and(|c| c.eq_ignore_ascii_case(tag_name))
        {
            closed.pop();
            continue;
        }
        if name.map_or(true, |n| n.eq_ignore_ascii_case(tag_name)) {
            return Some(lt);
        }
    }
    None
}

/// Start of the opening tag whose text contains `pos`, if any.
fn opening_tag_containing(doc: &str, pos: usize) -> Option<usize> {
    let lt = doc[..pos].rfind('<')?;
    if is_closing_at(doc, lt) || tag_name_at(doc, lt).is_none() {
        return None;
    }
    (tag_end(doc, lt) > pos).then_some(lt)
}

/// Whitespace-separated tokens of the `class` attribute of the tag text.
fn class_tokens(tag: &str) -> impl Iterator<Item = &str> {
    let mut value = "";
    let mut search = 0;
    while let Some(rel) = tag[search..].find("class=") {
        let at = search + rel;
        search = at + "class=".len();
        let boundary = tag[..at]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if !boundary {
            continue;
        }
        let rest = &tag[search..];
        if let Some(q) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
            let body = &rest[1..];
            value = body.find(q).map_or(body, |end| &body[..end]);
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            value = &rest[..end];
        }
        break;
    }
    value.split_whitespace()
}

/// All places where `marker` occurs on an opening tag, in document order.
pub fn find_markers(doc: &str, marker: Marker) -> Vec<MarkerMatch> {
    let mut matches = Vec::new();
    match marker {
        Marker::Attr(needle) => {
            for (pos, _) in doc.match_indices(needle) {
                if let Some(tag_start) = opening_tag_containing(doc, pos) {
                    matches.push(MarkerMatch {
                        anchor: pos,
                        tag_start,
                    });
                }
            }
        }
        Marker::Class(token) => {
            let mut last_tag = None;
            for (pos, _) in doc.match_indices(token) {
                let Some(tag_start) = opening_tag_containing(doc, pos) else {
                    continue;
                };
                if last_tag == Some(tag_start) {
                    continue;
                }
                let tag = &doc[tag_start..tag_end(doc, tag_start)];
                if class_tokens(tag).any(|t| t == token) {
                    last_tag = Some(tag_start);
                    matches.push(MarkerMatch {
                        anchor: pos,
                        tag_start,
                    });
                }
            }
        }
        Marker::Element(name) => {
            let needle = format!("<{}", name);
            for (pos, _) in doc.match_indices(needle.as_str()) {
                if tag_matches(doc, pos, name, false) {
                    matches.push(MarkerMatch {
                        anchor: pos,
                        tag_start: pos,
                    });
                }
            }
        }
    }
    matches
}

/// Span of the whole element whose opening tag starts at `tag_start`.
pub fn element_span(doc: &str, tag_start: usize) -> Range<usize> {
    tag_start..block_end(doc, tag_start)
}

/// First element inside `fragment` carrying `marker`.
pub fn inner_block(fragment: &str, marker: Marker) -> Option<&str> {
    let first = find_markers(fragment, marker).into_iter().next()?;
    Some(&fragment[element_span(fragment, first.tag_start)])
}

/// Remove every element carrying one of `markers`, including its content.
pub fn excise(fragment: &str, markers: &[Marker]) -> String {
    let mut spans: Vec<Range<usize>> = markers
        .iter()
        .flat_map(|m| find_markers(fragment, *m))
        .map(|m| element_span(fragment, m.tag_start))
        .collect();
    if spans.is_empty() {
        return fragment.to_string();
    }
    spans.sort_by_key(|s| s.start);

    let mut out = String::with_capacity(fragment.len());
    let mut cursor = 0;
    for span in spans {
        // Nested inside an element already removed
        if span.start < cursor {
            cursor = cursor.max(span.end);
            continue;
        }
        out.push_str(&fragment[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&fragment[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_end_skips_nested_same_name() {
        let doc = "<div a><div>inner</div><p>x</p></div>tail";
        let end = block_end(doc, 0);
        assert_eq!(&doc[..end], "<div a><div>inner</div><p>x</p></div>");
    }

    #[test]
    fn block_end_runs_to_document_end_when_unclosed() {
        let doc = "<section><div>never closed";
        assert_eq!(block_end(doc, 0), doc.len());
    }

    #[test]
    fn block_end_ignores_other_element_names() {
        let doc = "<li>one<img src=\"x\"/><ul><li>two</li></ul></li><li>three</li>";
        let end = block_end(doc, 0);
        assert_eq!(&doc[..end], "<li>one<img src=\"x\"/><ul><li>two</li></ul></li>");
    }

    #[test]
    fn block_end_does_not_confuse_prefixed_names() {
        let doc = "<p>a<pre>b</pre>c</p>";
        assert_eq!(block_end(doc, 0), doc.len());
    }

    #[test]
    fn tag_end_skips_quoted_angle_brackets() {
        let doc = r#"<div class="[&>p]:mt-0">x</div>"#;
        assert_eq!(&doc[..tag_end(doc, 0)], r#"<div class="[&>p]:mt-0">"#);
    }

    #[test]
    fn enclosing_open_tag_returns_owning_tag_for_attribute() {
        let doc = r#"<main><div data-role="user">hi</div></main>"#;
        let pos = doc.find("data-role").unwrap();
        assert_eq!(enclosing_open_tag(doc, pos, None), Some(6));
    }

    #[test]
    fn enclosing_open_tag_skips_closed_siblings() {
        let doc = "<article><div>one</div><span>two</span>HERE</article>";
        let pos = doc.find("HERE").unwrap();
        assert_eq!(enclosing_open_tag(doc, pos, None), Some(0));
        assert_eq!(enclosing_open_tag(doc, pos, Some("div")), None);
    }

    #[test]
    fn enclosing_open_tag_finds_named_ancestor() {
        let doc = "<section><div><p>x<br>HERE</p></div></section>";
        let pos = doc.find("HERE").unwrap();
        assert_eq!(enclosing_open_tag(doc, pos, Some("div")), Some(9));
        assert_eq!(enclosing_open_tag(doc, pos, Some("section")), Some(0));
    }

    #[test]
    fn class_marker_requires_whole_token() {
        let doc = r#"<div class="markdown-body">a</div><div class="prose markdown">b</div>"#;
        let found = find_markers(doc, Marker::Class("markdown"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag_start, doc.find("<div class=\"prose").unwrap());
    }

    #[test]
    fn attr_marker_outside_tag_is_ignored() {
        let doc = r#"<p>data-testid="user-message"</p><div data-testid="user-message">x</div>"#;
        let found = find_markers(doc, Marker::Attr(r#"data-testid="user-message""#));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag_start, doc.find("<div").unwrap());
    }

    #[test]
    fn element_marker_matches_exact_name() {
        let doc = "<user-query-content>a</user-query-content><user-query>b</user-query>";
        let found = find_markers(doc, Marker::Element("user-query"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag_start, doc.find("<user-query>").unwrap());
    }

    #[test]
    fn inner_block_isolates_marked_child() {
        let frag = r#"<div><div class="markdown prose"><p>Answer</p></div><button>Copy</button></div>"#;
        let inner = inner_block(frag, Marker::Class("markdown")).unwrap();
        assert_eq!(inner, r#"<div class="markdown prose"><p>Answer</p></div>"#);
    }

    #[test]
    fn excise_removes_marked_elements_and_nested_matches() {
        let frag = r#"<div>keep<div data-x="1">drop<div data-x="1">nested</div></div>also</div>"#;
        assert_eq!(
            excise(frag, &[Marker::Attr(r#"data-x="1""#)]),
            "<div>keepalso</div>"
        );
    }
}
