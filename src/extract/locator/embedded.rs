//! Fallback strategies that read data embedded in the page instead of
//! rendered markup.
//!
//! Used when a snapshot was taken before the client finished rendering
//! turns: the hydration payload is usually already present.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::extract::graph::{clean_graph_text, ObjectGraph};
use crate::extract::types::{CandidateTurn, Speaker};

static ENQUEUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"streamController\.enqueue\(\s*"((?:[^"\\]|\\.)*)"\s*\)"#).unwrap()
});
static PROMISE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^P\d+:").unwrap());

/// Every decodable object-graph array passed to `streamController.enqueue`.
///
/// Returns the document offset of each array (inside its string literal)
/// together with the parsed slots. Literals or lines that do not decode
/// are skipped.
pub fn graph_payloads(doc: &str) -> Vec<(usize, Vec<Value>)> {
    let mut payloads = Vec::new();
    for caps in ENQUEUE.captures_iter(doc) {
        let Some(literal) = caps.get(1) else { continue };
        let decoded: String = match serde_json::from_str(&format!("\"{}\"", literal.as_str())) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(offset = literal.start(), error = %e, "skipping undecodable enqueue payload");
                continue;
            }
        };

        let mut line_start = 0;
        for line in decoded.split('\n') {
            let body = PROMISE_PREFIX.replace(line, "");
            if body.starts_with('[') {
                match serde_json::from_str::<Vec<Value>>(&body) {
                    Ok(slots) => payloads.push((literal.start() + line_start, slots)),
                    Err(e) => tracing::debug!(error = %e, "skipping non-array payload line"),
                }
            }
            line_start += line.len() + 1;
        }
    }
    payloads
}

/// Candidates decoded from every object-graph payload in the document.
///
/// A page usually embeds the conversation more than once; the copies are
/// all returned and collapsed later by the assembler.
pub fn graph_candidates(doc: &str) -> Vec<CandidateTurn> {
    let mut candidates = Vec::new();
    for (offset, slots) in graph_payloads(doc) {
        let graph = ObjectGraph::new(&slots);
        for (index, speaker, text) in graph.messages() {
            candidates.push(CandidateTurn::text(
                offset + index,
                speaker,
                clean_graph_text(&text),
            ));
        }
    }
    candidates
}

/// Split every JSON string following `marker` on `sentinel`.
///
/// Segments alternate user, assistant, user, ... starting with the user.
/// Empty segments keep their slot in the alternation and are dropped later
/// by the length filter.
pub fn sentinel_segments(doc: &str, marker: &str, sentinel: &str) -> Vec<CandidateTurn> {
    let mut candidates = Vec::new();
    for (pos, _) in doc.match_indices(marker) {
        let start = pos + marker.len();
        let blob = match serde_json::Deserializer::from_str(&doc[start..])
            .into_iter::<String>()
            .next()
        {
            Some(Ok(blob)) => blob,
            Some(Err(e)) => {
                tracing::warn!(offset = start, error = %e, "skipping undecodable transcript blob");
                continue;
            }
            None => continue,
        };

        let mut segment_start = 0;
        for (i, segment) in blob.split(sentinel).enumerate() {
            let speaker = if i % 2 == 0 {
                Speaker::User
            } else {
                Speaker::Assistant
            };
            candidates.push(CandidateTurn::text(
                start + segment_start,
                speaker,
                segment.trim(),
            ));
            segment_start += segment.len() + sentinel.len();
        }
    }
    candidates
}
