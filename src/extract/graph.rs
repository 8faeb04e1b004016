//! Decoder for back-referencing flat object graphs.
//!
//! ChatGPT share pages hydrate from a turbo-stream payload: one JSON array
//! in which every value is stored once and referenced by index. Objects use
//! interned keys (`"_12"` means "the key is the string at index 12") and
//! integer values are references to other array slots. Negative integers
//! encode `undefined`/`null`/`NaN` and resolve to nothing.
//!
//! Resolution never fails. Out-of-range, negative, or mistyped references
//! contribute nothing, and traversal of nested arrays is bounded so a
//! self-referencing payload still terminates.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::types::Speaker;

/// Maximum nesting followed when collecting text parts.
const MAX_PART_DEPTH: usize = 8;
/// Maximum values visited for one message's parts.
const MAX_PART_VISITS: usize = 10_000;

static INVISIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{200B}-\u{200D}\u{2060}\u{FEFF}\u{E000}-\u{F8FF}]").unwrap());
static ENTITY_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"entity\[((?:"(?:[^"\\]|\\.)*"\s*,?\s*)+)\]"#).unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).unwrap());
static DIRECTIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:cite|filecite|navlist|image_group|video)(?:turn\d+[a-z]+\d+)+|:contentReference\[oaicite:\d+\]\{index=\d+\}",
    )
    .unwrap()
});
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*){2,}").unwrap());

/// Traversal state while collecting one message's parts.
struct PartWalk {
    /// Slot indices on the current descent path
    path: Vec<i64>,
    budget: usize,
    text: String,
}

/// Flat array with index-based references.
pub struct ObjectGraph<'a> {
    slots: &'a [Value],
}

impl<'a> ObjectGraph<'a> {
    pub fn new(slots: &'a [Value]) -> Self {
        Self { slots }
    }

    /// Value stored at `index`, if it exists.
    pub fn slot(&self, index: i64) -> Option<&'a Value> {
        usize::try_from(index).ok().and_then(|i| self.slots.get(i))
    }

    /// Follow a reference: integers index the array, anything else is
    /// already a literal.
    pub fn deref(&self, value: &'a Value) -> Option<&'a Value> {
        match value {
            Value::Number(n) => n.as_i64().and_then(|i| self.slot(i)),
            Value::Null => None,
            other => Some(other),
        }
    }

    /// Name of an object key, resolving interned `_N` keys.
    fn key_name(&self, key: &'a str) -> Option<&'a str> {
        match key.strip_prefix('_').and_then(|n| n.parse::<i64>().ok()) {
            Some(index) => self.slot(index).and_then(Value::as_str),
            None => Some(key),
        }
    }

    /// Raw (unresolved) value of the field called `name`.
    pub fn raw_field(&self, object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
        object
            .iter()
            .find(|(key, _)| self.key_name(key) == Some(name))
            .map(|(_, value)| value)
    }

    /// Resolved value of the field called `name`.
    pub fn field(&self, object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
        self.raw_field(object, name).and_then(|v| self.deref(v))
    }

    /// Resolve a chain of field names starting from `object`.
    pub fn path(&self, object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
        let (first, rest) = names.split_first()?;
        let mut current = self.field(object, first)?;
        for name in rest {
            current = self.field(current.as_object()?, name)?;
        }
        Some(current)
    }

    /// True for objects carrying `message` and `parent` references.
    fn is_message_wrapper(&self, object: &Map<String, Value>) -> bool {
        let is_ref = |v: Option<&Value>| v.is_some_and(Value::is_i64);
        is_ref(self.raw_field(object, "message")) && is_ref(self.raw_field(object, "parent"))
    }

    /// Concatenate every string reachable from a `parts` value.
    ///
    /// A slot may be referenced any number of times; only a reference back
    /// to a slot on the current descent path is skipped.
    fn collect_parts(&self, value: &'a Value, depth: usize, walk: &mut PartWalk) {
        if depth > MAX_PART_DEPTH || walk.budget == 0 {
            return;
        }
        walk.budget -= 1;
        match value {
            Value::String(s) => walk.text.push_str(s),
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Number(n) => {
                            let Some(index) = n.as_i64() else { continue };
                            if walk.path.contains(&index) {
                                continue;
                            }
                            if let Some(target) = self.slot(index) {
                                walk.path.push(index);
                                self.collect_parts(target, depth + 1, walk);
                                walk.path.pop();
                            }
                        }
                        other => self.collect_parts(other, depth + 1, walk),
                    }
                }
            }
            _ => {}
        }
    }

    /// Text of a message's `content.parts`.
    fn message_text(&self, message: &'a Map<String, Value>) -> String {
        let Some(content) = self.field(message, "content").and_then(Value::as_object) else {
            return String::new();
        };
        let Some(raw) = self.raw_field(content, "parts") else {
            return String::new();
        };
        let mut walk = PartWalk {
            path: raw.as_i64().into_iter().collect(),
            budget: MAX_PART_VISITS,
            text: String::new(),
        };
        if let Some(parts) = self.deref(raw) {
            self.collect_parts(parts, 0, &mut walk);
        }
        walk.text
    }

    /// Role and raw text of every message wrapper, in array order.
    ///
    /// Returns `(slot index, speaker, text)`; wrappers with other roles are
    /// skipped. Text is not cleaned.
    pub fn messages(&self) -> Vec<(usize, Speaker, String)> {
        let mut out = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(wrapper) = slot.as_object() else {
                continue;
            };
            if !self.is_message_wrapper(wrapper) {
                continue;
            }
            let Some(message) = self.field(wrapper, "message").and_then(Value::as_object) else {
                continue;
            };
            let role = self
                .path(message, &["author", "role"])
                .and_then(Value::as_str)
                .unwrap_or_default();
            let Some(speaker) = Speaker::from_role(role) else {
                continue;
            };

            out.push((index, speaker, self.message_text(message)));
        }
        out
    }
}

/// Decode `(speaker, cleaned text)` pairs from a flat graph array.
pub fn decode_graph(slots: &[Value]) -> Vec<(Speaker, String)> {
    ObjectGraph::new(slots)
        .messages()
        .into_iter()
        .map(|(_, speaker, text)| (speaker, clean_graph_text(&text)))
        .collect()
}

/// Strip ChatGPT-specific markup from message text.
///
/// Removes private-use and zero-width marker characters, reduces entity
/// annotations like `entity["people","Curie","Marie Curie"]` to their last
/// quoted segment, drops citation directives and collapses blank lines.
pub fn clean_graph_text(text: &str) -> String {
    let text = INVISIBLE.replace_all(text, "");
    let text = ENTITY_ANNOTATION.replace_all(&text, |caps: &regex::Captures| {
        QUOTED
            .captures_iter(&caps[1])
            .last()
            .map(|q| q[1].replace("\\\"", "\""))
            .unwrap_or_default()
    });
    let text = DIRECTIVES.replace_all(&text, "");
    BLANK_RUNS.replace_all(&text, "\n\n").trim().to_string()
}
