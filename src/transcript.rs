//! Markdown transcript rendering.
//!
//! Each turn becomes its own section, preceded by a short quote of the
//! turns before it so a section can be read on its own.

use serde::{Deserialize, Serialize};

use crate::extract::{Message, Speaker};

const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// How much preceding conversation to quote above each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptOptions {
    /// Number of previous messages quoted
    pub context_window: usize,
    /// Characters kept from each quoted message
    pub context_chars: usize,
}

impl Default for TranscriptOptions {
    fn default() -> Self {
        Self {
            context_window: 2,
            context_chars: 300,
        }
    }
}

fn heading(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "👤 User",
        Speaker::Assistant => "🤖 Assistant",
    }
}

/// First `max_chars` characters of `text`, with `...` when cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render messages as a markdown transcript.
pub fn to_transcript(messages: &[Message], options: &TranscriptOptions) -> String {
    let mut sections = Vec::with_capacity(messages.len());

    for (i, message) in messages.iter().enumerate() {
        let mut section = format!("## {} (Turn {})\n\n", heading(message.role), i + 1);

        let first = i.saturating_sub(options.context_window);
        let context = &messages[first..i];
        if !context.is_empty() {
            section.push_str("**Previous context:**\n");
            for previous in context {
                section.push_str(&format!(
                    "> **{}:** {}\n",
                    previous.role.label(),
                    truncate_chars(&previous.text, options.context_chars)
                ));
            }
        }

        section.push_str(&message.text);
        sections.push(section);
    }

    sections.join(SECTION_SEPARATOR)
}
