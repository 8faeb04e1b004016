//! Static per-provider configuration.
//!
//! Signatures come from the server-rendered markup of each service's
//! shared-conversation page. When a provider changes its markup, this is
//! the only file that should need to change.

use super::block::Marker;
use super::types::{Provider, Speaker};

/// A structural signature that starts one locator pass.
#[derive(Debug, Clone, Copy)]
pub struct Anchor {
    pub marker: Marker,
    pub speaker: Speaker,
    /// Element name to climb to from the marker. `None` uses the tag that
    /// carries the marker.
    pub container: Option<&'static str>,
}

/// Narrower block holding only the prose of a turn.
#[derive(Debug, Clone, Copy)]
pub struct ProseBlock {
    pub speaker: Speaker,
    pub marker: Marker,
}

/// Strategy tried when the primary anchors find nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    None,
    /// Turbo-stream object graph inside `streamController.enqueue("...")`.
    ObjectGraph,
    /// A JSON string value following `marker`, holding alternating
    /// user/assistant segments separated by `sentinel`.
    SentinelSplit {
        marker: &'static str,
        sentinel: &'static str,
    },
}

impl Fallback {
    pub fn name(&self) -> &'static str {
        match self {
            Fallback::None => "none",
            Fallback::ObjectGraph => "object-graph",
            Fallback::SentinelSplit { .. } => "sentinel-split",
        }
    }
}

/// Everything the engine needs to know about one provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderProfile {
    pub provider: Provider,
    pub anchors: &'static [Anchor],
    pub prose: &'static [ProseBlock],
    pub excise: &'static [Marker],
    pub fallback: Fallback,
    pub noise: &'static [&'static str],
    pub min_user_len: usize,
    pub min_assistant_len: usize,
}

impl ProviderProfile {
    pub fn prose_marker(&self, speaker: Speaker) -> Option<Marker> {
        self.prose
            .iter()
            .find(|p| p.speaker == speaker)
            .map(|p| p.marker)
    }

    pub fn min_len(&self, speaker: Speaker) -> usize {
        match speaker {
            Speaker::User => self.min_user_len,
            Speaker::Assistant => self.min_assistant_len,
        }
    }

    pub fn is_noise(&self, text: &str) -> bool {
        COMMON_NOISE.contains(&text) || self.noise.contains(&text)
    }
}

/// Button labels and status words shared by most chat UIs.
pub const COMMON_NOISE: &[&str] = &[
    "Copy",
    "Copied",
    "Copy code",
    "Edit",
    "Retry",
    "Share",
    "Done",
    "Regenerate",
    "Good response",
    "Bad response",
    "Read aloud",
];

pub static CHATGPT: ProviderProfile = ProviderProfile {
    provider: Provider::Chatgpt,
    anchors: &[
        Anchor {
            marker: Marker::Attr(r#"data-message-author-role="user""#),
            speaker: Speaker::User,
            container: None,
        },
        Anchor {
            marker: Marker::Attr(r#"data-message-author-role="assistant""#),
            speaker: Speaker::Assistant,
            container: None,
        },
    ],
    prose: &[
        ProseBlock {
            speaker: Speaker::User,
            marker: Marker::Class("whitespace-pre-wrap"),
        },
        ProseBlock {
            speaker: Speaker::Assistant,
            marker: Marker::Class("markdown"),
        },
    ],
    excise: &[Marker::Class("sr-only")],
    fallback: Fallback::ObjectGraph,
    noise: &["You said:", "ChatGPT said:", "Thought for a few seconds", "Searched the web"],
    min_user_len: 2,
    min_assistant_len: 2,
};

pub static CLAUDE: ProviderProfile = ProviderProfile {
    provider: Provider::Claude,
    anchors: &[
        Anchor {
            marker: Marker::Attr(r#"data-testid="user-message""#),
            speaker: Speaker::User,
            container: None,
        },
        Anchor {
            marker: Marker::Attr(r#"data-is-streaming="false""#),
            speaker: Speaker::Assistant,
            container: None,
        },
    ],
    prose: &[ProseBlock {
        speaker: Speaker::Assistant,
        marker: Marker::Class("font-claude-response"),
    }],
    excise: &[
        Marker::Attr(r#"data-testid="file-thumbnail""#),
        Marker::Attr(r#"data-testid="tool-use-block""#),
    ],
    fallback: Fallback::None,
    noise: &["Claude", "Claude can make mistakes. Please double-check responses."],
    min_user_len: 2,
    min_assistant_len: 2,
};

pub static GEMINI: ProviderProfile = ProviderProfile {
    provider: Provider::Gemini,
    anchors: &[
        Anchor {
            marker: Marker::Element("user-query"),
            speaker: Speaker::User,
            container: None,
        },
        Anchor {
            marker: Marker::Element("model-response"),
            speaker: Speaker::Assistant,
            container: None,
        },
    ],
    prose: &[ProseBlock {
        speaker: Speaker::User,
        marker: Marker::Class("query-text"),
    }],
    excise: &[
        Marker::Attr(r#"data-test-id="thoughts""#),
        Marker::Class("response-footer"),
    ],
    fallback: Fallback::None,
    noise: &["Show drafts", "Show thinking", "Gemini", "You said", "Gemini said"],
    min_user_len: 2,
    // The whole model-response block is taken, so short matches are
    // almost always stray chrome rather than answers.
    min_assistant_len: 10,
};

pub static GROK: ProviderProfile = ProviderProfile {
    provider: Provider::Grok,
    anchors: &[
        Anchor {
            marker: Marker::Class("message-user"),
            speaker: Speaker::User,
            container: None,
        },
        Anchor {
            marker: Marker::Class("message-assistant"),
            speaker: Speaker::Assistant,
            container: None,
        },
    ],
    prose: &[
        ProseBlock {
            speaker: Speaker::User,
            marker: Marker::Class("message-bubble"),
        },
        ProseBlock {
            speaker: Speaker::Assistant,
            marker: Marker::Class("message-bubble"),
        },
    ],
    excise: &[Marker::Attr(r#"data-testid="attachment-thumbnail""#)],
    fallback: Fallback::SentinelSplit {
        marker: r#""conversationText":"#,
        sentinel: "\u{221E}",
    },
    noise: &["Grok", "Thinking", "DeepSearch"],
    min_user_len: 2,
    min_assistant_len: 2,
};

pub static PERPLEXITY: ProviderProfile = ProviderProfile {
    provider: Provider::Perplexity,
    anchors: &[
        Anchor {
            marker: Marker::Class("group/query"),
            speaker: Speaker::User,
            container: None,
        },
        Anchor {
            marker: Marker::Attr(r#"id="markdown-content-"#),
            speaker: Speaker::Assistant,
            container: None,
        },
    ],
    prose: &[ProseBlock {
        speaker: Speaker::Assistant,
        marker: Marker::Class("prose"),
    }],
    excise: &[Marker::Class("citation")],
    fallback: Fallback::None,
    noise: &["Sources", "Answer", "Related", "Rewrite", "Perplexity"],
    min_user_len: 2,
    min_assistant_len: 2,
};

impl Provider {
    /// Static profile for this provider.
    pub fn profile(&self) -> &'static ProviderProfile {
        match self {
            Provider::Chatgpt => &CHATGPT,
            Provider::Claude => &CLAUDE,
            Provider::Gemini => &GEMINI,
            Provider::Grok => &GROK,
            Provider::Perplexity => &PERPLEXITY,
        }
    }
}
