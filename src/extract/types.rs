//! Data structures shared by the locators and the assembler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the conversation a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Map a role name found in embedded page data.
    ///
    /// Anything other than the two conversational roles (system, tool, ...)
    /// yields `None` and the turn is discarded.
    pub fn from_role(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Speaker::User),
            "assistant" => Some(Speaker::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "assistant",
        }
    }

    /// Human-readable label used in transcripts.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat service whose shared-conversation page is being parsed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Chatgpt,
    Claude,
    Gemini,
    Grok,
    Perplexity,
}

impl Provider {
    pub const ALL: [Provider; 5] = [
        Provider::Chatgpt,
        Provider::Claude,
        Provider::Gemini,
        Provider::Grok,
        Provider::Perplexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Chatgpt => "chatgpt",
            Provider::Claude => "claude",
            Provider::Gemini => "gemini",
            Provider::Grok => "grok",
            Provider::Perplexity => "perplexity",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a provider name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown provider '{0}' (expected one of: chatgpt, claude, gemini, grok, perplexity)")]
pub struct ProviderParseError(pub String);

impl FromStr for Provider {
    type Err = ProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| ProviderParseError(s.to_string()))
    }
}

/// Raw content captured for one candidate turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Markup that still needs to go through the text renderer.
    Markup(String),
    /// Text recovered from embedded data; already cleaned.
    Text(String),
}

/// A turn found by a locator, before cleaning and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTurn {
    /// Position in the original document where the anchor was found.
    pub offset: usize,
    pub speaker: Speaker,
    pub fragment: Fragment,
}

impl CandidateTurn {
    pub fn markup(offset: usize, speaker: Speaker, markup: impl Into<String>) -> Self {
        Self {
            offset,
            speaker,
            fragment: Fragment::Markup(markup.into()),
        }
    }

    pub fn text(offset: usize, speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            offset,
            speaker,
            fragment: Fragment::Text(text.into()),
        }
    }
}

/// A candidate after rendering, as seen by the assembly stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTurn {
    pub offset: usize,
    pub speaker: Speaker,
    pub text: String,
}

impl From<RenderedTurn> for Message {
    fn from(turn: RenderedTurn) -> Self {
        Message::new(turn.speaker, turn.text)
    }
}

/// One cleaned conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Speaker,
    pub text: String,
}

impl Message {
    pub fn new(role: Speaker, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }
}
