//! chatshare - recover conversations from shared AI-chat pages
//!
//! Parses the saved markup of a ChatGPT, Claude, Gemini, Grok or
//! Perplexity share page into an ordered list of user and assistant turns.

pub mod cli;
pub mod config;
pub mod extract;
pub mod platform;
pub mod transcript;

pub use config::Config;
pub use extract::{extract, ExtractError, ExtractOptions, Extractor, Message, Provider, Speaker};
pub use transcript::{to_transcript, TranscriptOptions};
