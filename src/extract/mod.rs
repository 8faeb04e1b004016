//! Conversation-turn extraction from shared AI-chat pages.
//!
//! Takes the raw markup snapshot of a shared conversation and recovers the
//! ordered list of `{role, text}` turns. No DOM is built: locators work on
//! byte offsets and nesting depth only, which keeps parsing tolerant of the
//! truncated or half-hydrated snapshots that page captures often produce.
//!
//! # Pipeline
//!
//! ```text
//! document -> locator (primary, else fallback) -> candidate turns
//!          -> render -> length filter -> noise filter -> sort -> dedupe
//!          -> messages
//! ```
//!
//! # Module Structure
//!
//! - [`block`] - element span matching (tag-block matcher, backward search)
//! - [`render`] - markup to plain text
//! - [`graph`] - back-referencing object graph decoder
//! - [`locator`] - one locator per provider
//! - [`profile`] - static provider configuration
//! - [`transforms`] - assembly stages
//! - [`assemble`] - the turn assembler
//!
//! Parsing is synchronous and self-contained; every call owns its own
//! dedup state, so separate documents can be parsed concurrently.

pub mod assemble;
pub mod block;
mod config;
mod error;
pub mod graph;
pub mod locator;
pub mod profile;
pub mod render;
pub mod transforms;
mod types;

pub use assemble::assemble;
pub use config::ExtractOptions;
pub use error::{ExtractError, ExtractResult};
pub use graph::{clean_graph_text, decode_graph, ObjectGraph};
pub use locator::{locator, TurnLocator};
pub use profile::ProviderProfile;
pub use render::{decode_entities, markup_to_text, normalize_whitespace};
pub use types::{
    CandidateTurn, Fragment, Message, Provider, ProviderParseError, RenderedTurn, Speaker,
};

/// Candidate turns for `doc`, from the primary strategy or the fallback.
pub fn locate(provider: Provider, doc: &str) -> ExtractResult<Vec<CandidateTurn>> {
    locator(provider).locate(doc)
}

/// Extract the ordered message sequence with default options.
pub fn extract(provider: Provider, doc: &str) -> ExtractResult<Vec<Message>> {
    Extractor::new(provider).extract(doc)
}

/// Extraction run for one provider, with optional overrides.
#[derive(Debug, Clone)]
pub struct Extractor {
    provider: Provider,
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn extract(&self, doc: &str) -> ExtractResult<Vec<Message>> {
        let candidates = locate(self.provider, doc)?;
        assemble(self.provider.profile(), &self.options, candidates)
    }
}
