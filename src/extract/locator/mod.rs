//! Provider turn locators.
//!
//! Every provider implements [`TurnLocator`]: find candidate turns in a
//! document. The primary strategy is shared ([`anchored_candidates`]) and
//! driven by the provider's anchors. The fallback, for pages whose markup
//! carries no anchors at all, is picked by the profile's [`Fallback`].

mod chatgpt;
mod claude;
pub mod embedded;
mod gemini;
mod grok;
mod perplexity;

pub use chatgpt::ChatgptLocator;
pub use claude::ClaudeLocator;
pub use embedded::{graph_candidates, graph_payloads, sentinel_segments};
pub use gemini::GeminiLocator;
pub use grok::GrokLocator;
pub use perplexity::PerplexityLocator;

use super::block::{element_span, enclosing_open_tag, find_markers, inner_block};
use super::error::{ExtractError, ExtractResult};
use super::profile::{Anchor, Fallback, ProviderProfile};
use super::types::{CandidateTurn, Provider};

/// Finds candidate turns in a raw page snapshot.
pub trait TurnLocator: Send + Sync {
    /// Static configuration this locator works from.
    fn profile(&self) -> &'static ProviderProfile;

    /// Candidates from the primary (markup anchored) strategy.
    fn primary(&self, doc: &str) -> Vec<CandidateTurn> {
        anchored_candidates(doc, self.profile())
    }

    /// Candidates from the fallback strategy, if the provider has one.
    fn fallback(&self, doc: &str) -> Vec<CandidateTurn> {
        match self.profile().fallback {
            Fallback::None => Vec::new(),
            Fallback::ObjectGraph => graph_candidates(doc),
            Fallback::SentinelSplit { marker, sentinel } => sentinel_segments(doc, marker, sentinel),
        }
    }

    /// Run the primary strategy and, only when it yields nothing for the
    /// whole document, the fallback.
    fn locate(&self, doc: &str) -> ExtractResult<Vec<CandidateTurn>> {
        let provider = self.profile().provider;
        let primary = self.primary(doc);
        if !primary.is_empty() {
            tracing::debug!(%provider, candidates = primary.len(), "primary strategy located turns");
            return Ok(primary);
        }

        let fallback = self.fallback(doc);
        tracing::debug!(%provider, candidates = fallback.len(), "primary strategy empty, used fallback");
        if fallback.is_empty() {
            return Err(ExtractError::NoTurnsLocated { provider });
        }
        Ok(fallback)
    }
}

static CHATGPT: ChatgptLocator = ChatgptLocator;
static CLAUDE: ClaudeLocator = ClaudeLocator;
static GEMINI: GeminiLocator = GeminiLocator;
static GROK: GrokLocator = GrokLocator;
static PERPLEXITY: PerplexityLocator = PerplexityLocator;

/// Locator for a provider.
pub fn locator(provider: Provider) -> &'static dyn TurnLocator {
    match provider {
        Provider::Chatgpt => &CHATGPT,
        Provider::Claude => &CLAUDE,
        Provider::Gemini => &GEMINI,
        Provider::Grok => &GROK,
        Provider::Perplexity => &PERPLEXITY,
    }
}

/// Candidates from every anchor of the profile, one pass per anchor.
///
/// Passes run independently; ordering across passes is restored later by
/// the assembler using the anchor offsets.
pub fn anchored_candidates(doc: &str, profile: &ProviderProfile) -> Vec<CandidateTurn> {
    let mut candidates = Vec::new();
    for anchor in profile.anchors {
        let before = candidates.len();
        candidates.extend(anchor_pass(doc, profile, anchor));
        tracing::debug!(
            provider = %profile.provider,
            speaker = %anchor.speaker,
            found = candidates.len() - before,
            "anchor pass"
        );
    }
    candidates
}

fn anchor_pass<'a>(
    doc: &'a str,
    profile: &'a ProviderProfile,
    anchor: &'a Anchor,
) -> impl Iterator<Item = CandidateTurn> + 'a {
    find_markers(doc, anchor.marker)
        .into_iter()
        .filter_map(move |found| {
            let open = match anchor.container {
                None => found.tag_start,
                Some(name) => enclosing_open_tag(doc, found.anchor, Some(name))?,
            };
            let outer = &doc[element_span(doc, open)];
            let prose = profile
                .prose_marker(anchor.speaker)
                .and_then(|marker| inner_block(outer, marker))
                .unwrap_or(outer);
            Some(CandidateTurn::markup(found.anchor, anchor.speaker, prose))
        })
}
