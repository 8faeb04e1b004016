//! Turn assembly: candidate turns in, ordered messages out.
//!
//! Stages run in a fixed order:
//! 1. render each fragment to text (embedded-data text is taken as is)
//! 2. drop turns below the speaker's minimum length
//! 3. drop turns that are exactly a noise string
//! 4. stable-sort by document offset
//! 5. keep the first turn for each distinct text

use super::block::excise;
use super::config::ExtractOptions;
use super::error::{ExtractError, ExtractResult};
use super::profile::ProviderProfile;
use super::render::markup_to_text;
use super::transforms::{DedupeTurns, FilterNoiseTurns, FilterShortTurns, SortByOffset, Transform};
use super::types::{CandidateTurn, Fragment, Message, RenderedTurn};

/// Render one candidate with the profile's interface blocks removed.
pub fn render_candidate(profile: &ProviderProfile, candidate: CandidateTurn) -> RenderedTurn {
    let text = match candidate.fragment {
        Fragment::Markup(markup) if profile.excise.is_empty() => markup_to_text(&markup),
        Fragment::Markup(markup) => markup_to_text(&excise(&markup, profile.excise)),
        Fragment::Text(text) => text.trim().to_string(),
    };
    RenderedTurn {
        offset: candidate.offset,
        speaker: candidate.speaker,
        text,
    }
}

/// Turn located candidates into the final message sequence.
pub fn assemble(
    profile: &ProviderProfile,
    options: &ExtractOptions,
    candidates: Vec<CandidateTurn>,
) -> ExtractResult<Vec<Message>> {
    let candidate_count = candidates.len();
    let mut turns: Vec<RenderedTurn> = candidates
        .into_iter()
        .map(|c| render_candidate(profile, c))
        .collect();

    let mut short = FilterShortTurns::new(
        options.min_user_len.unwrap_or(profile.min_user_len),
        options.min_assistant_len.unwrap_or(profile.min_assistant_len),
    );
    short.transform(&mut turns);

    let mut noise = FilterNoiseTurns::new(|text: &str| {
        profile.is_noise(text) || options.extra_noise.iter().any(|n| n == text)
    });
    noise.transform(&mut turns);

    SortByOffset.transform(&mut turns);

    let mut dedupe = DedupeTurns::new();
    dedupe.transform(&mut turns);

    tracing::debug!(
        provider = %profile.provider,
        candidates = candidate_count,
        too_short = short.dropped(),
        noise = noise.dropped(),
        duplicates = dedupe.deduped_count(),
        kept = turns.len(),
        "assembled turns"
    );

    if turns.is_empty() {
        return Err(ExtractError::AllTurnsEmptyAfterCleaning {
            provider: profile.provider,
            candidates: candidate_count,
        });
    }
    Ok(turns.into_iter().map(Message::from).collect())
}
