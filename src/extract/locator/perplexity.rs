//! Perplexity share pages.
//!
//! Queries carry the `group/query` class; answers live in
//! `markdown-content-N` containers whose `prose` child holds the text.

use super::TurnLocator;
use crate::extract::profile::{ProviderProfile, PERPLEXITY};

#[derive(Debug, Clone, Copy, Default)]
pub struct PerplexityLocator;

impl TurnLocator for PerplexityLocator {
    fn profile(&self) -> &'static ProviderProfile {
        &PERPLEXITY
    }
}
