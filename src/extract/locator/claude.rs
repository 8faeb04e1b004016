//! Claude share pages.
//!
//! User turns are marked with `data-testid="user-message"`. Assistant turns
//! are the containers whose `data-is-streaming` flag reads `false`, which
//! excludes a response still being streamed when the snapshot was taken.

use super::TurnLocator;
use crate::extract::profile::{ProviderProfile, CLAUDE};

#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeLocator;

impl TurnLocator for ClaudeLocator {
    fn profile(&self) -> &'static ProviderProfile {
        &CLAUDE
    }
}
