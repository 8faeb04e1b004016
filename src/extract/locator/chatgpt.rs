//! ChatGPT share pages.
//!
//! Rendered turns carry `data-message-author-role`. Pages snapshotted
//! before hydration finished only have the turbo-stream payload, which the
//! profile's object-graph fallback decodes.

use super::TurnLocator;
use crate::extract::profile::{ProviderProfile, CHATGPT};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChatgptLocator;

impl TurnLocator for ChatgptLocator {
    fn profile(&self) -> &'static ProviderProfile {
        &CHATGPT
    }
}
