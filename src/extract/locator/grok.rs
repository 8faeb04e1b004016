//! Grok share pages.
//!
//! Each turn is a row tagged `message-user` or `message-assistant`; the
//! readable text sits in the row's `message-bubble`, next to the action
//! toolbar. Unrendered pages still carry the transcript as one string
//! with turns joined by `∞`.

use super::TurnLocator;
use crate::extract::profile::{ProviderProfile, GROK};

#[derive(Debug, Clone, Copy, Default)]
pub struct GrokLocator;

impl TurnLocator for GrokLocator {
    fn profile(&self) -> &'static ProviderProfile {
        &GROK
    }
}
