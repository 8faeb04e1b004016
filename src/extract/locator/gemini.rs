//! Gemini share pages.
//!
//! Turns are custom elements: `<user-query>` for prompts and
//! `<model-response>` for answers. The model response is taken whole,
//! which is why the profile asks for a longer minimum on assistant turns.

use super::TurnLocator;
use crate::extract::profile::{ProviderProfile, GEMINI};

#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiLocator;

impl TurnLocator for GeminiLocator {
    fn profile(&self) -> &'static ProviderProfile {
        &GEMINI
    }
}
