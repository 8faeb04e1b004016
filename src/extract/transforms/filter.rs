//! Length and noise filters.
//!
//! Interface chrome (button labels, status words) and near-empty fragments
//! left over from anchor false-positives are dropped here.

use super::Transform;
use crate::extract::types::{RenderedTurn, Speaker};

/// Drops turns shorter than the minimum for their speaker.
///
/// Length is counted in characters, so a turn of exactly the minimum
/// length is kept.
pub struct FilterShortTurns {
    min_user_len: usize,
    min_assistant_len: usize,
    dropped: usize,
}

impl FilterShortTurns {
    pub fn new(min_user_len: usize, min_assistant_len: usize) -> Self {
        Self {
            min_user_len,
            min_assistant_len,
            dropped: 0,
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn min_len(&self, speaker: Speaker) -> usize {
        match speaker {
            Speaker::User => self.min_user_len,
            Speaker::Assistant => self.min_assistant_len,
        }
    }
}

impl Transform for FilterShortTurns {
    fn transform(&mut self, turns: &mut Vec<RenderedTurn>) {
        let before = turns.len();
        turns.retain(|turn| turn.text.chars().count() >= self.min_len(turn.speaker));
        self.dropped += before - turns.len();
    }
}

/// Drops turns whose whole text is a known noise string.
pub struct FilterNoiseTurns<'a> {
    is_noise: Box<dyn Fn(&str) -> bool + 'a>,
    dropped: usize,
}

impl<'a> FilterNoiseTurns<'a> {
    pub fn new(is_noise: impl Fn(&str) -> bool + 'a) -> Self {
        Self {
            is_noise: Box::new(is_noise),
            dropped: 0,
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Transform for FilterNoiseTurns<'_> {
    fn transform(&mut self, turns: &mut Vec<RenderedTurn>) {
        let before = turns.len();
        turns.retain(|turn| !(self.is_noise)(turn.text.as_str()));
        self.dropped += before - turns.len();
    }
}
