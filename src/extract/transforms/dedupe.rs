//! Ordering and duplicate removal.
//!
//! Locator passes run per speaker and some pages embed the conversation
//! twice, so the same turn can arrive more than once and out of order.

use std::collections::HashSet;

use super::Transform;
use crate::extract::types::RenderedTurn;

/// Stable sort by document offset.
pub struct SortByOffset;

impl Transform for SortByOffset {
    fn transform(&mut self, turns: &mut Vec<RenderedTurn>) {
        turns.sort_by_key(|turn| turn.offset);
    }
}

/// Keeps only the first turn for each distinct text.
///
/// Runs after [`SortByOffset`], so the surviving copy is the one earliest
/// in the document. The seen-set lives in the transform, one per parse.
#[derive(Default)]
pub struct DedupeTurns {
    seen: HashSet<String>,
    deduped_count: usize,
}

impl DedupeTurns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deduped_count(&self) -> usize {
        self.deduped_count
    }
}

impl Transform for DedupeTurns {
    fn transform(&mut self, turns: &mut Vec<RenderedTurn>) {
        let before = turns.len();
        turns.retain(|turn| self.seen.insert(turn.text.clone()));
        self.deduped_count += before - turns.len();
    }
}
