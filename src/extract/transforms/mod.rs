//! Assembly stages applied to rendered turns.
//!
//! Each stage is a [`Transform`] that edits the turn list in place. The
//! assembler chains them in a fixed order: length filter, noise filter,
//! offset sort, then text deduplication.

mod dedupe;
mod filter;

pub use dedupe::{DedupeTurns, SortByOffset};
pub use filter::{FilterNoiseTurns, FilterShortTurns};

use super::types::RenderedTurn;

/// One in-place pass over the rendered turns.
pub trait Transform {
    fn transform(&mut self, turns: &mut Vec<RenderedTurn>);
}
