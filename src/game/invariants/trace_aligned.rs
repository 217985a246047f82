//! Trace invariant: an in-progress trace records one cell per letter.

use super::Invariant;
use crate::game::state::GameState;

/// Invariant: while a word is being traced, `word` and `word_path` have equal
/// length.
///
/// Outside an in-progress trace the path may legitimately outlive the word:
/// after a commit it is kept as the last committed path for display.
pub struct TraceAlignedInvariant;

impl Invariant<GameState> for TraceAlignedInvariant {
    fn holds(state: &GameState) -> bool {
        state.provisional().is_none()
            || state.word().is_empty()
            || state.word().len() == state.word_path().len()
    }

    fn description() -> &'static str {
        "An in-progress trace records one cell per letter"
    }
}
