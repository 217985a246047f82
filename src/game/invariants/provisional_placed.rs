//! Provisional-letter invariant: the record matches the grid.

use super::Invariant;
use crate::game::state::GameState;
use crate::game::types::Cell;

/// Invariant: a recorded provisional letter is present, uppercase, at its
/// field cell. At most one provisional letter exists, which the aggregate
/// guarantees structurally.
pub struct ProvisionalPlacedInvariant;

impl Invariant<GameState> for ProvisionalPlacedInvariant {
    fn holds(state: &GameState) -> bool {
        match state.provisional() {
            Some(letter) => {
                state.field().get(letter.cell()) == Some(Cell::Letter(letter.letter()))
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "The provisional letter record matches the letter on the grid"
    }
}
