//! Score invariant: scores track committed word lengths.

use super::Invariant;
use crate::game::state::GameState;
use crate::game::types::Player;

/// Invariant: each player's score equals the summed letter counts of the
/// words committed for that player.
pub struct ScoreConsistentInvariant;

fn letter_count(words: &[String]) -> usize {
    words.iter().map(|word| word.chars().count()).sum()
}

impl Invariant<GameState> for ScoreConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.score_of(Player::User) == letter_count(state.words_by(Player::User))
            && state.score_of(Player::Computer) == letter_count(state.words_by(Player::Computer))
    }

    fn description() -> &'static str {
        "Each player's score equals the letter count of their committed words"
    }
}
