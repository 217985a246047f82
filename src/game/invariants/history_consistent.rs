//! History invariant: attributed words are part of the shared history.

use super::Invariant;
use crate::game::state::GameState;
use crate::game::types::Player;

/// Invariant: every word attributed to a player appears in the shared
/// used-word history. The history may additionally hold seed words from
/// generated fields, attributed to nobody.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .words_by(Player::User)
            .iter()
            .chain(state.words_by(Player::Computer))
            .all(|word| state.words_used().iter().any(|used| used == word))
    }

    fn description() -> &'static str {
        "Every word attributed to a player appears in the used-word history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;

    #[test]
    fn test_commits_and_seeds_hold() {
        let mut state = GameState::with_settings(&GameSettings::default());
        state.seed_used_word("БАЛДА");
        state.commit_word("АД", Player::User);
        state.commit_word("ДАР", Player::Computer);

        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missing_history_entry_violates() {
        let mut state = GameState::with_settings(&GameSettings::default());
        state.commit_word("АД", Player::User);
        state.strike_used_word("АД");

        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
