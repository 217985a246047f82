//! Session settings: user-configurable defaults for a new game.

use crate::game::Difficulty;
use tracing::instrument;

/// Default grid dimension for a fresh session.
pub const DEFAULT_FIELD_SIZE: usize = 5;

/// User-configurable settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Grid dimension requested from the field generator.
    pub field_size: usize,
    /// Opponent difficulty forwarded to the move collaborator.
    pub difficulty: Difficulty,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            difficulty: Difficulty::default(),
        }
    }
}

impl GameSettings {
    /// Creates a new `GameSettings` with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}
