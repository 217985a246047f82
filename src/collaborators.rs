//! Contracts for the external collaborators.
//!
//! Move generation and field generation are not part of the engine; they are
//! opaque services consulted over these narrow async traits. Failure handling
//! inside a collaborator is the collaborator's responsibility; errors
//! surface at the session boundary without touching game state.

use crate::game::{CellId, Difficulty, Field};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A move computed by a collaborator: the letter it places and the word it
/// traces through that letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The letter placed by the move.
    pub letter: char,
    /// The cell receiving the letter.
    pub cell: CellId,
    /// The traced word, including the new letter.
    pub word: String,
    /// Cells of the traced word, parallel to `word`.
    pub path: Vec<CellId>,
}

/// Computes moves over the current field.
///
/// The same contract serves the computer's turn and the hint feature; only
/// the merge handler differs.
#[async_trait::async_trait]
pub trait MoveProvider: Send + Sync {
    /// Requests a move for the given field, consumed-word history, and
    /// difficulty.
    async fn request_move(
        &self,
        field: &Field,
        words_used: &[String],
        difficulty: Difficulty,
    ) -> Result<MoveOutcome>;
}

/// Generates fresh starting grids.
#[async_trait::async_trait]
pub trait FieldProvider: Send + Sync {
    /// Requests a `size × size` grid containing one seed word readable along
    /// its center row.
    async fn request_field(&self, size: usize) -> Result<Field>;
}
