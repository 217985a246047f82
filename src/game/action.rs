//! First-class commands and rule violations.
//!
//! Commands are domain events, not side effects. They are dispatched through
//! an exhaustive match, can be serialized for replay, and logged for
//! debugging.

use super::types::{CellId, Difficulty};
use serde::{Deserialize, Serialize};

/// A state-changing command issued by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Forwards a new difficulty to subsequent move requests.
    SetDifficulty(Difficulty),
    /// Sets the dimension requested from the next field generation.
    ///
    /// Does not resize the current grid; only new-field resolution does.
    SetFieldSize(usize),
    /// Places a provisional letter on the grid.
    PlaceLetter {
        /// The letter to place.
        letter: char,
        /// The target cell.
        cell: CellId,
    },
    /// Takes back the provisional letter, if `cell` matches it.
    RemoveLetter {
        /// The cell to clear.
        cell: CellId,
    },
    /// Appends one cell to the traced word.
    UpdateWord {
        /// The letter at the traced cell.
        letter: char,
        /// The traced cell.
        cell: CellId,
    },
    /// Abandons the traced word, keeping the provisional letter.
    ResetWordPath,
    /// Submits the traced word as the user's move.
    UserMove,
}

/// Closed taxonomy of rule violations. All are non-fatal and user-correctable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum RuleKind {
    /// Placed letter is outside the allowed alphabet.
    WrongAlphabet,
    /// Placed letter has no orthogonally adjacent letter.
    LetterFarFromAnyText,
    /// Traced word exactly matches the used-word history.
    WordAlreadyUsed,
    /// Traced path does not include the provisional letter.
    NoNewLetterUsed,
}

impl RuleKind {
    /// Message surfaced to the player.
    pub fn message(self) -> &'static str {
        match self {
            RuleKind::WrongAlphabet => "Letter should be from the alphabet",
            RuleKind::LetterFarFromAnyText => "Place the letter near another letter",
            RuleKind::WordAlreadyUsed => "Word is already used",
            RuleKind::NoNewLetterUsed => "Use new letter",
        }
    }

    /// Whether the violation is raised while placing a letter, as opposed to
    /// committing a traced word.
    pub fn is_placement(self) -> bool {
        matches!(
            self,
            RuleKind::WrongAlphabet | RuleKind::LetterFarFromAnyText
        )
    }
}

/// A recorded validation failure, collected into the aggregate state and
/// surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{kind}: {message}")]
pub struct RuleViolation {
    kind: RuleKind,
    message: String,
}

impl RuleViolation {
    /// Creates a violation with the standard message for `kind`.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }

    /// Returns the violation kind.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the display message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for RuleViolation {}
