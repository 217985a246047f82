//! The aggregate game state and its primitive mutators.
//!
//! `GameState` has exactly one writer at a time: command handlers and merge
//! handlers in [`super::engine`] mutate it through the `pub(super)` primitives
//! below, composed per command. The presentation layer only reads it.

use super::action::RuleViolation;
use super::types::{uppercase, Cell, CellId, Difficulty, Field, Player, ProvisionalLetter, TurnPhase};
use crate::config::GameSettings;
use serde::{Deserialize, Serialize};

/// Complete state of one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    field_size: usize,
    difficulty: Difficulty,
    field: Field,
    last_set_letter: Option<ProvisionalLetter>,
    word: Vec<char>,
    word_path: Vec<CellId>,
    words_used: Vec<String>,
    words_by_user: Vec<String>,
    words_by_computer: Vec<String>,
    score_by_user: usize,
    score_by_computer: usize,
    errors: Vec<RuleViolation>,
}

// ─────────────────────────────────────────────────────────────
//  Construction and read accessors
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Creates the state for a fresh session: an empty grid of the configured
    /// size, no history, no scores.
    pub(super) fn with_settings(settings: &GameSettings) -> Self {
        Self {
            field_size: settings.field_size,
            difficulty: settings.difficulty,
            field: Field::empty(settings.field_size),
            last_set_letter: None,
            word: Vec::new(),
            word_path: Vec::new(),
            words_used: Vec::new(),
            words_by_user: Vec::new(),
            words_by_computer: Vec::new(),
            score_by_user: 0,
            score_by_computer: 0,
            errors: Vec::new(),
        }
    }

    /// Returns the grid dimension requested for the next field generation.
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Returns the opponent difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the current field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the provisional letter placed this turn, if any.
    pub fn provisional(&self) -> Option<ProvisionalLetter> {
        self.last_set_letter
    }

    /// Returns the letters of the word being traced, in trace order.
    pub fn word(&self) -> &[char] {
        &self.word
    }

    /// Joins the traced letters into a word.
    pub fn traced_word(&self) -> String {
        self.word.iter().collect()
    }

    /// Returns the cells of the traced word, parallel to [`Self::word`].
    pub fn word_path(&self) -> &[CellId] {
        &self.word_path
    }

    /// Returns every word consumed this game, in insertion order.
    pub fn words_used(&self) -> &[String] {
        &self.words_used
    }

    /// Returns the words committed by `player`, in commit order.
    pub fn words_by(&self, player: Player) -> &[String] {
        match player {
            Player::User => &self.words_by_user,
            Player::Computer => &self.words_by_computer,
        }
    }

    /// Returns the score of `player`.
    pub fn score_of(&self, player: Player) -> usize {
        match player {
            Player::User => self.score_by_user,
            Player::Computer => self.score_by_computer,
        }
    }

    /// Returns the validation failures of the most recent command.
    pub fn errors(&self) -> &[RuleViolation] {
        &self.errors
    }

    /// Derives the phase of the in-progress turn.
    pub fn turn_phase(&self) -> TurnPhase {
        match (&self.last_set_letter, self.word.is_empty()) {
            (None, _) => TurnPhase::Idle,
            (Some(_), true) => TurnPhase::LetterPlaced,
            (Some(_), false) => TurnPhase::Tracing,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Primitive mutators, composed by the command handlers
// ─────────────────────────────────────────────────────────────

impl GameState {
    pub(super) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub(super) fn set_field_size(&mut self, size: usize) {
        self.field_size = size;
    }

    /// Writes the upper-cased letter into the grid. The caller guarantees the
    /// cell is on the field.
    pub(super) fn place_on_grid(&mut self, letter: char, cell: CellId) {
        self.field.set(cell, Cell::Letter(uppercase(letter)));
    }

    /// Reverts a grid cell to the empty sentinel.
    pub(super) fn clear_cell(&mut self, cell: CellId) {
        self.field.set(cell, Cell::Empty);
    }

    /// Records the provisional letter placed this turn.
    pub(super) fn set_provisional(&mut self, cell: CellId, letter: char) {
        self.last_set_letter = Some(ProvisionalLetter::new(cell, uppercase(letter)));
    }

    /// Forgets the provisional record without touching the grid. Used on
    /// commit, when the placed letter becomes permanent.
    pub(super) fn reset_provisional(&mut self) {
        self.last_set_letter = None;
    }

    /// Reverts the provisional letter's cell and forgets the record.
    pub(super) fn clear_provisional(&mut self) {
        if let Some(provisional) = self.last_set_letter.take() {
            self.clear_cell(provisional.cell());
        }
    }

    pub(super) fn reset_word(&mut self) {
        self.word.clear();
    }

    pub(super) fn reset_word_path(&mut self) {
        self.word_path.clear();
    }

    /// Appends one traced cell to the in-progress word.
    pub(super) fn push_trace(&mut self, letter: char, cell: CellId) {
        self.word.push(letter);
        self.word_path.push(cell);
    }

    pub(super) fn set_word(&mut self, word: Vec<char>) {
        self.word = word;
    }

    pub(super) fn set_word_path(&mut self, path: Vec<CellId>) {
        self.word_path = path;
    }

    /// Finalizes a word into the permanent history and score of `player`.
    ///
    /// The score increment is the word's letter count, not its byte length.
    pub(super) fn commit_word(&mut self, word: &str, player: Player) {
        self.words_used.push(word.to_string());
        let (words, score) = match player {
            Player::User => (&mut self.words_by_user, &mut self.score_by_user),
            Player::Computer => (&mut self.words_by_computer, &mut self.score_by_computer),
        };
        words.push(word.to_string());
        *score += word.chars().count();
    }

    /// Marks a word as consumed without attributing it to a player. Used for
    /// the seed word embedded in a generated field.
    pub(super) fn seed_used_word(&mut self, word: &str) {
        self.words_used.push(word.to_string());
    }

    /// Replaces the field wholesale and adopts its dimension.
    pub(super) fn replace_field(&mut self, field: Field) {
        self.field_size = field.size();
        self.field = field;
    }

    pub(super) fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub(super) fn push_error(&mut self, violation: RuleViolation) {
        self.errors.push(violation);
    }

    /// Drops commit-phase errors, keeping placement errors standing. A failed
    /// placement keeps blocking the commit, while repeated rejected commits
    /// report a stable error set.
    pub(super) fn retain_placement_errors(&mut self) {
        self.errors.retain(|violation| violation.kind().is_placement());
    }
}

// Test-only hooks for corrupting state in invariant tests.
#[cfg(test)]
impl GameState {
    pub(super) fn override_score(&mut self, player: Player, score: usize) {
        match player {
            Player::User => self.score_by_user = score,
            Player::Computer => self.score_by_computer = score,
        }
    }

    pub(super) fn strike_used_word(&mut self, word: &str) {
        self.words_used.retain(|used| used != word);
    }
}
