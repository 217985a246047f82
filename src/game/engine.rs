//! Command dispatch and asynchronous merge handling over the game state.
//!
//! All command handlers run to completion without suspension; the aggregate
//! has a single writer by construction. Results computed by the external
//! collaborators are folded in through the `resolve_*` handlers, guarded by
//! correlation tickets so a result from a superseded request is dropped
//! instead of clobbering newer state.

use super::action::{Command, RuleViolation};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{AdjacencyRule, AlphabetRule, NewLetterRule, WordReuseRule};
use super::state::GameState;
use super::types::{uppercase, CellId, Difficulty, Field, Player};
use crate::collaborators::MoveOutcome;
use crate::config::GameSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Kind of an asynchronous collaborator request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RequestKind {
    /// The computer opponent's move.
    ComputerMove,
    /// A hinted move for the user to confirm.
    Hint,
    /// A freshly generated field.
    NewField,
}

/// Correlation ticket for one asynchronous request.
///
/// Issued when the request is dispatched and presented back with its result;
/// a ticket superseded by a newer request of the same kind no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTicket {
    kind: RequestKind,
    seq: u64,
}

impl RequestTicket {
    /// Returns the request kind this ticket was issued for.
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// Tracks issued and applied sequence numbers per request kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct RequestLedger {
    issued: [u64; 3],
    applied: [u64; 3],
}

impl RequestLedger {
    fn issue(&mut self, kind: RequestKind) -> RequestTicket {
        let slot = kind as usize;
        self.issued[slot] += 1;
        RequestTicket {
            kind,
            seq: self.issued[slot],
        }
    }

    /// Accepts a ticket exactly once, and only while it is the latest issued
    /// request of its kind.
    fn accept(&mut self, kind: RequestKind, ticket: RequestTicket) -> bool {
        let slot = kind as usize;
        if ticket.kind != kind || ticket.seq != self.issued[slot] || ticket.seq <= self.applied[slot]
        {
            return false;
        }
        self.applied[slot] = ticket.seq;
        true
    }
}

/// The game-state engine: command handlers plus async merge handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
    requests: RequestLedger,
}

impl Game {
    /// Creates an engine with default settings (5×5 empty grid, medium
    /// difficulty).
    #[instrument]
    pub fn new() -> Self {
        Self::with_settings(&GameSettings::default())
    }

    /// Creates an engine with the given settings.
    #[instrument]
    pub fn with_settings(settings: &GameSettings) -> Self {
        Self {
            state: GameState::with_settings(settings),
            requests: RequestLedger::default(),
        }
    }

    /// Returns the full current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a command to the state. Validation failures are collected into
    /// the state's error list, never raised.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
            Command::SetFieldSize(size) => self.set_field_size(size),
            Command::PlaceLetter { letter, cell } => self.place_letter(letter, cell),
            Command::RemoveLetter { cell } => self.remove_letter(cell),
            Command::UpdateWord { letter, cell } => self.update_word(letter, cell),
            Command::ResetWordPath => self.reset_word_path(),
            Command::UserMove => self.user_move(),
        }
        self.assert_invariants();
    }

    /// Checks all aggregate invariants, returning every violation found.
    pub fn verify(&self) -> Result<(), Vec<super::invariants::InvariantViolation>> {
        GameInvariants::check_all(&self.state)
    }

    fn assert_invariants(&self) {
        debug_assert!(self.verify().is_ok(), "game invariants violated");
    }

    // ─────────────────────────────────────────────────────────────
    //  Command handlers
    // ─────────────────────────────────────────────────────────────

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(%difficulty, "difficulty changed");
        self.state.set_difficulty(difficulty);
    }

    fn set_field_size(&mut self, size: usize) {
        // The grid itself resizes only through new-field resolution.
        debug!(size, "field size changed");
        self.state.set_field_size(size);
    }

    /// Places a provisional letter. The letter is written to the grid before
    /// validation completes, so the player sees it immediately; violations
    /// are surfaced alongside rather than rolling the placement back.
    fn place_letter(&mut self, letter: char, cell: CellId) {
        self.state.clear_errors();

        self.collect(AlphabetRule::check(letter));
        self.state.place_on_grid(letter, cell);

        // Evict the previous provisional letter, unless it sat on the cell
        // just written.
        if let Some(previous) = self.state.provisional() {
            if previous.cell() != cell {
                self.state.clear_cell(previous.cell());
            }
        }

        self.state.reset_word();
        self.state.reset_word_path();
        self.state.set_provisional(cell, letter);

        let adjacency = AdjacencyRule::check(cell, self.state.field());
        self.collect(adjacency);
    }

    /// Takes back the provisional letter. A cell that does not match the
    /// provisional letter leaves the state unchanged.
    fn remove_letter(&mut self, cell: CellId) {
        let is_provisional = self
            .state
            .provisional()
            .is_some_and(|letter| letter.cell() == cell);
        if !is_provisional {
            return;
        }

        self.state.clear_provisional();
        self.state.reset_word();
        self.state.clear_errors();
    }

    /// Appends one traced cell. Path shape is validated at commit time, not
    /// here; the caller invokes this once per cell selection.
    fn update_word(&mut self, letter: char, cell: CellId) {
        self.state.push_trace(uppercase(letter), cell);
    }

    fn reset_word_path(&mut self) {
        self.state.reset_word();
        self.state.reset_word_path();
    }

    /// Submits the traced word as the user's move.
    ///
    /// Standing placement errors keep blocking the commit; the commit checks
    /// themselves are recomputed, so a rejected move resubmitted unchanged
    /// reports the same errors without drift. On rejection the board, word,
    /// and path are left exactly as they were.
    fn user_move(&mut self) {
        self.state.retain_placement_errors();

        let word = self.state.traced_word();
        let reuse = WordReuseRule::check(&word, self.state.words_used());
        self.collect(reuse);
        let new_letter = NewLetterRule::check(self.state.provisional(), self.state.word_path());
        self.collect(new_letter);

        if !self.state.errors().is_empty() {
            debug!(word = %word, errors = self.state.errors().len(), "user move rejected");
            return;
        }

        info!(word = %word, "user move committed");
        self.state.commit_word(&word, Player::User);
        self.state.reset_word();
        self.state.reset_provisional();
    }

    fn collect(&mut self, check: Result<(), RuleViolation>) {
        if let Err(violation) = check {
            self.state.push_error(violation);
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Asynchronous request correlation and merge handlers
    // ─────────────────────────────────────────────────────────────

    /// Issues a correlation ticket for a new request of `kind`, superseding
    /// any outstanding request of the same kind.
    pub fn issue_request(&mut self, kind: RequestKind) -> RequestTicket {
        self.requests.issue(kind)
    }

    /// Folds a computed computer move into the state: places the letter,
    /// commits the word for the computer, and records the full traced path.
    ///
    /// Returns whether the result was applied. A stale ticket, or standing
    /// user-facing errors, drop the result.
    #[instrument(skip(self))]
    pub fn resolve_computer_move(&mut self, ticket: RequestTicket, outcome: MoveOutcome) -> bool {
        if !self.requests.accept(RequestKind::ComputerMove, ticket) {
            warn!(?ticket, "dropping stale computer move");
            return false;
        }
        if !self.state.errors().is_empty() {
            debug!("unresolved errors, dropping computer move");
            return false;
        }

        info!(word = %outcome.word, cell = %outcome.cell, "computer move resolved");
        self.state.place_on_grid(outcome.letter, outcome.cell);
        self.state.commit_word(&outcome.word, Player::Computer);
        self.state.set_word_path(outcome.path);
        self.assert_invariants();
        true
    }

    /// Folds a hint into the state, pre-filling a traced word for the user to
    /// confirm through [`Command::UserMove`]: the hinted letters and path are
    /// loaded, the new letter is placed and recorded as provisional.
    #[instrument(skip(self))]
    pub fn resolve_hint(&mut self, ticket: RequestTicket, outcome: MoveOutcome) -> bool {
        if !self.requests.accept(RequestKind::Hint, ticket) {
            warn!(?ticket, "dropping stale hint");
            return false;
        }

        info!(word = %outcome.word, cell = %outcome.cell, "hint resolved");
        self.state.set_word(outcome.word.chars().collect());
        self.state.set_word_path(outcome.path);
        self.state.place_on_grid(outcome.letter, outcome.cell);
        self.state.set_provisional(outcome.cell, outcome.letter);
        self.assert_invariants();
        true
    }

    /// Replaces the field with a freshly generated grid, adopting its
    /// dimension and marking its center-row seed word as used. The
    /// in-progress turn is reset; committed history and scores stand.
    #[instrument(skip(self, field), fields(size = field.size()))]
    pub fn resolve_new_field(&mut self, ticket: RequestTicket, field: Field) -> bool {
        if !self.requests.accept(RequestKind::NewField, ticket) {
            warn!(?ticket, "dropping stale field");
            return false;
        }

        let seed = field.center_row_word();
        info!(size = field.size(), seed = %seed, "new field resolved");
        debug!(field = %field.display(), "generated grid");

        self.state.replace_field(field);
        self.state.seed_used_word(&seed);
        self.state.reset_provisional();
        self.state.reset_word();
        self.state.reset_word_path();
        self.state.clear_errors();
        self.assert_invariants();
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
