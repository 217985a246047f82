//! Validation rules over state fragments.
//!
//! Each rule is a pure predicate returning the typed violation on failure.
//! Command handlers accumulate every applicable violation into the aggregate
//! state instead of short-circuiting, so the player sees all of them at once.

use super::action::{RuleKind, RuleViolation};
use super::types::{CellId, Field, ProvisionalLetter};

/// Placed letters must come from the Cyrillic alphabet (either case).
pub struct AlphabetRule;

impl AlphabetRule {
    /// Checks `letter` against the alphabet.
    pub fn check(letter: char) -> Result<(), RuleViolation> {
        // The Cyrillic block plus its supplement, covering Ё/ё.
        if matches!(letter, '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}') {
            Ok(())
        } else {
            Err(RuleViolation::new(RuleKind::WrongAlphabet))
        }
    }
}

/// A placed letter must touch existing text orthogonally.
pub struct AdjacencyRule;

impl AdjacencyRule {
    /// Checks that some orthogonal neighbor of `cell` holds a letter.
    pub fn check(cell: CellId, field: &Field) -> Result<(), RuleViolation> {
        if field.has_adjacent_letter(cell) {
            Ok(())
        } else {
            Err(RuleViolation::new(RuleKind::LetterFarFromAnyText))
        }
    }
}

/// A word may be committed once per game, by either player.
pub struct WordReuseRule;

impl WordReuseRule {
    /// Checks `word` against the used-word history (case-sensitive exact match).
    pub fn check(word: &str, words_used: &[String]) -> Result<(), RuleViolation> {
        if words_used.iter().any(|used| used == word) {
            Err(RuleViolation::new(RuleKind::WordAlreadyUsed))
        } else {
            Ok(())
        }
    }
}

/// The traced path must run through the letter placed this turn.
pub struct NewLetterRule;

impl NewLetterRule {
    /// Checks that the provisional letter's cell appears in `path`.
    pub fn check(
        provisional: Option<ProvisionalLetter>,
        path: &[CellId],
    ) -> Result<(), RuleViolation> {
        match provisional {
            Some(letter) if path.contains(&letter.cell()) => Ok(()),
            _ => Err(RuleViolation::new(RuleKind::NoNewLetterUsed)),
        }
    }
}
