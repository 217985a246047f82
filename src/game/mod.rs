//! The game-state engine: types, rules, commands, and merge handlers.

mod action;
mod engine;
pub mod invariants;
mod rules;
mod state;
mod types;

pub use action::{Command, RuleKind, RuleViolation};
pub use engine::{Game, RequestKind, RequestTicket};
pub use rules::{AdjacencyRule, AlphabetRule, NewLetterRule, WordReuseRule};
pub use state::GameState;
pub use types::{Cell, CellId, Difficulty, Field, Player, ProvisionalLetter, TurnPhase};
