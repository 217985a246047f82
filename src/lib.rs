//! Balda word-game engine.
//!
//! Players take turns placing a letter on a square grid adjacent to existing
//! letters, then trace a contiguous path of placed letters spelling a valid,
//! previously-unused word. This crate is the game-state engine: placement and
//! trace validation, turn resolution between the user and the computer
//! opponent, and score/history bookkeeping. Rendering and input wiring live
//! in the presentation layer; move generation and field generation are
//! external collaborators behind async contracts.
//!
//! # Architecture
//!
//! - **Rules**: pure predicates over state fragments
//! - **State**: the single aggregate and its primitive mutators
//! - **Engine**: command handlers and async merge handlers over the aggregate
//! - **Session**: drives the collaborators and applies their results
//!
//! # Example
//!
//! ```no_run
//! use balda::{CellId, Command, Session};
//!
//! # async fn example(mut session: Session) -> anyhow::Result<()> {
//! session.new_field().await?;
//!
//! session.dispatch(Command::PlaceLetter { letter: 'д', cell: CellId::new(3, 1) });
//! session.dispatch(Command::UpdateWord { letter: 'А', cell: CellId::new(2, 1) });
//! session.dispatch(Command::UpdateWord { letter: 'Д', cell: CellId::new(3, 1) });
//! session.dispatch(Command::UserMove);
//!
//! session.computer_move().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod collaborators;
mod config;
mod game;
mod session;

// Crate-level exports - Collaborator contracts
pub use collaborators::{FieldProvider, MoveOutcome, MoveProvider};

// Crate-level exports - Session settings
pub use config::{GameSettings, DEFAULT_FIELD_SIZE};

// Crate-level exports - Session orchestration
pub use session::Session;

// Crate-level exports - Game types
pub use game::{
    invariants, AdjacencyRule, AlphabetRule, Cell, CellId, Command, Difficulty, Field, Game,
    GameState, NewLetterRule, Player, ProvisionalLetter, RequestKind, RequestTicket, RuleKind,
    RuleViolation, TurnPhase, WordReuseRule,
};
