//! Session orchestration between the engine and its collaborators.

use crate::collaborators::{FieldProvider, MoveProvider};
use crate::config::GameSettings;
use crate::game::{Command, Game, GameState, RequestKind};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// One game session: the engine plus its external collaborators.
///
/// Commands dispatch synchronously. The three asynchronous operations issue a
/// correlation ticket, consult the collaborator, and fold the result back
/// through the matching merge handler; a result that lost the race to a newer
/// request of the same kind is dropped by the engine.
pub struct Session {
    game: Game,
    move_provider: Box<dyn MoveProvider>,
    field_provider: Box<dyn FieldProvider>,
}

impl Session {
    /// Creates a session with default settings.
    pub fn new(move_provider: Box<dyn MoveProvider>, field_provider: Box<dyn FieldProvider>) -> Self {
        Self::with_settings(&GameSettings::default(), move_provider, field_provider)
    }

    /// Creates a session with the given settings.
    pub fn with_settings(
        settings: &GameSettings,
        move_provider: Box<dyn MoveProvider>,
        field_provider: Box<dyn FieldProvider>,
    ) -> Self {
        info!(
            field_size = settings.field_size,
            difficulty = %settings.difficulty,
            "creating game session"
        );
        Self {
            game: Game::with_settings(settings),
            move_provider,
            field_provider,
        }
    }

    /// Returns the full current state for the presentation layer.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Applies a synchronous command.
    pub fn dispatch(&mut self, command: Command) {
        self.game.dispatch(command);
    }

    /// Plays the computer's turn.
    ///
    /// Returns whether the computed move was merged into state.
    #[instrument(skip(self))]
    pub async fn computer_move(&mut self) -> Result<bool> {
        let ticket = self.game.issue_request(RequestKind::ComputerMove);
        debug!(?ticket, "requesting computer move");

        let state = self.game.state();
        let outcome = self
            .move_provider
            .request_move(state.field(), state.words_used(), state.difficulty())
            .await?;

        Ok(self.game.resolve_computer_move(ticket, outcome))
    }

    /// Requests a hint and pre-fills the traced word for the user to confirm.
    ///
    /// Returns whether the hint was merged into state.
    #[instrument(skip(self))]
    pub async fn hint(&mut self) -> Result<bool> {
        let ticket = self.game.issue_request(RequestKind::Hint);
        debug!(?ticket, "requesting hint");

        let state = self.game.state();
        let outcome = self
            .move_provider
            .request_move(state.field(), state.words_used(), state.difficulty())
            .await?;

        Ok(self.game.resolve_hint(ticket, outcome))
    }

    /// Generates a fresh field of the configured size and starts on it.
    ///
    /// Returns whether the generated field was merged into state.
    #[instrument(skip(self))]
    pub async fn new_field(&mut self) -> Result<bool> {
        let ticket = self.game.issue_request(RequestKind::NewField);
        debug!(?ticket, "requesting new field");

        let size = self.game.state().field_size();
        let field = self.field_provider.request_field(size).await?;

        Ok(self.game.resolve_new_field(ticket, field))
    }
}
