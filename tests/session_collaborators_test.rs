//! Tests for session orchestration with stub collaborators.

use anyhow::Result;
use balda::{
    CellId, Command, Difficulty, Field, FieldProvider, GameSettings, MoveOutcome, MoveProvider,
    Player, Session,
};
use std::sync::Mutex;

/// Move provider answering with a fixed outcome, recording what it was asked.
struct ScriptedMoves {
    outcome: MoveOutcome,
    requests: Mutex<Vec<(Vec<String>, Difficulty)>>,
}

impl ScriptedMoves {
    fn new(outcome: MoveOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl MoveProvider for ScriptedMoves {
    async fn request_move(
        &self,
        _field: &Field,
        words_used: &[String],
        difficulty: Difficulty,
    ) -> Result<MoveOutcome> {
        self.requests
            .lock()
            .unwrap()
            .push((words_used.to_vec(), difficulty));
        Ok(self.outcome.clone())
    }
}

/// Move provider that never finds a move.
struct NoMoves;

#[async_trait::async_trait]
impl MoveProvider for NoMoves {
    async fn request_move(
        &self,
        _field: &Field,
        _words_used: &[String],
        _difficulty: Difficulty,
    ) -> Result<MoveOutcome> {
        anyhow::bail!("no move found")
    }
}

/// Field provider answering with a fixed grid.
struct ScriptedField {
    lines: Vec<&'static str>,
}

#[async_trait::async_trait]
impl FieldProvider for ScriptedField {
    async fn request_field(&self, _size: usize) -> Result<Field> {
        Ok(Field::from_lines(&self.lines))
    }
}

fn balda_field() -> Box<ScriptedField> {
    Box::new(ScriptedField {
        lines: vec![".....", ".....", "БАЛДА", ".....", "....."],
    })
}

fn ad_outcome() -> MoveOutcome {
    MoveOutcome {
        letter: 'д',
        cell: CellId::new(3, 1),
        word: "АД".to_string(),
        path: vec![CellId::new(2, 1), CellId::new(3, 1)],
    }
}

#[tokio::test]
async fn test_new_field_then_user_turn() -> Result<()> {
    let mut session = Session::new(Box::new(ScriptedMoves::new(ad_outcome())), balda_field());

    assert!(session.new_field().await?);
    assert_eq!(session.state().words_used(), ["БАЛДА"]);

    session.dispatch(Command::PlaceLetter { letter: 'д', cell: CellId::new(3, 1) });
    session.dispatch(Command::UpdateWord { letter: 'А', cell: CellId::new(2, 1) });
    session.dispatch(Command::UpdateWord { letter: 'Д', cell: CellId::new(3, 1) });
    session.dispatch(Command::UserMove);

    assert_eq!(session.state().words_by(Player::User), ["АД"]);
    assert_eq!(session.state().score_of(Player::User), 2);
    Ok(())
}

#[tokio::test]
async fn test_computer_move_consults_provider_with_history() -> Result<()> {
    // Session owns its provider; keep a handle through Arc for assertions.
    let seen = std::sync::Arc::new(ScriptedMoves::new(ad_outcome()));
    struct Shared(std::sync::Arc<ScriptedMoves>);
    #[async_trait::async_trait]
    impl MoveProvider for Shared {
        async fn request_move(
            &self,
            field: &Field,
            words_used: &[String],
            difficulty: Difficulty,
        ) -> Result<MoveOutcome> {
            self.0.request_move(field, words_used, difficulty).await
        }
    }

    let settings = GameSettings {
        difficulty: Difficulty::Hard,
        ..GameSettings::default()
    };
    let mut session = Session::with_settings(&settings, Box::new(Shared(seen.clone())), balda_field());

    session.new_field().await?;
    assert!(session.computer_move().await?);

    assert_eq!(session.state().words_by(Player::Computer), ["АД"]);
    assert_eq!(session.state().score_of(Player::Computer), 2);

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (words_used, difficulty) = &requests[0];
    assert_eq!(words_used, &["БАЛДА".to_string()]);
    assert_eq!(*difficulty, Difficulty::Hard);
    Ok(())
}

#[tokio::test]
async fn test_hint_prefills_then_user_confirms() -> Result<()> {
    let mut session = Session::new(Box::new(ScriptedMoves::new(ad_outcome())), balda_field());
    session.new_field().await?;

    assert!(session.hint().await?);
    assert_eq!(session.state().traced_word(), "АД");
    assert_eq!(session.state().provisional().unwrap().cell(), CellId::new(3, 1));

    session.dispatch(Command::UserMove);
    assert_eq!(session.state().words_by(Player::User), ["АД"]);
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_leaves_state_untouched() -> Result<()> {
    let mut session = Session::new(Box::new(NoMoves), balda_field());
    session.new_field().await?;

    let before = session.state().clone();
    let result = session.computer_move().await;

    assert!(result.is_err());
    assert_eq!(session.state(), &before);
    Ok(())
}

#[tokio::test]
async fn test_field_request_uses_configured_size() -> Result<()> {
    struct SizeEcho;
    #[async_trait::async_trait]
    impl FieldProvider for SizeEcho {
        async fn request_field(&self, size: usize) -> Result<Field> {
            assert_eq!(size, 3);
            Ok(Field::from_lines(&["...", "ДАР", "..."]))
        }
    }

    let settings = GameSettings {
        field_size: 3,
        ..GameSettings::default()
    };
    let mut session = Session::with_settings(
        &settings,
        Box::new(ScriptedMoves::new(ad_outcome())),
        Box::new(SizeEcho),
    );

    assert!(session.new_field().await?);
    assert_eq!(session.state().field_size(), 3);
    assert_eq!(session.state().words_used(), ["ДАР"]);
    Ok(())
}
