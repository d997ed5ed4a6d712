use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use picture_core::{
    FEEDBACK_DELAY, PlayEventBus, PlaySession, ResolutionOrder, display_name,
};
use picture_types::{FinalScore, Game, GameId, GuessFeedback, PlayError, PlayView, Question};

use crate::api::QuestionProvider;
use crate::config::Config;
use crate::resolver::resolve_questions;

#[derive(Debug, Clone, Copy)]
pub struct PlaySettings {
    pub feedback_delay: Duration,
    pub question_order: ResolutionOrder,
}

impl Default for PlaySettings {
    fn default() -> Self {
        Self {
            feedback_delay: FEEDBACK_DELAY,
            question_order: ResolutionOrder::Declared,
        }
    }
}

impl From<&Config> for PlaySettings {
    fn from(config: &Config) -> Self {
        Self {
            feedback_delay: config.feedback_delay,
            question_order: config.question_order,
        }
    }
}

/// Drives one game screen: loading, the start prompt, play, and restarts.
///
/// The delayed feedback step runs as a spawned task owned by the controller. Tearing
/// down the controller (or dropping it) aborts that task, so a discarded session is
/// never written to after the player has left.
pub struct PlayController {
    provider: Arc<dyn QuestionProvider>,
    game_id: GameId,
    settings: PlaySettings,
    events: PlayEventBus,
    game: Game,
    questions: Vec<Question>,
    session: Option<Arc<Mutex<PlaySession>>>,
    pending_feedback: Option<JoinHandle<()>>,
}

impl PlayController {
    /// Load a game and its questions. Never fails: anything that cannot be loaded
    /// leaves the controller in the empty state.
    pub async fn load(
        provider: Arc<dyn QuestionProvider>,
        game_id: impl Into<GameId>,
        settings: PlaySettings,
        events: PlayEventBus,
    ) -> Self {
        let game_id = game_id.into();
        let (game, questions) =
            Self::fetch(provider.as_ref(), &game_id, settings.question_order).await;

        Self {
            provider,
            game_id,
            settings,
            events,
            game,
            questions,
            session: None,
            pending_feedback: None,
        }
    }

    async fn fetch(
        provider: &dyn QuestionProvider,
        game_id: &str,
        order: ResolutionOrder,
    ) -> (Game, Vec<Question>) {
        match provider.fetch_game(game_id).await {
            Ok(game) => {
                let questions = resolve_questions(provider, &game.question_ids, order).await;
                info!(
                    "Loaded game {} with {} playable questions",
                    game.id,
                    questions.len()
                );
                (game, questions)
            }
            Err(e) => {
                warn!("Failed to load game {}: {}", game_id, e);
                let game = Game {
                    id: game_id.to_string(),
                    user_id: String::new(),
                    name: String::new(),
                    question_ids: Vec::new(),
                };
                (game, Vec::new())
            }
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a brand-new play-through of the loaded questions.
    pub fn start(&mut self) -> Result<(), PlayError> {
        if self.questions.is_empty() {
            return Err(PlayError::EmptySession);
        }

        self.teardown();
        let session = PlaySession::with_event_bus(
            self.game.clone(),
            self.questions.clone(),
            self.events.clone(),
        );
        self.session = Some(Arc::new(Mutex::new(session)));
        Ok(())
    }

    /// Judge a guess and schedule its feedback to settle after the display delay.
    pub async fn submit_guess(&mut self, guess: &str) -> Result<GuessFeedback, PlayError> {
        let session = self.session.clone().ok_or(PlayError::NotStarted)?;
        let feedback = session.lock().await.submit_guess(guess)?;

        let delay = self.settings.feedback_delay;
        self.pending_feedback = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.lock().await.settle_feedback();
        }));

        Ok(feedback)
    }

    /// Wait until the feedback of the last guess has settled.
    pub async fn wait_for_feedback(&mut self) {
        if let Some(handle) = self.pending_feedback.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!("Feedback task for game {} failed: {}", self.game_id, e);
                }
            }
        }
    }

    pub async fn view(&self) -> PlayView {
        match &self.session {
            Some(session) => session.lock().await.view(),
            None if self.questions.is_empty() => PlayView::Empty {
                game_name: display_name(&self.game),
            },
            None => PlayView::Ready {
                game_name: display_name(&self.game),
                question_count: self.questions.len() as u32,
            },
        }
    }

    pub async fn final_score(&self) -> Option<FinalScore> {
        match &self.session {
            Some(session) => session.lock().await.final_score(),
            None => None,
        }
    }

    /// Discard the current session and cancel its pending feedback.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending_feedback.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending feedback for game {}", self.game_id);
            }
            handle.abort();
        }
        self.session = None;
    }

    /// Re-fetch everything and start over with a new session.
    pub async fn restart(&mut self) -> Result<(), PlayError> {
        self.teardown();
        let (game, questions) = Self::fetch(
            self.provider.as_ref(),
            &self.game_id,
            self.settings.question_order,
        )
        .await;
        self.game = game;
        self.questions = questions;
        self.start()
    }
}

impl Drop for PlayController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_feedback.take() {
            handle.abort();
        }
    }
}
