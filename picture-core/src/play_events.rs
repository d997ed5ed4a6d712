use std::sync::Arc;

use picture_types::{FinalScore, GameId, GuessFeedback};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEvent {
    SessionStarted {
        game_id: GameId,
        question_count: usize,
    },
    GuessJudged {
        game_id: GameId,
        question_index: usize,
        feedback: GuessFeedback,
        score: u32,
    },
    FeedbackCleared {
        game_id: GameId,
        question_index: usize,
    },
    QuestionAdvanced {
        game_id: GameId,
        question_index: usize,
    },
    SessionCompleted {
        game_id: GameId,
        result: FinalScore,
    },
}

impl PlayEvent {
    pub fn game_id(&self) -> &GameId {
        match self {
            PlayEvent::SessionStarted { game_id, .. } => game_id,
            PlayEvent::GuessJudged { game_id, .. } => game_id,
            PlayEvent::FeedbackCleared { game_id, .. } => game_id,
            PlayEvent::QuestionAdvanced { game_id, .. } => game_id,
            PlayEvent::SessionCompleted { game_id, .. } => game_id,
        }
    }
}

/// Receives play events. Handlers are shared between successive sessions of one game,
/// so they take `&self` and carry their own interior mutability.
pub trait PlayEventHandler: Send + Sync {
    fn handle_event(&self, event: &PlayEvent);
}

/// Distributes play events to every registered handler. Cloning shares the handlers.
#[derive(Clone, Default)]
pub struct PlayEventBus {
    handlers: Vec<Arc<dyn PlayEventHandler>>,
}

impl PlayEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn PlayEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&self, event: PlayEvent) {
        for handler in &self.handlers {
            handler.handle_event(&event);
        }
    }
}

impl std::fmt::Debug for PlayEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Mirrors play events into the tracing log.
pub struct TracingPlayEvents;

impl PlayEventHandler for TracingPlayEvents {
    fn handle_event(&self, event: &PlayEvent) {
        match event {
            PlayEvent::SessionStarted {
                game_id,
                question_count,
            } => tracing::info!("Started game {} with {} questions", game_id, question_count),
            PlayEvent::GuessJudged {
                game_id,
                question_index,
                feedback,
                score,
            } => tracing::debug!(
                "Game {} question {}: {:?} (score {})",
                game_id,
                question_index,
                feedback,
                score
            ),
            PlayEvent::FeedbackCleared {
                game_id,
                question_index,
            } => tracing::debug!("Game {} question {}: feedback cleared", game_id, question_index),
            PlayEvent::QuestionAdvanced {
                game_id,
                question_index,
            } => tracing::debug!("Game {} advanced to question {}", game_id, question_index),
            PlayEvent::SessionCompleted { game_id, result } => tracing::info!(
                "Completed game {}: {}/{} ({}%)",
                game_id,
                result.score,
                result.total,
                result.percentage
            ),
        }
    }
}
