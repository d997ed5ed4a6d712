use std::time::Duration;

use picture_types::{FinalScore, Game, GuessFeedback, PlayError, PlayView, Question};

use crate::{PlayEvent, PlayEventBus, ScoringEngine, is_correct_guess};

/// How long a guess result stays on screen before the session moves on.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Name shown when the game record itself could not be loaded.
pub const FALLBACK_GAME_NAME: &str = "Your Game";

/// Outcome of settling the feedback of the last guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Wrong guess cleared; the same question stays up.
    Retry { question_index: usize },
    Advanced { question_index: usize },
    Completed(FinalScore),
}

/// One play-through of an ordered question list.
#[derive(Debug)]
pub struct PlaySession {
    game: Game,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    last_result: GuessFeedback,
    completed: bool,
    event_bus: PlayEventBus,
}

impl PlaySession {
    pub fn new(game: Game, questions: Vec<Question>) -> Self {
        Self::with_event_bus(game, questions, PlayEventBus::new())
    }

    pub fn with_event_bus(game: Game, questions: Vec<Question>, event_bus: PlayEventBus) -> Self {
        let session = Self {
            game,
            questions,
            current_index: 0,
            score: 0,
            last_result: GuessFeedback::None,
            completed: false,
            event_bus,
        };

        if !session.is_empty() {
            session.event_bus.publish(PlayEvent::SessionStarted {
                game_id: session.game.id.clone(),
                question_count: session.questions.len(),
            });
        }

        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_result(&self) -> GuessFeedback {
        self.last_result
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Judge a guess against the current question.
    ///
    /// While a previous result is still on display the guess is rejected and nothing changes.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessFeedback, PlayError> {
        if self.is_empty() {
            return Err(PlayError::EmptySession);
        }
        if self.completed {
            return Err(PlayError::SessionCompleted);
        }
        if self.last_result.is_pending() {
            return Err(PlayError::FeedbackPending);
        }

        let question = self
            .questions
            .get(self.current_index)
            .ok_or(PlayError::SessionCompleted)?;

        let feedback = if is_correct_guess(guess, &question.word) {
            self.score += 1;
            GuessFeedback::Correct
        } else {
            GuessFeedback::Wrong
        };
        self.last_result = feedback;

        self.event_bus.publish(PlayEvent::GuessJudged {
            game_id: self.game.id.clone(),
            question_index: self.current_index,
            feedback,
            score: self.score,
        });

        Ok(feedback)
    }

    /// Apply the delayed effect of the last guess. Returns `None` when nothing was pending.
    pub fn settle_feedback(&mut self) -> Option<Transition> {
        let transition = match self.last_result {
            GuessFeedback::None => return None,
            GuessFeedback::Wrong => {
                self.event_bus.publish(PlayEvent::FeedbackCleared {
                    game_id: self.game.id.clone(),
                    question_index: self.current_index,
                });
                Transition::Retry {
                    question_index: self.current_index,
                }
            }
            GuessFeedback::Correct if self.current_index + 1 < self.questions.len() => {
                self.current_index += 1;
                self.event_bus.publish(PlayEvent::QuestionAdvanced {
                    game_id: self.game.id.clone(),
                    question_index: self.current_index,
                });
                Transition::Advanced {
                    question_index: self.current_index,
                }
            }
            GuessFeedback::Correct => {
                self.current_index = self.questions.len();
                self.completed = true;
                let result = ScoringEngine::final_score(self.score, self.total());
                self.event_bus.publish(PlayEvent::SessionCompleted {
                    game_id: self.game.id.clone(),
                    result: result.clone(),
                });
                Transition::Completed(result)
            }
        };

        self.last_result = GuessFeedback::None;
        Some(transition)
    }

    /// Final score, available once the last question has been answered.
    pub fn final_score(&self) -> Option<FinalScore> {
        self.completed
            .then(|| ScoringEngine::final_score(self.score, self.total()))
    }

    pub fn view(&self) -> PlayView {
        let game_name = display_name(&self.game);

        if self.is_empty() {
            return PlayView::Empty { game_name };
        }

        if let Some(result) = self.final_score() {
            return PlayView::Completed { game_name, result };
        }

        let question = &self.questions[self.current_index];
        let question_number = self.current_index as u32 + 1;
        PlayView::Playing {
            game_name,
            question_number,
            question_count: self.total(),
            image_urls: question.image_urls.clone(),
            feedback: self.last_result,
            progress_percent: ScoringEngine::progress_percent(question_number, self.total()),
            has_next: self.current_index + 1 < self.questions.len(),
        }
    }

    fn total(&self) -> u32 {
        self.questions.len() as u32
    }
}

/// Game name for display, falling back when the record is missing a name.
pub fn display_name(game: &Game) -> String {
    if game.name.trim().is_empty() {
        FALLBACK_GAME_NAME.to_string()
    } else {
        game.name.clone()
    }
}
