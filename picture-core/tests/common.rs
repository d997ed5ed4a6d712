#![allow(dead_code)]

use picture_core::{PlayEvent, PlayEventBus, PlayEventHandler, PlaySession};
use picture_types::{Game, Question};
use std::sync::{Arc, Mutex};

/// Creates a question with two placeholder clue images
pub fn create_test_question(id: &str, word: &str) -> Question {
    Question {
        id: id.to_string(),
        word: word.to_string(),
        image_urls: vec![
            format!("https://images.test/{}/a.jpg", id),
            format!("https://images.test/{}/b.jpg", id),
        ],
    }
}

/// Creates a game whose question ids follow the given questions
pub fn create_test_game(name: &str, questions: &[Question]) -> Game {
    Game {
        id: format!("game-{}", name.to_lowercase()),
        user_id: "test-user".to_string(),
        name: name.to_string(),
        question_ids: questions.iter().map(|q| q.id.clone()).collect(),
    }
}

/// Creates a session over one question per word
pub fn create_session_with_words(words: &[&str]) -> PlaySession {
    let questions: Vec<Question> = words
        .iter()
        .enumerate()
        .map(|(i, word)| create_test_question(&format!("q{}", i + 1), word))
        .collect();
    let game = create_test_game("Test", &questions);
    PlaySession::new(game, questions)
}

/// The cat/dog game used across scenarios
pub fn create_cat_dog_session(events: PlayEventBus) -> PlaySession {
    let questions = vec![
        create_test_question("cat", "cat"),
        create_test_question("dog", "dog"),
    ];
    let game = create_test_game("Pets", &questions);
    PlaySession::with_event_bus(game, questions, events)
}

/// Submits a guess and immediately settles its feedback, as if the delay elapsed
pub fn guess_and_settle(session: &mut PlaySession, guess: &str) {
    session.submit_guess(guess).unwrap();
    session.settle_feedback();
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<PlayEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bus(&self) -> PlayEventBus {
        let mut bus = PlayEventBus::new();
        bus.add_handler(Arc::new(self.clone()));
        bus
    }

    pub fn get_events(&self) -> Vec<PlayEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&PlayEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check_fn(e)).count()
    }
}

impl PlayEventHandler for EventCollector {
    fn handle_event(&self, event: &PlayEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
