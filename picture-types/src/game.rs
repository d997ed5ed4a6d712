use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GameId, QuestionId, UserId};

/// A named, ordered collection of questions. `question_ids` defines play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub user_id: UserId,
    pub name: String,
    pub question_ids: Vec<QuestionId>,
}

impl Game {
    pub fn question_count(&self) -> usize {
        self.question_ids.len()
    }

    pub fn contains_question(&self, question_id: &str) -> bool {
        self.question_ids.iter().any(|id| id == question_id)
    }
}
