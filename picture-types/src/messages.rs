use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Game, Question, QuestionId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGame {
    pub user_id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewQuestion {
    pub word: String,
    pub image_urls: Vec<String>,
}

/// Body of `POST /games/{id}/questions` when attaching a question that already exists.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddQuestionRequest {
    pub existing_question_id: QuestionId,
}

/// Response of `GET /games/{id}/questions`. Question content is fetched separately.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameWithQuestions {
    pub game: Game,
    #[serde(default)]
    pub questions: Vec<Question>,
}
