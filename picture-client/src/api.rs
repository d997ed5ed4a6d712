use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use picture_types::{
    AddQuestionRequest, Game, GameWithQuestions, NewGame, NewQuestion, NewUser, Question, User,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("Could not decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Source of game and question content for a play-through.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    async fn fetch_game(&self, game_id: &str) -> Result<Game, ApiError>;
    async fn fetch_question(&self, question_id: &str) -> Result<Question, ApiError>;
}

// The backend encodes empty lists as `null`, so lists are decoded leniently here
// and converted into the strict shared types.

#[derive(Deserialize)]
struct WireGame {
    id: String,
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    name: String,
    question_ids: Option<Vec<String>>,
}

impl From<WireGame> for Game {
    fn from(wire: WireGame) -> Self {
        Game {
            id: wire.id,
            user_id: wire.user_id,
            name: wire.name,
            question_ids: wire.question_ids.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct WireQuestion {
    id: String,
    #[serde(default)]
    word: String,
    image_urls: Option<Vec<String>>,
}

impl From<WireQuestion> for Question {
    fn from(wire: WireQuestion) -> Self {
        Question {
            id: wire.id,
            word: wire.word,
            image_urls: wire.image_urls.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct WireGameWithQuestions {
    game: WireGame,
    questions: Option<Vec<WireQuestion>>,
}

/// Thin typed wrapper over the game backend's HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let message = response.text().await.unwrap_or_default().trim().to_string();
        tracing::warn!("Request to {} returned {}", url, status);
        Err(ApiError::Status { status, message })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub async fn create_user(&self, name: &str) -> Result<User, ApiError> {
        let body = NewUser {
            name: name.to_string(),
        };
        let response = self.client.post(self.url("users")).json(&body).send().await?;
        Self::decode(response).await
    }

    pub async fn create_game(&self, user_id: &str, name: &str) -> Result<Game, ApiError> {
        let body = NewGame {
            user_id: user_id.to_string(),
            name: name.to_string(),
        };
        let response = self.client.post(self.url("games")).json(&body).send().await?;
        let game: WireGame = Self::decode(response).await?;
        Ok(game.into())
    }

    pub async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        let response = self.client.get(self.url("games")).send().await?;
        let games: Option<Vec<WireGame>> = Self::decode(response).await?;
        Ok(games
            .unwrap_or_default()
            .into_iter()
            .map(Game::from)
            .collect())
    }

    pub async fn game_with_questions(&self, game_id: &str) -> Result<GameWithQuestions, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("games/{}/questions", game_id)))
            .send()
            .await?;
        let wire: WireGameWithQuestions = Self::decode(response).await?;
        Ok(GameWithQuestions {
            game: wire.game.into(),
            questions: wire
                .questions
                .unwrap_or_default()
                .into_iter()
                .map(Question::from)
                .collect(),
        })
    }

    pub async fn get_question(&self, question_id: &str) -> Result<Question, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("questions/{}", question_id)))
            .send()
            .await?;
        let question: WireQuestion = Self::decode(response).await?;
        Ok(question.into())
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        let response = self.client.get(self.url("questions")).send().await?;
        let questions: Option<Vec<WireQuestion>> = Self::decode(response).await?;
        Ok(questions
            .unwrap_or_default()
            .into_iter()
            .map(Question::from)
            .collect())
    }

    pub async fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError> {
        let response = self
            .client
            .post(self.url("questions"))
            .json(question)
            .send()
            .await?;
        let question: WireQuestion = Self::decode(response).await?;
        Ok(question.into())
    }

    pub async fn add_question_to_game(&self, game_id: &str, question_id: &str) -> Result<(), ApiError> {
        let body = AddQuestionRequest {
            existing_question_id: question_id.to_string(),
        };
        let response = self
            .client
            .post(self.url(&format!("games/{}/questions", game_id)))
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn search_images(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.url("images/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        let urls: Option<Vec<String>> = Self::decode(response).await?;
        Ok(urls.unwrap_or_default())
    }
}

#[async_trait]
impl QuestionProvider for ApiClient {
    async fn fetch_game(&self, game_id: &str) -> Result<Game, ApiError> {
        Ok(self.game_with_questions(game_id).await?.game)
    }

    async fn fetch_question(&self, question_id: &str) -> Result<Question, ApiError> {
        self.get_question(question_id).await
    }
}
