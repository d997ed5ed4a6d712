use picture_core::{GameDraft, QuestionDraft, validate_display_name};
use picture_types::{Game, Identity, Question};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::session_context::SessionContext;

#[derive(Debug, Clone)]
pub struct PublishedGame {
    pub game: Game,
    pub invite_link: String,
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(Identity),
    AlreadySignedIn(Identity),
}

/// Register a display name and remember the returned identity.
pub async fn register(
    api: &ApiClient,
    context: &mut SessionContext,
    name: &str,
) -> Result<Registration, ClientError> {
    if let Some(identity) = context.identity() {
        return Ok(Registration::AlreadySignedIn(identity.clone()));
    }

    let name = validate_display_name(name)?;
    let user = api.create_user(&name).await.map_err(|e| {
        tracing::error!("Error creating user: {}", e);
        e
    })?;

    let identity = Identity::from(user);
    context.save(identity.clone()).await?;
    tracing::info!("Registered {} as user {}", identity.name, identity.user_id);
    Ok(Registration::Created(identity))
}

pub async fn publish_question(api: &ApiClient, draft: &QuestionDraft) -> Result<Question, ClientError> {
    let new_question = draft.validate()?;
    let question = api.create_question(&new_question).await?;
    tracing::info!("Created question {} ({} images)", question.id, question.clue_count());
    Ok(question)
}

/// Create the game, then attach each selected question in order, one request at a time.
pub async fn publish_game(
    api: &ApiClient,
    context: &SessionContext,
    draft: &GameDraft,
    app_base_url: &str,
) -> Result<PublishedGame, ClientError> {
    let valid = draft.validate()?;

    let mut game = api.create_game(context.owner_id(), &valid.name).await?;
    for question_id in &valid.question_ids {
        api.add_question_to_game(&game.id, question_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to add question {} to game {}: {}",
                    question_id,
                    game.id,
                    e
                );
                e
            })?;
    }
    game.question_ids = valid.question_ids;

    let invite_link = invite_link(app_base_url, &game.id);
    tracing::info!("Created game {} with {} questions", game.id, game.question_count());
    Ok(PublishedGame { game, invite_link })
}

/// Shareable link to the play screen of a game.
pub fn invite_link(app_base_url: &str, game_id: &str) -> String {
    format!("{}/game/{}", app_base_url.trim_end_matches('/'), game_id)
}

/// Build a game draft from question ids, looking them up in the available pool.
pub fn draft_game_from_ids(
    name: &str,
    question_ids: &[String],
    available: &[Question],
) -> Result<GameDraft, ClientError> {
    let mut draft = GameDraft::new(name);
    for question_id in question_ids {
        let question = available
            .iter()
            .find(|q| &q.id == question_id)
            .ok_or_else(|| ClientError::UnknownQuestion(question_id.clone()))?;
        draft.add(question.clone());
    }
    Ok(draft)
}
