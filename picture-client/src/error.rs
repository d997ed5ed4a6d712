use picture_core::DraftError;
use picture_types::PlayError;

use crate::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error("No player is signed in; register a name first")]
    NotSignedIn,
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
