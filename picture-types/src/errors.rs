use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reasons a play-through rejects an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum PlayError {
    #[error("no questions could be loaded for this game")]
    EmptySession,
    #[error("the game has not been started")]
    NotStarted,
    #[error("wait for the current result before guessing again")]
    FeedbackPending,
    #[error("the game is already complete")]
    SessionCompleted,
}
