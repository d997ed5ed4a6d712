use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::QuestionId;

/// Fewest clue images a question may carry.
pub const MIN_CLUE_IMAGES: usize = 2;
/// Most clue images a question may carry.
pub const MAX_CLUE_IMAGES: usize = 4;

/// A single puzzle: the answer word plus the clue images shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub word: String,
    pub image_urls: Vec<String>,
}

impl Question {
    pub fn clue_count(&self) -> usize {
        self.image_urls.len()
    }
}
