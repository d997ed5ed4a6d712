use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Transient feedback for the most recent guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessFeedback {
    #[default]
    None,
    Correct,
    Wrong,
}

impl GuessFeedback {
    pub fn is_pending(&self) -> bool {
        !matches!(self, GuessFeedback::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PerformanceTier {
    Perfect,    // 100%
    Excellent,  // >= 80%
    Good,       // >= 60%
    Fair,       // >= 40%
    KeepTrying, // below 40%
}

impl PerformanceTier {
    pub fn message(&self) -> &'static str {
        match self {
            PerformanceTier::Perfect => "Perfect! You're a master!",
            PerformanceTier::Excellent => "Excellent work!",
            PerformanceTier::Good => "Good job!",
            PerformanceTier::Fair => "Not bad, keep practicing!",
            PerformanceTier::KeepTrying => "Keep trying, you'll get better!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalScore {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub tier: PerformanceTier,
}

/// What the presentation layer should render for a play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PlayView {
    /// Nothing could be loaded; distinct from completion.
    Empty { game_name: String },
    /// Start prompt shown before the session exists.
    Ready {
        game_name: String,
        question_count: u32,
    },
    Playing {
        game_name: String,
        question_number: u32, // 1-based
        question_count: u32,
        image_urls: Vec<String>,
        feedback: GuessFeedback,
        progress_percent: u32,
        has_next: bool,
    },
    Completed {
        game_name: String,
        result: FinalScore,
    },
}
