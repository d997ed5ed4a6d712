use std::str::FromStr;

use anyhow::anyhow;
use picture_types::Question;

/// Play order of questions resolved from a concurrent fetch batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionOrder {
    /// Order of `question_ids`, independent of network timing.
    #[default]
    Declared,
    /// Order in which fetches settled.
    Settled,
}

impl FromStr for ResolutionOrder {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "declared" => Ok(ResolutionOrder::Declared),
            "settled" => Ok(ResolutionOrder::Settled),
            other => Err(anyhow!(
                "Unknown question order '{}', expected 'declared' or 'settled'",
                other
            )),
        }
    }
}

/// A successfully fetched question with its position in the game's `question_ids`.
#[derive(Debug, Clone)]
pub struct ResolvedQuestion {
    pub position: usize,
    pub question: Question,
}

impl ResolutionOrder {
    /// Arrange successes, given in the order they settled, into play order.
    pub fn arrange(self, mut settled: Vec<ResolvedQuestion>) -> Vec<Question> {
        if self == ResolutionOrder::Declared {
            settled.sort_by_key(|resolved| resolved.position);
        }
        settled.into_iter().map(|resolved| resolved.question).collect()
    }
}
