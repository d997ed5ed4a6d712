use picture_types::{FinalScore, PerformanceTier};

pub struct ScoringEngine;

impl ScoringEngine {
    /// `round(100 * score / total)` with halves rounded up. An empty game scores 0.
    pub fn percentage(score: u32, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        let score = score as u64;
        let total = total as u64;
        ((200 * score + total) / (2 * total)) as u32
    }

    /// Map a percentage onto a tier. Thresholds are inclusive.
    pub fn tier(percentage: u32) -> PerformanceTier {
        match percentage {
            p if p >= 100 => PerformanceTier::Perfect,
            p if p >= 80 => PerformanceTier::Excellent,
            p if p >= 60 => PerformanceTier::Good,
            p if p >= 40 => PerformanceTier::Fair,
            _ => PerformanceTier::KeepTrying,
        }
    }

    pub fn final_score(score: u32, total: u32) -> FinalScore {
        let percentage = Self::percentage(score, total);
        FinalScore {
            score,
            total,
            percentage,
            tier: Self::tier(percentage),
        }
    }

    /// Progress bar value while playing: position of the current question out of the total.
    pub fn progress_percent(question_number: u32, total: u32) -> u32 {
        Self::percentage(question_number, total)
    }
}
