use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::nutrients::NutrientTotals;

/// Outcome of one daily scoring run. Every score is in [0, 100] with one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainScoreResult {
    pub daily_score: f64,
    pub adherence_score: f64,
    pub nutrition_score: f64,
    pub cognitive_score: f64,
    /// Raw self-reported value, kept for traceability.
    pub cognitive_feedback: i32,
    pub details: NutrientTotals,
}

/// A daily score as kept by the state store, one per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score_date: NaiveDate,

    #[serde(flatten)]
    pub result: BrainScoreResult,
}

impl ScoreRecord {
    pub fn daily_score(&self) -> f64 {
        self.result.daily_score
    }
}
