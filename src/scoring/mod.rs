pub mod calculations;
pub mod config;
pub mod constants;
pub mod trend;

pub use calculations::{
    aggregate_totals, calculate_adherence_score, calculate_brain_score,
    calculate_cognitive_score, calculate_nutrition_score, nutrient_sub_scores,
    round_one_decimal, NutrientSubScores,
};
pub use config::{CalorieExcess, CapFactors, DailyWeights, NutritionWeights, ScoringConfig};
pub use constants::*;
pub use trend::{analyze_trend, score_stats, ScoreStats, Trend};
