use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, ScoreRecord};
use crate::state::manager::{dedupe_foods, AppState};

/// Load the tracker state from a JSON file.
///
/// A missing file is a fresh start, not an error.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<AppState> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "state file not found, starting empty");
        return Ok(AppState::default());
    }

    let content = fs::read_to_string(path)?;
    let state: AppState = serde_json::from_str(&content)?;
    info!(
        path = %path.display(),
        foods = state.foods.len(),
        plans = state.plans.len(),
        meals = state.meals.len(),
        scores = state.scores.len(),
        "loaded state"
    );
    Ok(state)
}

/// Save the tracker state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &AppState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a food catalog from CSV with a header row matching `FoodItem` fields.
///
/// Deduplicates by name (last occurrence wins) and rejects invalid rows.
pub fn load_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();

    for (i, row) in rdr.deserialize().enumerate() {
        let food: FoodItem = row?;
        if !food.is_valid() {
            // Row 1 is the header.
            return Err(NutriError::InvalidInput(format!(
                "Invalid food on row {}: {}",
                i + 2,
                food.food_name
            )));
        }
        foods.push(food);
    }

    Ok(dedupe_foods(foods))
}

/// Write a score history to CSV.
pub fn write_scores_csv<P: AsRef<Path>>(path: P, scores: &[&ScoreRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "score_date",
        "daily_score",
        "adherence_score",
        "nutrition_score",
        "cognitive_score",
        "cognitive_feedback",
        "total_calories",
        "total_protein",
        "total_omega3",
        "total_magnesium",
    ])?;

    for record in scores {
        let r = &record.result;
        wtr.write_record([
            record.score_date.to_string(),
            format!("{:.1}", r.daily_score),
            format!("{:.1}", r.adherence_score),
            format!("{:.1}", r.nutrition_score),
            format!("{:.1}", r.cognitive_score),
            r.cognitive_feedback.to_string(),
            format!("{:.1}", r.details.calories),
            format!("{:.1}", r.details.protein),
            format!("{:.2}", r.details.omega3),
            format!("{:.1}", r.details.magnesium),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
