use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, FoodPortion, DEFAULT_PORTION_GRAMS};
use crate::scoring::{COGNITIVE_FEEDBACK_MAX, COGNITIVE_FEEDBACK_MIN, DEFAULT_COGNITIVE_FEEDBACK};

/// Minimum Jaro-Winkler similarity for a fuzzy food-name suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum suggestions offered for an ambiguous name.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for the day's cognitive self-assessment.
pub fn prompt_cognitive_feedback() -> Result<i32> {
    let values: Vec<i32> = (COGNITIVE_FEEDBACK_MIN..=COGNITIVE_FEEDBACK_MAX).collect();
    let options: Vec<String> = values
        .iter()
        .map(|v| match *v {
            COGNITIVE_FEEDBACK_MIN => format!("{} (foggy)", v),
            COGNITIVE_FEEDBACK_MAX => format!("{} (razor sharp)", v),
            _ => v.to_string(),
        })
        .collect();

    let default = values
        .iter()
        .position(|v| *v == DEFAULT_COGNITIVE_FEEDBACK)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("How sharp did you feel today?")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(values[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a portion size in grams.
fn prompt_quantity(food_name: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("How many grams of {}?", food_name))
        .default(DEFAULT_PORTION_GRAMS.to_string())
        .interact_text()?;

    let grams: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !grams.is_finite() || grams <= 0.0 {
        return Err(NutriError::InvalidInput(
            "Quantity must be positive".to_string(),
        ));
    }

    Ok(grams)
}

/// Resolve typed input to a catalog name, asking the user when unsure.
fn resolve_food_name(input: &str, foods: &[FoodItem]) -> Result<Option<String>> {
    // Exact match first (case-insensitive)
    if let Some(food) = foods
        .iter()
        .find(|f| f.food_name.to_lowercase() == input.to_lowercase())
    {
        return Ok(Some(food.food_name.clone()));
    }

    let mut candidates: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.food_name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    match candidates.as_slice() {
        [] => {
            println!("No matching food found for '{}'", input);
            Ok(None)
        }
        [(food, _)] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", food.food_name), true)?;
            Ok(confirm.then(|| food.food_name.clone()))
        }
        _ => {
            let options: Vec<String> = candidates
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(|(f, _)| f.food_name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            Ok(options.get(selection).cloned())
        }
    }
}

/// Collect the foods of a meal interactively, with fuzzy name matching.
pub fn prompt_food_portions(foods: &[FoodItem]) -> Result<Vec<FoodPortion>> {
    let mut portions = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food you ate (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(name) = resolve_food_name(input, foods)? {
            let grams = prompt_quantity(&name)?;
            println!("Added: {} ({:.0} g)", name, grams);
            portions.push(FoodPortion::new(&name, grams));
        }
    }

    Ok(portions)
}
