use serde::{Deserialize, Serialize};

/// Per-user daily nutrient goals. A missing target scores that nutrient as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionTargets {
    pub calories_target: Option<f64>,
    pub protein_target: Option<f64>,
    pub omega3_target: Option<f64>,
    pub magnesium_target: Option<f64>,
}

impl NutritionTargets {
    pub fn new(calories: f64, protein: f64, omega3: f64, magnesium: f64) -> Self {
        Self {
            calories_target: Some(calories),
            protein_target: Some(protein),
            omega3_target: Some(omega3),
            magnesium_target: Some(magnesium),
        }
    }
}

/// User profile. Only the allergy and aversion lists affect planning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity_level: Option<String>,
    pub allergies: Vec<String>,
    pub food_aversions: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub brain_goals: Vec<String>,
    pub stress_level: Option<u8>,
    pub sleep_hours: Option<f64>,
}

impl UserProfile {
    /// Whether a food is excluded by an allergy or aversion (exact name match).
    pub fn excludes(&self, food_name: &str) -> bool {
        self.allergies.iter().any(|a| a == food_name)
            || self.food_aversions.iter().any(|a| a == food_name)
    }
}
