pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod state;

pub use config::{load_config, AppConfig};
pub use error::{NutriError, Result};
pub use models::{
    BrainScoreResult, ConsumedMeal, FoodItem, FoodPortion, MealPlan, MealType, NutrientTotals,
    NutritionTargets, UserProfile,
};
