pub mod food;
pub mod meal;
pub mod nutrients;
pub mod plan;
pub mod profile;
pub mod score;

pub use food::FoodItem;
pub use meal::{ConsumedMeal, FoodPortion, MealType, DEFAULT_PORTION_GRAMS};
pub use nutrients::{NutrientSource, NutrientTotals};
pub use plan::{DayPlan, MealPlan, MealSlot, PlanRecord, MEALS_PER_DAY};
pub use profile::{NutritionTargets, UserProfile};
pub use score::{BrainScoreResult, ScoreRecord};
