pub mod constants;
pub mod generation;

pub use constants::*;
pub use generation::{
    filter_foods, generate_weekly_plan, select_meal, MealCandidates, PlannerConfig,
};
