use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{DayPlan, FoodItem, MealPlan, MealSlot, UserProfile};
use crate::planner::constants::*;
use crate::scoring::aggregate_totals;

/// Configurable food classification for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub protein_rich_threshold: f64,
    pub vegetable_category: String,
    pub grain_category: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            protein_rich_threshold: PROTEIN_RICH_THRESHOLD,
            vegetable_category: VEGETABLE_CATEGORY.to_string(),
            grain_category: GRAIN_CATEGORY.to_string(),
        }
    }
}

/// Catalog split into the three pools a meal draws from.
///
/// A food may sit in more than one pool (e.g. a protein-rich grain).
#[derive(Debug, Default)]
pub struct MealCandidates<'a> {
    pub protein_rich: Vec<&'a FoodItem>,
    pub vegetables: Vec<&'a FoodItem>,
    pub grains: Vec<&'a FoodItem>,
}

impl<'a> MealCandidates<'a> {
    pub fn from_foods(foods: &[&'a FoodItem], config: &PlannerConfig) -> Self {
        let mut candidates = MealCandidates::default();
        for &food in foods {
            if food.protein_per_100g > config.protein_rich_threshold {
                candidates.protein_rich.push(food);
            }
            if food.food_category == config.vegetable_category {
                candidates.vegetables.push(food);
            }
            if food.food_category == config.grain_category {
                candidates.grains.push(food);
            }
        }
        candidates
    }
}

/// Foods not excluded by the profile's allergies or aversions.
pub fn filter_foods<'a>(foods: &'a [FoodItem], profile: &UserProfile) -> Vec<&'a FoodItem> {
    foods
        .iter()
        .filter(|f| !profile.excludes(&f.food_name))
        .collect()
}

/// Select one meal: a random protein-rich food, vegetable and grain.
///
/// An empty pool simply contributes nothing to the meal.
pub fn select_meal<R: Rng + ?Sized>(candidates: &MealCandidates, rng: &mut R) -> MealSlot {
    let picks: Vec<&FoodItem> = [
        &candidates.protein_rich,
        &candidates.vegetables,
        &candidates.grains,
    ]
    .into_iter()
    .filter_map(|pool| pool.choose(&mut *rng).copied())
    .collect();

    MealSlot {
        foods: picks.iter().map(|f| f.food_name.clone()).collect(),
        totals: aggregate_totals(picks.iter().copied()),
    }
}

/// Generate a 7-day plan of breakfast, lunch and dinner.
///
/// Selection is uniform-random within each pool; pass a seeded RNG for
/// reproducible plans.
pub fn generate_weekly_plan<R: Rng + ?Sized>(
    profile: &UserProfile,
    foods: &[FoodItem],
    config: &PlannerConfig,
    rng: &mut R,
) -> MealPlan {
    let allowed = filter_foods(foods, profile);
    let candidates = MealCandidates::from_foods(&allowed, config);

    debug!(
        catalog = foods.len(),
        allowed = allowed.len(),
        protein_rich = candidates.protein_rich.len(),
        vegetables = candidates.vegetables.len(),
        grains = candidates.grains.len(),
        "generating weekly plan"
    );

    if candidates.protein_rich.is_empty()
        && candidates.vegetables.is_empty()
        && candidates.grains.is_empty()
    {
        warn!("no food matches any meal pool, plan will be empty");
    }

    let days = (1..=PLAN_DAYS)
        .map(|day| DayPlan {
            day,
            breakfast: select_meal(&candidates, rng),
            lunch: select_meal(&candidates, rng),
            dinner: select_meal(&candidates, rng),
        })
        .collect();

    MealPlan::new(days)
}
