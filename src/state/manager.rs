use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{NutriError, Result};
use crate::models::{
    ConsumedMeal, FoodItem, FoodPortion, MealType, NutrientTotals, NutritionTargets, PlanRecord,
    ScoreRecord, UserProfile,
};
use crate::planner::{generate_weekly_plan, PlannerConfig};
use crate::scoring::{
    analyze_trend, calculate_brain_score, score_stats, ScoreStats, ScoringConfig, Trend,
    DEFAULT_COGNITIVE_FEEDBACK,
};

/// Everything the tracker persists for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub foods: Vec<FoodItem>,
    pub profile: UserProfile,
    pub targets: NutritionTargets,
    pub plans: Vec<PlanRecord>,
    pub meals: Vec<ConsumedMeal>,
    pub scores: Vec<ScoreRecord>,
}

/// Manages the food catalog, plans, logged meals and daily scores.
pub struct StateManager {
    state: AppState,
}

/// Deduplicate foods by exact name, last occurrence wins, keeping first-seen order.
pub(crate) fn dedupe_foods(foods: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<FoodItem> = Vec::with_capacity(foods.len());
    for food in foods {
        match index.get(&food.food_name) {
            Some(&i) => unique[i] = food,
            None => {
                index.insert(food.food_name.clone(), unique.len());
                unique.push(food);
            }
        }
    }
    unique
}

impl StateManager {
    /// Create a manager; scores are kept sorted with one entry per date.
    pub fn new(mut state: AppState) -> Self {
        state.scores.sort_by_key(|s| s.score_date);
        state.scores.dedup_by_key(|s| s.score_date);
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ── Catalog ─────────────────────────────────────────────────────────────

    pub fn foods(&self) -> &[FoodItem] {
        &self.state.foods
    }

    /// Replace the catalog.
    pub fn set_foods(&mut self, foods: Vec<FoodItem>) {
        self.state.foods = dedupe_foods(foods);
    }

    /// Look up a food by exact name.
    pub fn get_food(&self, name: &str) -> Option<&FoodItem> {
        self.state.foods.iter().find(|f| f.food_name == name)
    }

    // ── Profile and targets ─────────────────────────────────────────────────

    pub fn profile(&self) -> &UserProfile {
        &self.state.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.state.profile
    }

    pub fn targets(&self) -> &NutritionTargets {
        &self.state.targets
    }

    pub fn targets_mut(&mut self) -> &mut NutritionTargets {
        &mut self.state.targets
    }

    // ── Plans ───────────────────────────────────────────────────────────────

    /// Generate a weekly plan and make it the only active one.
    pub fn generate_plan<R: Rng + ?Sized>(
        &mut self,
        plan_name: Option<String>,
        created_on: NaiveDate,
        config: &PlannerConfig,
        rng: &mut R,
    ) -> &PlanRecord {
        let plan_data = generate_weekly_plan(&self.state.profile, &self.state.foods, config, rng);

        for plan in &mut self.state.plans {
            plan.is_active = false;
        }

        let id = self.state.plans.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let plan_name = plan_name.unwrap_or_else(|| format!("Plan of {}", created_on));
        info!(id, %plan_name, "stored new active plan");

        self.state.plans.push(PlanRecord {
            id,
            plan_name,
            created_on,
            is_active: true,
            plan_data,
        });

        &self.state.plans[self.state.plans.len() - 1]
    }

    /// Most recently created active plan, if any.
    pub fn active_plan(&self) -> Option<&PlanRecord> {
        self.state
            .plans
            .iter()
            .filter(|p| p.is_active)
            .max_by_key(|p| (p.created_on, p.id))
    }

    // ── Meals ───────────────────────────────────────────────────────────────

    /// Nutrients of a list of portions, scaled from per-100 g catalog values.
    pub fn meal_nutrition(&self, portions: &[FoodPortion]) -> Result<NutrientTotals> {
        portions
            .iter()
            .map(|portion| {
                self.get_food(&portion.food_name)
                    .map(|food| food.nutrients_for(portion.quantity))
                    .ok_or_else(|| NutriError::FoodNotFound(portion.food_name.clone()))
            })
            .sum()
    }

    /// Record a consumed meal and refresh that day's score.
    pub fn log_meal(
        &mut self,
        meal_date: NaiveDate,
        meal_type: MealType,
        portions: Vec<FoodPortion>,
        config: &ScoringConfig,
    ) -> Result<(ConsumedMeal, ScoreRecord)> {
        if portions.is_empty() {
            return Err(NutriError::InvalidInput(
                "A meal needs at least one food".to_string(),
            ));
        }

        let nutrients = self.meal_nutrition(&portions)?;
        let meal = ConsumedMeal::new(meal_date, meal_type, portions, nutrients);
        self.state.meals.push(meal.clone());
        info!(%meal_date, %meal_type, calories = nutrients.calories, "recorded meal");

        let score = self.calculate_score(meal_date, None, config);
        Ok((meal, score))
    }

    /// Meals eaten on `date`, in logging order.
    pub fn meals_on(&self, date: NaiveDate) -> Vec<ConsumedMeal> {
        self.state
            .meals
            .iter()
            .filter(|m| m.meal_date == date)
            .cloned()
            .collect()
    }

    // ── Scores ──────────────────────────────────────────────────────────────

    /// Score `date` and store the result, replacing any earlier score.
    ///
    /// Without explicit feedback, the day's previously reported feedback is
    /// reused, falling back to the default.
    pub fn calculate_score(
        &mut self,
        date: NaiveDate,
        cognitive_feedback: Option<i32>,
        config: &ScoringConfig,
    ) -> ScoreRecord {
        let feedback = cognitive_feedback
            .or_else(|| self.score_on(date).map(|s| s.result.cognitive_feedback))
            .unwrap_or(DEFAULT_COGNITIVE_FEEDBACK);

        let meals = self.meals_on(date);
        let plan = self.active_plan().map(|p| &p.plan_data);
        let result = calculate_brain_score(&meals, plan, &self.state.targets, feedback, config);

        let record = ScoreRecord {
            score_date: date,
            result,
        };
        self.upsert_score(record.clone());
        record
    }

    fn upsert_score(&mut self, record: ScoreRecord) {
        match self
            .state
            .scores
            .binary_search_by_key(&record.score_date, |s| s.score_date)
        {
            Ok(i) => self.state.scores[i] = record,
            Err(i) => self.state.scores.insert(i, record),
        }
    }

    pub fn score_on(&self, date: NaiveDate) -> Option<&ScoreRecord> {
        self.state.scores.iter().find(|s| s.score_date == date)
    }

    /// Scores in date order, optionally bounded (inclusive) on either side.
    pub fn scores_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&ScoreRecord> {
        let mut scores: Vec<&ScoreRecord> = self
            .state
            .scores
            .iter()
            .filter(|s| from.is_none_or(|from| s.score_date >= from))
            .filter(|s| to.is_none_or(|to| s.score_date <= to))
            .collect();
        scores.sort_by_key(|s| s.score_date);
        scores
    }

    fn ordered_daily_scores(&self) -> Vec<f64> {
        self.scores_between(None, None)
            .into_iter()
            .map(ScoreRecord::daily_score)
            .collect()
    }

    pub fn trend(&self) -> Trend {
        analyze_trend(&self.ordered_daily_scores())
    }

    pub fn stats(&self) -> ScoreStats {
        score_stats(&self.ordered_daily_scores())
    }
}
