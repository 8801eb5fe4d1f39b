use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::nutrients::NutrientTotals;

/// Number of planned meals per day (breakfast, lunch, dinner).
pub const MEALS_PER_DAY: usize = 3;

/// One planned meal: the selected foods and their summed nutrients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    #[serde(default)]
    pub foods: Vec<String>,

    #[serde(flatten)]
    pub totals: NutrientTotals,
}

/// A planned day with its three meal slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number within the plan.
    pub day: u32,
    pub breakfast: MealSlot,
    pub lunch: MealSlot,
    pub dinner: MealSlot,
}

impl DayPlan {
    pub fn slots(&self) -> [(&'static str, &MealSlot); MEALS_PER_DAY] {
        [
            ("breakfast", &self.breakfast),
            ("lunch", &self.lunch),
            ("dinner", &self.dinner),
        ]
    }

    /// Summed nutrients over the three slots.
    pub fn totals(&self) -> NutrientTotals {
        self.slots().iter().map(|(_, slot)| slot.totals).sum()
    }
}

/// An ordered sequence of planned days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    /// Meals the plan expects to be eaten.
    pub fn expected_meals(&self) -> usize {
        self.days.len() * MEALS_PER_DAY
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// A generated plan as kept by the state store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: u32,
    pub plan_name: String,
    pub created_on: NaiveDate,
    pub is_active: bool,
    pub plan_data: MealPlan,
}
