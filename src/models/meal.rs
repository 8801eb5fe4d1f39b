use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::NutriError;
use crate::models::nutrients::{NutrientSource, NutrientTotals};

/// Default portion size when a logged food has no explicit quantity.
pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(NutriError::InvalidInput(format!(
                "Unknown meal type '{}' (expected breakfast, lunch, dinner or snack)",
                other
            ))),
        }
    }
}

fn default_quantity() -> f64 {
    DEFAULT_PORTION_GRAMS
}

/// A single food eaten as part of a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPortion {
    pub food_name: String,

    /// Grams eaten.
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

impl FoodPortion {
    pub fn new(food_name: &str, quantity: f64) -> Self {
        Self {
            food_name: food_name.to_string(),
            quantity,
        }
    }
}

impl FromStr for FoodPortion {
    type Err = NutriError;

    /// Parses `NAME` or `NAME:GRAMS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, quantity) = match s.rsplit_once(':') {
            Some((name, grams)) => {
                let grams: f64 = grams.trim().parse().map_err(|_| {
                    NutriError::InvalidInput(format!("Invalid quantity in '{}'", s))
                })?;
                (name, grams)
            }
            None => (s, DEFAULT_PORTION_GRAMS),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(NutriError::InvalidInput("Empty food name".to_string()));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(NutriError::InvalidInput(format!(
                "Quantity must be positive in '{}'",
                s
            )));
        }

        Ok(FoodPortion::new(name, quantity))
    }
}

/// A meal that was actually eaten, with nutrients already scaled by quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedMeal {
    pub meal_date: NaiveDate,

    pub meal_type: MealType,

    #[serde(default)]
    pub food_items: Vec<FoodPortion>,

    #[serde(flatten)]
    pub nutrients: NutrientTotals,
}

impl ConsumedMeal {
    pub fn new(
        meal_date: NaiveDate,
        meal_type: MealType,
        food_items: Vec<FoodPortion>,
        nutrients: NutrientTotals,
    ) -> Self {
        Self {
            meal_date,
            meal_type,
            food_items,
            nutrients,
        }
    }
}

impl NutrientSource for ConsumedMeal {
    fn nutrients(&self) -> NutrientTotals {
        self.nutrients
    }
}
