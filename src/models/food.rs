use serde::{Deserialize, Deserializer, Serialize};

use crate::models::nutrients::{NutrientSource, NutrientTotals};

/// Missing nutrient values count as 0, whether the field is absent, null or
/// an empty CSV cell.
fn zero_if_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A catalog food with nutrient values per 100 g.
///
/// Names are matched case-sensitively everywhere: the catalog is reference
/// data and its spelling is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub food_name: String,

    #[serde(default)]
    pub food_category: String,

    #[serde(default, deserialize_with = "zero_if_blank")]
    pub calories_per_100g: f64,

    #[serde(default, deserialize_with = "zero_if_blank")]
    pub protein_per_100g: f64,

    #[serde(default, deserialize_with = "zero_if_blank")]
    pub omega3_per_100g: f64,

    #[serde(default, deserialize_with = "zero_if_blank")]
    pub magnesium_per_100g: f64,
}

impl FoodItem {
    pub fn new(
        name: &str,
        category: &str,
        calories: f64,
        protein: f64,
        omega3: f64,
        magnesium: f64,
    ) -> Self {
        Self {
            food_name: name.to_string(),
            food_category: category.to_string(),
            calories_per_100g: calories,
            protein_per_100g: protein,
            omega3_per_100g: omega3,
            magnesium_per_100g: magnesium,
        }
    }

    /// Nutrients contained in `grams` of this food.
    pub fn nutrients_for(&self, grams: f64) -> NutrientTotals {
        self.nutrients().scale(grams / 100.0)
    }

    /// Basic validation: non-empty name and non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        !self.food_name.trim().is_empty()
            && self.calories_per_100g >= 0.0
            && self.protein_per_100g >= 0.0
            && self.omega3_per_100g >= 0.0
            && self.magnesium_per_100g >= 0.0
    }
}

impl NutrientSource for FoodItem {
    /// Per-100 g values, i.e. the contribution of one default portion.
    fn nutrients(&self) -> NutrientTotals {
        NutrientTotals::new(
            self.calories_per_100g,
            self.protein_per_100g,
            self.omega3_per_100g,
            self.magnesium_per_100g,
        )
    }
}
