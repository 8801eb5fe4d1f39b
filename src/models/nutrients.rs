use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Absolute amounts of the four tracked nutrients.
///
/// Missing fields deserialize as zero, so callers never need to check for
/// absent values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientTotals {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub omega3: f64,
    /// milligrams
    pub magnesium: f64,
}

impl NutrientTotals {
    pub fn new(calories: f64, protein: f64, omega3: f64, magnesium: f64) -> Self {
        Self {
            calories,
            protein,
            omega3,
            magnesium,
        }
    }

    /// Scale every nutrient by a multiplier.
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            omega3: self.omega3 * multiplier,
            magnesium: self.magnesium * multiplier,
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            omega3: self.omega3 + other.omega3,
            magnesium: self.magnesium + other.magnesium,
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, other: NutrientTotals) {
        *self = *self + other;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = NutrientTotals>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), Add::add)
    }
}

/// Anything that carries an amount of the tracked nutrients.
pub trait NutrientSource {
    fn nutrients(&self) -> NutrientTotals;
}

impl NutrientSource for NutrientTotals {
    fn nutrients(&self) -> NutrientTotals {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let totals: NutrientTotals = serde_json::from_str(r#"{"calories": 120}"#).unwrap();
        assert_eq!(totals, NutrientTotals::new(120.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: NutrientTotals = Vec::<NutrientTotals>::new().into_iter().sum();
        assert_eq!(total, NutrientTotals::default());
    }

    #[test]
    fn test_scale() {
        let half = NutrientTotals::new(200.0, 20.0, 2.0, 100.0).scale(0.5);
        assert_eq!(half, NutrientTotals::new(100.0, 10.0, 1.0, 50.0));
    }
}
