use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::scoring::constants::*;

/// Weight of each nutrient in the nutrition score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionWeights {
    pub calories: f64,
    pub protein: f64,
    pub omega3: f64,
    pub magnesium: f64,
}

impl Default for NutritionWeights {
    fn default() -> Self {
        Self {
            calories: CALORIES_WEIGHT,
            protein: PROTEIN_WEIGHT,
            omega3: OMEGA3_WEIGHT,
            magnesium: MAGNESIUM_WEIGHT,
        }
    }
}

impl NutritionWeights {
    fn values(&self) -> [f64; 4] {
        [self.calories, self.protein, self.omega3, self.magnesium]
    }
}

/// Per-nutrient ceiling on overshoot credit, as a multiple of the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapFactors {
    pub calories: f64,
    pub protein: f64,
    pub omega3: f64,
    pub magnesium: f64,
}

impl Default for CapFactors {
    fn default() -> Self {
        Self {
            calories: CALORIES_CAP,
            protein: PROTEIN_CAP,
            omega3: OMEGA3_CAP,
            magnesium: MAGNESIUM_CAP,
        }
    }
}

impl CapFactors {
    fn values(&self) -> [f64; 4] {
        [self.calories, self.protein, self.omega3, self.magnesium]
    }
}

/// Weight of each component in the daily score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyWeights {
    pub adherence: f64,
    pub nutrition: f64,
    pub cognitive: f64,
}

impl Default for DailyWeights {
    fn default() -> Self {
        Self {
            adherence: ADHERENCE_WEIGHT,
            nutrition: NUTRITION_WEIGHT,
            cognitive: COGNITIVE_WEIGHT,
        }
    }
}

impl DailyWeights {
    fn values(&self) -> [f64; 3] {
        [self.adherence, self.nutrition, self.cognitive]
    }
}

/// Tunable parameters of the scoring functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub nutrition_weights: NutritionWeights,
    pub cap_factors: CapFactors,
    pub daily_weights: DailyWeights,
    pub calorie_excess: CalorieExcess,
}

/// Penalty applied when calorie intake overshoots the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalorieExcess {
    /// Multiple of the calorie target above which the penalty applies.
    pub ratio: f64,
    /// Points deducted once from the nutrition score.
    pub penalty: f64,
}

impl Default for CalorieExcess {
    fn default() -> Self {
        Self {
            ratio: CALORIE_EXCESS_RATIO,
            penalty: CALORIE_EXCESS_PENALTY,
        }
    }
}

fn check_weights(label: &str, weights: &[f64]) -> Result<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(NutriError::InvalidConfig(format!(
            "{} must be finite and non-negative",
            label
        )));
    }

    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(NutriError::InvalidConfig(format!(
            "{} must sum to 1.0 (got {})",
            label, sum
        )));
    }

    Ok(())
}

impl ScoringConfig {
    /// Reject weight sets that do not sum to 1.0 and negative caps or penalties.
    pub fn validate(&self) -> Result<()> {
        check_weights("nutrition_weights", &self.nutrition_weights.values())?;
        check_weights("daily_weights", &self.daily_weights.values())?;

        if self
            .cap_factors
            .values()
            .iter()
            .any(|c| !c.is_finite() || *c < 0.0)
        {
            return Err(NutriError::InvalidConfig(
                "cap_factors must be finite and non-negative".to_string(),
            ));
        }

        let excess = &self.calorie_excess;
        if !excess.ratio.is_finite() || excess.ratio < 0.0 {
            return Err(NutriError::InvalidConfig(
                "calorie_excess.ratio must be finite and non-negative".to_string(),
            ));
        }
        if !excess.penalty.is_finite() || excess.penalty < 0.0 {
            return Err(NutriError::InvalidConfig(
                "calorie_excess.penalty must be finite and non-negative".to_string(),
            ));
        }

        Ok(())
    }
}
