use tracing::{debug, warn};

use crate::models::{
    BrainScoreResult, ConsumedMeal, MealPlan, NutrientSource, NutrientTotals, NutritionTargets,
};
use crate::scoring::config::ScoringConfig;
use crate::scoring::constants::*;

/// Per-nutrient sub-scores before weighting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientSubScores {
    pub calories: f64,
    pub protein: f64,
    pub omega3: f64,
    pub magnesium: f64,
}

/// Sum nutrients over any collection of records.
///
/// Order-independent; an empty collection yields all-zero totals.
pub fn aggregate_totals<'a, T, I>(items: I) -> NutrientTotals
where
    T: NutrientSource + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(NutrientSource::nutrients).sum()
}

/// Clamp a score into [SCORE_MIN, SCORE_MAX].
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Round to one decimal place, halves away from zero.
#[inline]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A target usable as a divisor: present, finite and strictly positive.
fn usable_target(target: Option<f64>) -> Option<f64> {
    target.filter(|t| t.is_finite() && *t > 0.0)
}

/// Percentage of target reached, clamped to [0, cap * 100].
///
/// A degenerate target makes the nutrient unattainable, so it scores 0.
fn sub_score(value: f64, target: Option<f64>, cap: f64) -> f64 {
    let Some(target) = usable_target(target) else {
        return 0.0;
    };

    let ratio = value / target * 100.0;
    if !ratio.is_finite() {
        return 0.0;
    }

    ratio.clamp(0.0, cap * 100.0)
}

/// Compute each nutrient's capped sub-score.
pub fn nutrient_sub_scores(
    totals: &NutrientTotals,
    targets: &NutritionTargets,
    config: &ScoringConfig,
) -> NutrientSubScores {
    let caps = &config.cap_factors;
    NutrientSubScores {
        calories: sub_score(totals.calories, targets.calories_target, caps.calories),
        protein: sub_score(totals.protein, targets.protein_target, caps.protein),
        omega3: sub_score(totals.omega3, targets.omega3_target, caps.omega3),
        magnesium: sub_score(totals.magnesium, targets.magnesium_target, caps.magnesium),
    }
}

/// Whether calorie intake exceeds the configured multiple of the target.
///
/// Without a usable calorie target there is nothing to exceed.
pub fn exceeds_calorie_limit(
    totals: &NutrientTotals,
    targets: &NutritionTargets,
    config: &ScoringConfig,
) -> bool {
    match usable_target(targets.calories_target) {
        Some(target) => totals.calories > target * config.calorie_excess.ratio,
        None => false,
    }
}

/// Calculate the adherence score.
///
/// Consumed meal count as a percentage of the plan's expected meals, capped
/// at 100. No plan, or a plan without days, scores 0.
pub fn calculate_adherence_score(consumed_meals: &[ConsumedMeal], plan: Option<&MealPlan>) -> f64 {
    let expected = plan.map(MealPlan::expected_meals).unwrap_or(0);
    if expected == 0 {
        return 0.0;
    }

    let raw = consumed_meals.len() as f64 / expected as f64 * 100.0;
    raw.min(SCORE_MAX)
}

/// Calculate the nutrition score.
///
/// Formula: clamp(sum(weight_n * sub_score_n) / 100 * 100 - calorie_penalty, 0, 100)
pub fn calculate_nutrition_score(
    consumed_meals: &[ConsumedMeal],
    targets: &NutritionTargets,
    config: &ScoringConfig,
) -> f64 {
    let totals = aggregate_totals(consumed_meals);
    nutrition_score_from_totals(&totals, targets, config)
}

/// Nutrition score for already-aggregated totals.
pub fn nutrition_score_from_totals(
    totals: &NutrientTotals,
    targets: &NutritionTargets,
    config: &ScoringConfig,
) -> f64 {
    let subs = nutrient_sub_scores(totals, targets, config);
    let weights = &config.nutrition_weights;

    let weighted = (subs.calories * weights.calories
        + subs.protein * weights.protein
        + subs.omega3 * weights.omega3
        + subs.magnesium * weights.magnesium)
        / 100.0;

    let penalty = if exceeds_calorie_limit(totals, targets, config) {
        config.calorie_excess.penalty
    } else {
        0.0
    };

    let score = weighted * 100.0 - penalty;
    debug!(?subs, weighted, penalty, "nutrition score components");

    clamp_score(score)
}

/// Map 1-10 cognitive feedback onto [0, 100].
///
/// Out-of-range input is clamped rather than rejected.
pub fn calculate_cognitive_score(cognitive_feedback: i32) -> f64 {
    if !(COGNITIVE_FEEDBACK_MIN..=COGNITIVE_FEEDBACK_MAX).contains(&cognitive_feedback) {
        warn!(
            cognitive_feedback,
            "cognitive feedback outside {}-{}, clamping",
            COGNITIVE_FEEDBACK_MIN,
            COGNITIVE_FEEDBACK_MAX
        );
    }

    clamp_score(cognitive_feedback as f64 / COGNITIVE_FEEDBACK_MAX as f64 * 100.0)
}

/// Calculate the daily brain score.
///
/// Formula: adherence * 0.4 + nutrition * 0.4 + cognitive * 0.2, each
/// component in [0, 100]. All reported scores are rounded to one decimal.
pub fn calculate_brain_score(
    consumed_meals: &[ConsumedMeal],
    plan: Option<&MealPlan>,
    targets: &NutritionTargets,
    cognitive_feedback: i32,
    config: &ScoringConfig,
) -> BrainScoreResult {
    let totals = aggregate_totals(consumed_meals);

    let adherence = calculate_adherence_score(consumed_meals, plan);
    let nutrition = nutrition_score_from_totals(&totals, targets, config);
    let cognitive = calculate_cognitive_score(cognitive_feedback);

    let weights = &config.daily_weights;
    let daily = clamp_score(
        adherence * weights.adherence
            + nutrition * weights.nutrition
            + cognitive * weights.cognitive,
    );

    debug!(
        meals = consumed_meals.len(),
        adherence, nutrition, cognitive, daily, "brain score computed"
    );

    BrainScoreResult {
        daily_score: round_one_decimal(daily),
        adherence_score: round_one_decimal(adherence),
        nutrition_score: round_one_decimal(nutrition),
        cognitive_score: round_one_decimal(cognitive),
        cognitive_feedback,
        details: totals,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{DayPlan, MealSlot, MealType};

    fn meal(calories: f64, protein: f64, omega3: f64, magnesium: f64) -> ConsumedMeal {
        ConsumedMeal::new(
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            MealType::Lunch,
            vec![],
            NutrientTotals::new(calories, protein, omega3, magnesium),
        )
    }

    fn plan_with_days(days: u32) -> MealPlan {
        MealPlan::new(
            (1..=days)
                .map(|day| DayPlan {
                    day,
                    breakfast: MealSlot::default(),
                    lunch: MealSlot::default(),
                    dinner: MealSlot::default(),
                })
                .collect(),
        )
    }

    fn reference_targets() -> NutritionTargets {
        NutritionTargets::new(2000.0, 80.0, 2.0, 300.0)
    }

    #[test]
    fn test_aggregate_totals() {
        let meals = vec![meal(500.0, 30.0, 1.0, 100.0), meal(700.0, 20.0, 0.5, 50.0)];
        let totals = aggregate_totals(&meals);
        assert_eq!(totals, NutrientTotals::new(1200.0, 50.0, 1.5, 150.0));
    }

    #[test]
    fn test_aggregate_totals_empty() {
        let meals: Vec<ConsumedMeal> = vec![];
        assert_eq!(aggregate_totals(&meals), NutrientTotals::default());
    }

    #[test]
    fn test_adherence_without_plan() {
        let meals = vec![meal(500.0, 30.0, 1.0, 100.0)];
        assert_eq!(calculate_adherence_score(&meals, None), 0.0);
        assert_eq!(calculate_adherence_score(&meals, Some(&MealPlan::default())), 0.0);
    }

    #[test]
    fn test_adherence_no_meals_with_plan() {
        assert_eq!(calculate_adherence_score(&[], Some(&plan_with_days(7))), 0.0);
    }

    #[test]
    fn test_adherence_partial() {
        let meals: Vec<ConsumedMeal> = (0..10).map(|_| meal(100.0, 0.0, 0.0, 0.0)).collect();
        let score = calculate_adherence_score(&meals, Some(&plan_with_days(7)));
        assert!((score - 1000.0 / 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_adherence_capped() {
        let meals: Vec<ConsumedMeal> = (0..5).map(|_| meal(100.0, 0.0, 0.0, 0.0)).collect();
        let score = calculate_adherence_score(&meals, Some(&plan_with_days(1)));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_sub_score_caps() {
        assert_eq!(sub_score(3000.0, Some(2000.0), 1.2), 120.0);
        assert_eq!(sub_score(10.0, Some(2.0), 2.0), 200.0);
        assert_eq!(sub_score(-5.0, Some(2.0), 2.0), 0.0);
    }

    #[test]
    fn test_sub_score_degenerate_target() {
        assert_eq!(sub_score(50.0, None, 1.5), 0.0);
        assert_eq!(sub_score(50.0, Some(0.0), 1.5), 0.0);
        assert_eq!(sub_score(50.0, Some(-10.0), 1.5), 0.0);
        assert_eq!(sub_score(50.0, Some(f64::NAN), 1.5), 0.0);
    }

    #[test]
    fn test_nutrition_example_caps_at_100() {
        let meals = vec![meal(2000.0, 90.0, 2.0, 300.0)];
        let config = ScoringConfig::default();

        let subs = nutrient_sub_scores(&aggregate_totals(&meals), &reference_targets(), &config);
        assert!((subs.calories - 100.0).abs() < 1e-9);
        assert!((subs.protein - 112.5).abs() < 1e-9);
        assert!((subs.omega3 - 100.0).abs() < 1e-9);
        assert!((subs.magnesium - 100.0).abs() < 1e-9);

        let score = calculate_nutrition_score(&meals, &reference_targets(), &config);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_calorie_excess_penalty() {
        let config = ScoringConfig::default();
        // 2500 kcal > 2400 limit: calories capped at 120, penalty -10
        let meals = vec![meal(2500.0, 40.0, 1.0, 150.0)];
        let expected = 120.0 * 0.2 + 50.0 * 0.3 + 50.0 * 0.3 + 50.0 * 0.2 - 10.0;
        let score = calculate_nutrition_score(&meals, &reference_targets(), &config);
        assert!((score - expected).abs() < 1e-9);

        // Exactly at 120% is not an excess
        let at_limit = vec![meal(2400.0, 40.0, 1.0, 150.0)];
        let expected = 120.0 * 0.2 + 50.0 * 0.3 + 50.0 * 0.3 + 50.0 * 0.2;
        let score = calculate_nutrition_score(&at_limit, &reference_targets(), &config);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_penalty_never_drives_below_zero() {
        let targets = NutritionTargets {
            calories_target: Some(100.0),
            ..Default::default()
        };
        let meals = vec![meal(1000.0, 0.0, 0.0, 0.0)];
        let config = ScoringConfig::default();
        // 120 * 0.2 = 24 - 10 = 14
        let score = calculate_nutrition_score(&meals, &targets, &config);
        assert!((score - 14.0).abs() < 1e-9);

        let stingy = ScoringConfig {
            calorie_excess: crate::scoring::config::CalorieExcess {
                ratio: 1.2,
                penalty: 50.0,
            },
            ..Default::default()
        };
        assert_eq!(calculate_nutrition_score(&meals, &targets, &stingy), 0.0);
    }

    #[test]
    fn test_missing_targets_score_zero() {
        let meals = vec![meal(2000.0, 90.0, 2.0, 300.0)];
        let score =
            calculate_nutrition_score(&meals, &NutritionTargets::default(), &ScoringConfig::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_cognitive_score_clamped() {
        assert_eq!(calculate_cognitive_score(8), 80.0);
        assert_eq!(calculate_cognitive_score(15), 100.0);
        assert_eq!(calculate_cognitive_score(-3), 0.0);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(75.04), 75.0);
        assert_eq!(round_one_decimal(47.619), 47.6);
        assert_eq!(round_one_decimal(0.25), 0.3);
    }

    #[test]
    fn test_brain_score_example() {
        let meals: Vec<ConsumedMeal> = (0..10).map(|_| meal(200.0, 9.0, 0.2, 30.0)).collect();
        let result = calculate_brain_score(
            &meals,
            Some(&plan_with_days(7)),
            &reference_targets(),
            8,
            &ScoringConfig::default(),
        );

        assert_eq!(result.adherence_score, 47.6);
        assert_eq!(result.nutrition_score, 100.0);
        assert_eq!(result.cognitive_score, 80.0);
        assert_eq!(result.daily_score, 75.0);
        assert_eq!(result.cognitive_feedback, 8);
        assert!((result.details.calories - 2000.0).abs() < 1e-9);
    }
}
