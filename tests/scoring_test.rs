#[macro_use]
extern crate assert_float_eq;

use chrono::NaiveDate;

use nutrikal_rs::models::{
    ConsumedMeal, DayPlan, FoodPortion, MealPlan, MealSlot, MealType, NutrientTotals,
    NutritionTargets,
};
use nutrikal_rs::scoring::{
    analyze_trend, calculate_adherence_score, calculate_brain_score, calculate_nutrition_score,
    nutrient_sub_scores, ScoringConfig, Trend,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn meal(calories: f64, protein: f64, omega3: f64, magnesium: f64) -> ConsumedMeal {
    ConsumedMeal::new(
        day(),
        MealType::Lunch,
        vec![FoodPortion::new("Salmon", 100.0)],
        NutrientTotals::new(calories, protein, omega3, magnesium),
    )
}

fn week_plan() -> MealPlan {
    let days = (1..=7)
        .map(|day| DayPlan {
            day,
            breakfast: MealSlot::default(),
            lunch: MealSlot::default(),
            dinner: MealSlot::default(),
        })
        .collect();
    MealPlan::new(days)
}

fn targets() -> NutritionTargets {
    NutritionTargets::new(2000.0, 80.0, 2.0, 300.0)
}

#[test]
fn test_on_target_day_caps_nutrition_at_100() {
    let meals = vec![meal(2000.0, 90.0, 2.0, 300.0)];
    let score = calculate_nutrition_score(&meals, &targets(), &ScoringConfig::default());
    assert_float_absolute_eq!(score, 100.0, 1e-9);
}

#[test]
fn test_default_caps_bound_each_nutrient() {
    let overshoot = NutrientTotals::new(10_000.0, 500.0, 50.0, 5000.0);
    let subs = nutrient_sub_scores(&overshoot, &targets(), &ScoringConfig::default());

    assert_float_absolute_eq!(subs.calories, 120.0, 1e-9);
    assert_float_absolute_eq!(subs.protein, 150.0, 1e-9);
    assert_float_absolute_eq!(subs.omega3, 200.0, 1e-9);
    assert_float_absolute_eq!(subs.magnesium, 150.0, 1e-9);
}

#[test]
fn test_no_meals_against_plan_is_zero_adherence() {
    assert_eq!(calculate_adherence_score(&[], Some(&week_plan())), 0.0);
}

#[test]
fn test_ten_of_twenty_one_meals_adherence() {
    let meals: Vec<ConsumedMeal> = (0..10).map(|_| meal(200.0, 9.0, 0.2, 30.0)).collect();
    let adherence = calculate_adherence_score(&meals, Some(&week_plan()));
    assert_float_absolute_eq!(adherence, 1000.0 / 21.0, 1e-9);
}

#[test]
fn test_brain_score_combines_components() {
    // Ten meals summing to an on-target day.
    let meals: Vec<ConsumedMeal> = (0..10).map(|_| meal(200.0, 9.0, 0.2, 30.0)).collect();
    let plan = week_plan();

    let result = calculate_brain_score(&meals, Some(&plan), &targets(), 8, &ScoringConfig::default());

    assert_float_absolute_eq!(result.adherence_score, 47.6, 1e-9);
    assert_float_absolute_eq!(result.nutrition_score, 100.0, 1e-9);
    assert_float_absolute_eq!(result.cognitive_score, 80.0, 1e-9);
    assert_float_absolute_eq!(result.daily_score, 75.0, 1e-9);
    assert_eq!(result.cognitive_feedback, 8);
    assert_float_absolute_eq!(result.details.calories, 2000.0, 1e-6);
}

#[test]
fn test_rising_scores_improve() {
    let mut history = vec![78.0; 7];
    history.extend(vec![85.0; 7]);
    assert_eq!(analyze_trend(&history), Trend::Improving);

    history.reverse();
    assert_eq!(analyze_trend(&history), Trend::Declining);
}

#[test]
fn test_scores_stay_in_bounds() {
    let config = ScoringConfig::default();
    let extremes = [
        (vec![], -50),
        (vec![meal(0.0, 0.0, 0.0, 0.0)], 0),
        (vec![meal(10_000.0, 500.0, 50.0, 5000.0)], 11),
        (vec![meal(f64::MAX, f64::MAX, f64::MAX, f64::MAX)], 1000),
    ];

    for (meals, feedback) in extremes {
        for plan in [None, Some(week_plan())] {
            let r = calculate_brain_score(&meals, plan.as_ref(), &targets(), feedback, &config);
            for value in [
                r.daily_score,
                r.adherence_score,
                r.nutrition_score,
                r.cognitive_score,
            ] {
                assert!((0.0..=100.0).contains(&value), "out of range: {}", value);
            }
        }
    }
}

#[test]
fn test_brain_score_is_deterministic() {
    let meals = vec![meal(1500.0, 60.0, 1.0, 200.0), meal(600.0, 25.0, 0.8, 90.0)];
    let plan = week_plan();
    let config = ScoringConfig::default();

    let first = calculate_brain_score(&meals, Some(&plan), &targets(), 6, &config);
    let second = calculate_brain_score(&meals, Some(&plan), &targets(), 6, &config);
    assert_eq!(first, second);
}

#[test]
fn test_config_rejects_unbalanced_weights() {
    let mut config = ScoringConfig::default();
    config.daily_weights.cognitive = 0.5;
    assert!(config.validate().is_err());
}
