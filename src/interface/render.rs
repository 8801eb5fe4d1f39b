use crate::models::{FoodItem, MealSlot, NutrientTotals, NutritionTargets, PlanRecord, ScoreRecord, UserProfile};
use crate::scoring::ScoreStats;

fn format_totals(totals: &NutrientTotals) -> String {
    format!(
        "{:>5.0} kcal | P {:>5.1} g | Ω3 {:>4.2} g | Mg {:>5.0} mg",
        totals.calories, totals.protein, totals.omega3, totals.magnesium
    )
}

fn format_slot(label: &str, slot: &MealSlot) -> String {
    let foods = if slot.foods.is_empty() {
        "(nothing suitable)".to_string()
    } else {
        slot.foods.join(", ")
    };
    format!("  {:<10} {:<40} {}", label, foods, format_totals(&slot.totals))
}

/// Display a weekly plan day by day.
pub fn display_meal_plan(record: &PlanRecord) {
    println!();
    println!(
        "=== {} (#{}, created {}{}) ===",
        record.plan_name,
        record.id,
        record.created_on,
        if record.is_active { ", active" } else { "" }
    );

    if record.plan_data.is_empty() {
        println!("Plan has no days.");
        return;
    }

    for day in &record.plan_data.days {
        println!();
        println!("Day {}", day.day);
        for (label, slot) in day.slots() {
            println!("{}", format_slot(label, slot));
        }
        println!("  {:<10} {:<40} {}", "total", "", format_totals(&day.totals()));
    }
    println!();
}

/// Display one daily score with its breakdown.
pub fn display_score(record: &ScoreRecord) {
    let r = &record.result;
    println!();
    println!("=== Brain score for {} ===", record.score_date);
    println!("Daily score:     {:>5.1}", r.daily_score);
    println!("  Adherence:     {:>5.1}", r.adherence_score);
    println!("  Nutrition:     {:>5.1}", r.nutrition_score);
    println!(
        "  Cognitive:     {:>5.1}  (feedback {}/10)",
        r.cognitive_score, r.cognitive_feedback
    );
    println!("Intake:          {}", format_totals(&r.details));
    println!();
}

/// Display a score history as a table.
pub fn display_scores(scores: &[&ScoreRecord]) {
    if scores.is_empty() {
        println!("No scores recorded.");
        return;
    }

    println!();
    println!(
        "{:<12} {:>7} {:>10} {:>10} {:>10}",
        "date", "daily", "adherence", "nutrition", "cognitive"
    );
    for record in scores {
        let r = &record.result;
        println!(
            "{:<12} {:>7.1} {:>10.1} {:>10.1} {:>10.1}",
            record.score_date.to_string(),
            r.daily_score,
            r.adherence_score,
            r.nutrition_score,
            r.cognitive_score
        );
    }
    println!();
}

/// Display aggregate score statistics.
pub fn display_stats(stats: &ScoreStats) {
    println!();
    println!("--- Score statistics ---");
    println!("Days scored:   {}", stats.total_days);
    println!("Average score: {:.1}", stats.average_score);
    println!("Best score:    {:.1}", stats.best_score);
    println!("Trend:         {}", stats.trend);
    println!();
}

/// Display the catalog.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} [{}] - per 100 g: {:.0} kcal, P:{} Ω3:{} Mg:{}",
            food.food_name,
            food.food_category,
            food.calories_per_100g,
            food.protein_per_100g,
            food.omega3_per_100g,
            food.magnesium_per_100g
        );
    }

    println!();
}

fn format_optional<T: std::fmt::Display>(value: Option<T>, unit: &str) -> String {
    value
        .map(|v| format!("{}{}", v, unit))
        .unwrap_or_else(|| "(not set)".to_string())
}

/// Display the profile and the nutrition targets.
pub fn display_profile(profile: &UserProfile, targets: &NutritionTargets) {
    let list = |items: &[String]| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    };

    println!();
    println!("--- Profile ---");
    println!("Age:            {}", format_optional(profile.age, ""));
    println!("Gender:         {}", format_optional(profile.gender.as_deref(), ""));
    println!("Weight:         {}", format_optional(profile.weight, " kg"));
    println!("Height:         {}", format_optional(profile.height, " cm"));
    println!("Activity level: {}", format_optional(profile.activity_level.as_deref(), ""));
    println!("Stress level:   {}", format_optional(profile.stress_level, "/10"));
    println!("Sleep:          {}", format_optional(profile.sleep_hours, " h"));
    println!("Allergies:      {}", list(&profile.allergies));
    println!("Food aversions: {}", list(&profile.food_aversions));
    println!("Preferences:    {}", list(&profile.dietary_preferences));
    println!("Brain goals:    {}", list(&profile.brain_goals));
    println!();
    println!("--- Daily targets ---");
    println!("Calories:  {}", format_optional(targets.calories_target, " kcal"));
    println!("Protein:   {}", format_optional(targets.protein_target, " g"));
    println!("Omega-3:   {}", format_optional(targets.omega3_target, " g"));
    println!("Magnesium: {}", format_optional(targets.magnesium_target, " mg"));
    println!();
}
