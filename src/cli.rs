use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::error::{NutriError, Result};
use crate::models::{FoodPortion, MealType, UserProfile};

/// Nutrikal: brain-performance meal planning and daily scoring.
#[derive(Parser, Debug)]
#[command(name = "nutrikal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracker state JSON file.
    #[arg(short, long, default_value = "nutrikal_state.json")]
    pub file: PathBuf,

    /// Optional JSON file overriding scoring and planner settings.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a 7-day plan and make it the active one.
    Plan {
        /// Seed for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Name to store the plan under.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the active plan.
    Active,

    /// Record a consumed meal and refresh that day's score.
    Log {
        /// Day the meal was eaten (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// breakfast, lunch, dinner or snack.
        #[arg(long)]
        meal_type: MealType,

        /// Food eaten, as NAME or NAME:GRAMS. Repeatable; prompts when omitted.
        #[arg(long = "food")]
        foods: Vec<FoodPortion>,
    },

    /// Compute and store the brain score for a day.
    Score {
        /// Day to score (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Cognitive self-assessment from 1 to 10; prompts when omitted.
        #[arg(long)]
        feedback: Option<i32>,
    },

    /// List stored scores in date order.
    Scores {
        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show average, best score and trend.
    Stats,

    /// Show the food catalog.
    Foods,

    /// Show or update daily nutrition targets.
    Targets {
        /// Calories (kcal).
        #[arg(long)]
        calories: Option<f64>,

        /// Protein (g).
        #[arg(long)]
        protein: Option<f64>,

        /// Omega-3 (g).
        #[arg(long)]
        omega3: Option<f64>,

        /// Magnesium (mg).
        #[arg(long)]
        magnesium: Option<f64>,
    },

    /// Show or update the profile.
    Profile(ProfileArgs),

    /// Replace the food catalog from a CSV file.
    ImportFoods {
        path: PathBuf,
    },

    /// Write the score history to a CSV file.
    ExportScores {
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Stats
    }
}

/// Profile changes. List flags append; `--clear` empties the lists first.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Add an allergy (exact food name). Repeatable.
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Add a food aversion (exact food name). Repeatable.
    #[arg(long = "aversion")]
    pub aversions: Vec<String>,

    /// Add a dietary preference. Repeatable.
    #[arg(long = "preference")]
    pub preferences: Vec<String>,

    /// Add a brain goal, e.g. focus or memory. Repeatable.
    #[arg(long = "goal")]
    pub goals: Vec<String>,

    /// Clear allergies, aversions, preferences and goals before adding.
    #[arg(long)]
    pub clear: bool,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub gender: Option<String>,

    /// Body weight (kg).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height (cm).
    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long)]
    pub activity_level: Option<String>,

    /// Stress level from 1 to 10.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub stress_level: Option<u8>,

    /// Typical sleep per night (hours).
    #[arg(long)]
    pub sleep_hours: Option<f64>,
}

fn push_unique(list: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

fn positive(name: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(NutriError::InvalidInput(format!(
            "{} must be a positive number",
            name
        ))),
        _ => Ok(value),
    }
}

impl ProfileArgs {
    /// Whether any change was requested.
    pub fn is_empty(&self) -> bool {
        !self.clear
            && self.allergies.is_empty()
            && self.aversions.is_empty()
            && self.preferences.is_empty()
            && self.goals.is_empty()
            && self.age.is_none()
            && self.gender.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.activity_level.is_none()
            && self.stress_level.is_none()
            && self.sleep_hours.is_none()
    }

    /// Apply the changes, returning whether the profile was touched.
    ///
    /// Validates everything before mutating, so a rejected update leaves the
    /// profile as it was.
    pub fn apply(self, profile: &mut UserProfile) -> Result<bool> {
        let weight = positive("Weight", self.weight)?;
        let height = positive("Height", self.height)?;
        let sleep_hours = positive("Sleep hours", self.sleep_hours)?;
        if sleep_hours.is_some_and(|h| h > 24.0) {
            return Err(NutriError::InvalidInput(
                "Sleep hours cannot exceed 24".to_string(),
            ));
        }
        if self.age == Some(0) {
            return Err(NutriError::InvalidInput("Age must be positive".to_string()));
        }

        let changed = !self.is_empty();

        if self.clear {
            profile.allergies.clear();
            profile.food_aversions.clear();
            profile.dietary_preferences.clear();
            profile.brain_goals.clear();
        }
        push_unique(&mut profile.allergies, self.allergies);
        push_unique(&mut profile.food_aversions, self.aversions);
        push_unique(&mut profile.dietary_preferences, self.preferences);
        push_unique(&mut profile.brain_goals, self.goals);

        profile.age = self.age.or(profile.age);
        profile.gender = self.gender.or(profile.gender.take());
        profile.weight = weight.or(profile.weight);
        profile.height = height.or(profile.height);
        profile.activity_level = self.activity_level.or(profile.activity_level.take());
        profile.stress_level = self.stress_level.or(profile.stress_level);
        profile.sleep_hours = sleep_hours.or(profile.sleep_hours);

        Ok(changed)
    }
}
