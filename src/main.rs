use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nutrikal_rs::cli::{Cli, Command, ProfileArgs};
use nutrikal_rs::config::{load_config, AppConfig};
use nutrikal_rs::error::{NutriError, Result};
use nutrikal_rs::interface::{
    display_food_list, display_meal_plan, display_profile, display_score, display_scores,
    display_stats, prompt_cognitive_feedback, prompt_food_portions,
};
use nutrikal_rs::models::{FoodPortion, MealType};
use nutrikal_rs::state::{
    load_foods_csv, load_state, save_state, write_scores_csv, StateManager,
};

const DEFAULT_LOG_DIRECTIVE: &str = "nutrikal=info,nutrikal_rs=info";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();
    debug!(?command, file = %cli.file.display(), "running command");

    let mut manager = StateManager::new(load_state(&cli.file)?);

    let changed = match command {
        Command::Plan { seed, name } => cmd_plan(&mut manager, &config, seed, name)?,
        Command::Active => cmd_active(&manager)?,
        Command::Log {
            date,
            meal_type,
            foods,
        } => cmd_log(&mut manager, &config, date.unwrap_or_else(today), meal_type, foods)?,
        Command::Score { date, feedback } => {
            cmd_score(&mut manager, &config, date.unwrap_or_else(today), feedback)?
        }
        Command::Scores { from, to } => {
            display_scores(&manager.scores_between(from, to));
            false
        }
        Command::Stats => {
            display_stats(&manager.stats());
            false
        }
        Command::Foods => {
            display_food_list(manager.foods(), "Food catalog");
            false
        }
        Command::Targets {
            calories,
            protein,
            omega3,
            magnesium,
        } => cmd_targets(&mut manager, calories, protein, omega3, magnesium)?,
        Command::Profile(args) => cmd_profile(&mut manager, args)?,
        Command::ImportFoods { path } => cmd_import_foods(&mut manager, &path)?,
        Command::ExportScores { path } => {
            cmd_export_scores(&manager, &path)?;
            false
        }
    };

    if changed {
        save_state(&cli.file, manager.state())?;
        println!("State saved to {}", cli.file.display());
    }

    Ok(())
}

/// Generate a weekly plan from the catalog and profile.
fn cmd_plan(
    manager: &mut StateManager,
    config: &AppConfig,
    seed: Option<u64>,
    name: Option<String>,
) -> Result<bool> {
    if manager.foods().is_empty() {
        println!("The food catalog is empty. Use 'import-foods' first.");
        return Ok(false);
    }

    let record = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            manager.generate_plan(name, today(), &config.planner, &mut rng)
        }
        None => manager.generate_plan(name, today(), &config.planner, &mut rand::thread_rng()),
    };

    display_meal_plan(record);
    Ok(true)
}

/// Show the active plan.
fn cmd_active(manager: &StateManager) -> Result<bool> {
    let record = manager.active_plan().ok_or(NutriError::NoActivePlan)?;
    display_meal_plan(record);
    Ok(false)
}

/// Record a meal; prompts for its foods when none were given.
fn cmd_log(
    manager: &mut StateManager,
    config: &AppConfig,
    date: NaiveDate,
    meal_type: MealType,
    foods: Vec<FoodPortion>,
) -> Result<bool> {
    let portions = if foods.is_empty() {
        println!("Logging {} for {}", meal_type, date);
        prompt_food_portions(manager.foods())?
    } else {
        foods
    };

    if portions.is_empty() {
        println!("No foods entered, nothing logged.");
        return Ok(false);
    }

    let (meal, score) = manager.log_meal(date, meal_type, portions, &config.scoring)?;
    println!(
        "Logged {} on {}: {:.0} kcal, {:.1} g protein",
        meal.meal_type, meal.meal_date, meal.nutrients.calories, meal.nutrients.protein
    );
    display_score(&score);
    Ok(true)
}

/// Score a day, asking for cognitive feedback when not supplied.
fn cmd_score(
    manager: &mut StateManager,
    config: &AppConfig,
    date: NaiveDate,
    feedback: Option<i32>,
) -> Result<bool> {
    let feedback = match feedback {
        Some(value) => value,
        None => prompt_cognitive_feedback()?,
    };

    if manager.meals_on(date).is_empty() {
        println!("No meals logged for {}.", date);
    }

    let record = manager.calculate_score(date, Some(feedback), &config.scoring);
    display_score(&record);
    Ok(true)
}

/// Update whichever targets were given, then show them.
fn cmd_targets(
    manager: &mut StateManager,
    calories: Option<f64>,
    protein: Option<f64>,
    omega3: Option<f64>,
    magnesium: Option<f64>,
) -> Result<bool> {
    let updates = [calories, protein, omega3, magnesium];
    if updates
        .iter()
        .flatten()
        .any(|v| !v.is_finite() || *v <= 0.0)
    {
        return Err(NutriError::InvalidInput(
            "Targets must be positive numbers".to_string(),
        ));
    }

    let changed = updates.iter().any(Option::is_some);
    let targets = manager.targets_mut();
    targets.calories_target = calories.or(targets.calories_target);
    targets.protein_target = protein.or(targets.protein_target);
    targets.omega3_target = omega3.or(targets.omega3_target);
    targets.magnesium_target = magnesium.or(targets.magnesium_target);

    display_profile(manager.profile(), manager.targets());
    Ok(changed)
}

/// Update the profile, then show it.
fn cmd_profile(manager: &mut StateManager, args: ProfileArgs) -> Result<bool> {
    let changed = args.apply(manager.profile_mut())?;
    display_profile(manager.profile(), manager.targets());
    Ok(changed)
}

/// Replace the catalog from CSV.
fn cmd_import_foods(manager: &mut StateManager, path: &Path) -> Result<bool> {
    let foods = load_foods_csv(path)?;
    println!("Imported {} foods from {}", foods.len(), path.display());
    manager.set_foods(foods);
    Ok(true)
}

/// Write every stored score to CSV.
fn cmd_export_scores(manager: &StateManager, path: &Path) -> Result<()> {
    let scores = manager.scores_between(None, None);
    write_scores_csv(path, &scores)?;
    println!("Wrote {} scores to {}", scores.len(), path.display());
    Ok(())
}
