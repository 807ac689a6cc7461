use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fit_target_planner_rs::cli::{Cli, Command, ProfileArgs};
use fit_target_planner_rs::error::Result;
use fit_target_planner_rs::interface::{
    collect_profile, display_bmi, display_examples, display_meal_plan, display_report,
    display_workout_plan, prompt_yes_no, write_plan_csv, write_report_json,
};
use fit_target_planner_rs::models::{FitnessLevel, Goal, HealthCondition};
use fit_target_planner_rs::planner::{
    build_report, classify_bmi, sample_example_meals, select_meal_plan_for_level,
    select_workout_plan, MealNameProvider, SeededMealNames, StaticMealNames,
};
use fit_target_planner_rs::state::ReportCache;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(),
        Command::Report {
            profile,
            seed,
            json,
            csv,
        } => cmd_report(&profile, seed, json.as_deref(), csv.as_deref()),
        Command::Bmi { height, weight } => cmd_bmi(height, weight),
        Command::Meals {
            goal,
            condition,
            level,
            examples,
            seed,
        } => cmd_meals(&goal, condition.as_deref(), level.as_deref(), examples, seed),
        Command::Workouts {
            goal,
            condition,
            level,
        } => cmd_workouts(&goal, condition.as_deref(), level.as_deref()),
    }
}

/// Prompt for a profile, show the report, and loop while the user edits it.
fn cmd_interactive() -> Result<()> {
    let mut cache = ReportCache::new();

    loop {
        let profile = collect_profile()?;
        let report = cache.get_or_build(&profile, &StaticMealNames)?;
        display_report(report);

        if !prompt_yes_no("Enter another profile?", false)? {
            break;
        }
    }

    info!(
        hits = cache.hits(),
        misses = cache.misses(),
        "interactive session finished"
    );
    Ok(())
}

/// Compute and display a full report, with optional exports.
fn cmd_report(
    args: &ProfileArgs,
    seed: Option<u64>,
    json: Option<&Path>,
    csv: Option<&Path>,
) -> Result<()> {
    let profile = args.to_profile()?;

    let provider: Box<dyn MealNameProvider> = match seed {
        Some(seed) => Box::new(SeededMealNames::new(seed)),
        None => Box::new(StaticMealNames),
    };

    let report = build_report(&profile, provider.as_ref())?;
    display_report(&report);

    if let Some(path) = json {
        write_report_json(&report, path)?;
        println!("Report written to {}", path.display());
    }

    if let Some(path) = csv {
        write_plan_csv(&report, path)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

fn cmd_bmi(height: f64, weight: f64) -> Result<()> {
    let bmi = classify_bmi(height, weight)?;
    display_bmi(&bmi);
    Ok(())
}

fn cmd_meals(
    goal: &str,
    condition: Option<&str>,
    level: Option<&str>,
    examples: usize,
    seed: u64,
) -> Result<()> {
    let goal: Goal = goal.parse()?;
    let condition = condition
        .map(|c| c.parse::<HealthCondition>())
        .transpose()?;
    let level = level.map(|l| l.parse::<FitnessLevel>()).transpose()?;

    let plan = select_meal_plan_for_level(goal, condition, level);
    display_meal_plan(&plan, None);

    if examples > 0 {
        display_examples(&sample_example_meals(goal, examples, seed));
    }

    println!();
    Ok(())
}

fn cmd_workouts(goal: &str, condition: Option<&str>, level: Option<&str>) -> Result<()> {
    let goal: Goal = goal.parse()?;
    let condition = condition
        .map(|c| c.parse::<HealthCondition>())
        .transpose()?;
    let level = level.map(|l| l.parse::<FitnessLevel>()).transpose()?;

    let plan = select_workout_plan(goal, condition, level);
    display_workout_plan(&plan);

    println!();
    Ok(())
}
