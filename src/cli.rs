use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{FitError, Result};
use crate::models::{ActivityLevel, FitnessLevel, Goal, HealthCondition, Sex, UserProfile};
use crate::state::load_profile;

/// FitTargetPlanner: calorie, macro, meal and workout targets from body metrics.
#[derive(Parser, Debug)]
#[command(name = "fit_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a profile through prompts and show the full report.
    Interactive,

    /// Compute the full report from a profile file or flags.
    Report {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Seed for swapping in example meal names.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the report as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the meal and workout plans as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compute BMI and its category.
    Bmi {
        /// Height in cm.
        #[arg(long)]
        height: f64,

        /// Weight in kg.
        #[arg(long)]
        weight: f64,
    },

    /// Show the meal plan for a goal.
    Meals {
        /// lose, maintain or gain.
        #[arg(long)]
        goal: String,

        /// Health condition, e.g. diabetes.
        #[arg(long)]
        condition: Option<String>,

        /// beginner, intermediate or advanced.
        #[arg(long)]
        level: Option<String>,

        /// Number of example dishes to list.
        #[arg(long, default_value = "0")]
        examples: usize,

        /// Seed for picking example dishes.
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Show the 7-day workout plan for a goal.
    Workouts {
        /// lose, maintain or gain.
        #[arg(long)]
        goal: String,

        /// Health condition, e.g. joint-pain.
        #[arg(long)]
        condition: Option<String>,

        /// beginner, intermediate or advanced.
        #[arg(long)]
        level: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

/// Profile given either as a JSON file or as individual flags.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Path to a profile JSON file; other profile flags are ignored when set.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// male or female/other.
    #[arg(long)]
    pub sex: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Goal weight in kg.
    #[arg(long)]
    pub goal_weight: Option<f64>,

    /// sedentary, light, moderate, active or very-active.
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// lose, maintain or gain.
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// Health condition, e.g. hypertension.
    #[arg(long)]
    pub condition: Option<String>,

    /// beginner, intermediate or advanced.
    #[arg(long)]
    pub level: Option<String>,
}

/// Fail with `InvalidInput` naming the missing flag.
fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| FitError::InvalidInput(format!("missing --{flag} (or use --profile)")))
}

impl ProfileArgs {
    /// Resolve the flags (or the profile file) into a validated profile.
    pub fn to_profile(&self) -> Result<UserProfile> {
        if let Some(path) = &self.profile {
            return load_profile(path);
        }

        let profile = UserProfile {
            sex: required(self.sex.as_deref(), "sex")?.parse::<Sex>()?,
            age_years: required(self.age, "age")?,
            height_cm: required(self.height, "height")?,
            weight_kg: required(self.weight, "weight")?,
            goal_weight_kg: self.goal_weight,
            activity_level: self.activity.parse::<ActivityLevel>()?,
            goal: self.goal.parse::<Goal>()?,
            health_condition: self
                .condition
                .as_deref()
                .map(|c| c.parse::<HealthCondition>())
                .transpose()?,
            fitness_level: self
                .level
                .as_deref()
                .map(|l| l.parse::<FitnessLevel>())
                .transpose()?,
        };
        profile.validate()?;

        Ok(profile)
    }
}
