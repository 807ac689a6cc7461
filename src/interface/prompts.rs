use dialoguer::{Confirm, Input, Select};

use crate::error::{FitError, Result};
use crate::models::{ActivityLevel, FitnessLevel, Goal, HealthCondition, Sex, UserProfile};

/// Prompt for a positive number with a default.
fn prompt_positive(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if value <= 0.0 {
        return Err(FitError::InvalidInput(format!(
            "{} must be positive",
            prompt.trim_end_matches('?')
        )));
    }

    Ok(value)
}

/// Let the user pick one of `options` by label.
fn prompt_choice<T: Copy>(
    prompt: &str,
    options: &[T],
    label: fn(T) -> &'static str,
    default: usize,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|o| label(*o)).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(FitError::InvalidInput(
            "Age must be a positive whole number".to_string(),
        )),
    }
}

/// Prompt for an optional goal weight; empty input means none.
pub fn prompt_goal_weight() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Goal weight in kg (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<f64>() {
        Ok(w) if w > 0.0 => Ok(Some(w)),
        _ => Err(FitError::InvalidInput(format!("Invalid goal weight '{}'", input))),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile interactively.
pub fn collect_profile() -> Result<UserProfile> {
    let sex = prompt_choice("Sex", &Sex::ALL, Sex::label, 0)?;
    let age_years = prompt_age()?;
    let height_cm = prompt_positive("Height (cm)", "170")?;
    let weight_kg = prompt_positive("Weight (kg)", "70")?;
    let activity_level = prompt_choice(
        "Activity level",
        &ActivityLevel::ALL,
        ActivityLevel::label,
        2,
    )?;
    let goal = prompt_choice("Goal", &Goal::ALL, Goal::label, 1)?;

    let goal_weight_kg = if goal == Goal::Maintain {
        None
    } else {
        prompt_goal_weight()?
    };

    let health_condition = prompt_choice(
        "Health condition",
        &HealthCondition::ALL,
        HealthCondition::label,
        0,
    )?;
    let fitness_level =
        prompt_choice("Fitness level", &FitnessLevel::ALL, FitnessLevel::label, 0)?;

    let profile = UserProfile {
        sex,
        age_years,
        height_cm,
        weight_kg,
        goal_weight_kg,
        activity_level,
        goal,
        health_condition: Some(health_condition),
        fitness_level: Some(fitness_level),
    };
    profile.validate()?;

    Ok(profile)
}
