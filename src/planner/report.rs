use tracing::info;

use crate::error::Result;
use crate::models::{FitnessReport, UserProfile};
use crate::planner::bmi::classify_bmi;
use crate::planner::energy::estimate_energy;
use crate::planner::macros::allocate_macros;
use crate::planner::provider::{personalize_meal_plan, MealNameProvider};
use crate::planner::templates::{select_meal_plan_for_level, select_workout_plan};

/// Run every calculation and template selection for one profile.
pub fn build_report(
    profile: &UserProfile,
    provider: &dyn MealNameProvider,
) -> Result<FitnessReport> {
    let energy = estimate_energy(profile)?;
    let macros = allocate_macros(energy.calorie_target_kcal, profile.goal)?;
    let bmi = classify_bmi(profile.height_cm, profile.weight_kg)?;

    let template = select_meal_plan_for_level(
        profile.goal,
        profile.health_condition,
        profile.fitness_level,
    );
    let meal_plan = personalize_meal_plan(&template, provider);
    let workout_plan = select_workout_plan(
        profile.goal,
        profile.health_condition,
        profile.fitness_level,
    );

    info!(
        target_kcal = energy.calorie_target_kcal,
        bmi = bmi.bmi,
        meals = %meal_plan.name,
        workout = %workout_plan.name,
        "built report"
    );

    Ok(FitnessReport {
        profile: profile.clone(),
        energy,
        macros,
        bmi,
        meal_plan,
        workout_plan,
    })
}
