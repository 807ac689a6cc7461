use tracing::debug;

use crate::error::{FitError, Result};
use crate::models::{EnergyEstimate, Goal, Sex, UserProfile};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor).
///
/// `10*w + 6.25*h - 5*a + 5` for males, `... - 161` otherwise.
pub fn mifflin_st_jeor_bmr(sex: Sex, age_years: u32, height_cm: f64, weight_kg: f64) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Other => BMR_OTHER_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * age_years as f64
        + offset
}

/// Distance to goal weight scaled to kcal and clamped to `[min, max]`.
///
/// Without a goal weight the table minimum is used.
fn scaled_adjustment(weight_kg: f64, goal_weight_kg: Option<f64>, min: f64, max: f64) -> f64 {
    match goal_weight_kg {
        Some(goal_weight) => ((weight_kg - goal_weight).abs() * KCAL_PER_KG_DELTA).clamp(min, max),
        None => min,
    }
}

/// Deficit applied when losing weight, in `[DEFICIT_MIN, DEFICIT_MAX]`.
pub fn calorie_deficit(weight_kg: f64, goal_weight_kg: Option<f64>) -> f64 {
    scaled_adjustment(weight_kg, goal_weight_kg, DEFICIT_MIN, DEFICIT_MAX)
}

/// Surplus applied when gaining weight, in `[SURPLUS_MIN, SURPLUS_MAX]`.
pub fn calorie_surplus(weight_kg: f64, goal_weight_kg: Option<f64>) -> f64 {
    scaled_adjustment(weight_kg, goal_weight_kg, SURPLUS_MIN, SURPLUS_MAX)
}

/// Adjust TDEE for the stated goal.
///
/// Losing never goes below `CALORIE_FLOOR`; the floor wins over the deficit.
pub fn calorie_target(tdee: f64, goal: Goal, weight_kg: f64, goal_weight_kg: Option<f64>) -> f64 {
    match goal {
        Goal::Lose => (tdee - calorie_deficit(weight_kg, goal_weight_kg)).max(CALORIE_FLOOR),
        Goal::Gain => tdee + calorie_surplus(weight_kg, goal_weight_kg),
        Goal::Maintain => tdee,
    }
}

/// Estimate BMR, TDEE and the goal-adjusted calorie target for a profile.
pub fn estimate_energy(profile: &UserProfile) -> Result<EnergyEstimate> {
    profile.validate()?;

    let bmr = mifflin_st_jeor_bmr(
        profile.sex,
        profile.age_years,
        profile.height_cm,
        profile.weight_kg,
    );
    // Implausible metric combinations can push the formula to zero or below
    if bmr <= 0.0 {
        return Err(FitError::InvalidInput(format!(
            "estimated BMR is {bmr:.0} kcal; check age, height and weight"
        )));
    }
    let tdee = bmr * activity_multiplier(profile.activity_level);
    let target = calorie_target(
        tdee,
        profile.goal,
        profile.weight_kg,
        profile.goal_weight_kg,
    );

    debug!(
        bmr,
        tdee,
        target,
        goal = ?profile.goal,
        activity = ?profile.activity_level,
        "estimated energy"
    );

    Ok(EnergyEstimate {
        bmr_kcal: bmr,
        tdee_kcal: tdee,
        calorie_target_kcal: target,
    })
}
