use tracing::debug;

use crate::error::{FitError, Result};
use crate::models::{Goal, MacroTargets};
use crate::planner::constants::*;

/// Split a calorie target into protein/carbs/fat grams for a goal.
///
/// Protein and fat are rounded straight from their ratio. Carbs take the
/// calories left over, so the gram totals land within 2 kcal of the target.
pub fn allocate_macros(calorie_target: f64, goal: Goal) -> Result<MacroTargets> {
    if !calorie_target.is_finite() || calorie_target < 0.0 {
        return Err(FitError::InvalidInput(format!(
            "calorie target must be a non-negative number, got {calorie_target}"
        )));
    }

    let ratios = macro_ratios(goal);
    let protein_g = (calorie_target * ratios.protein / KCAL_PER_GRAM_PROTEIN).round();
    let fat_g = (calorie_target * ratios.fat / KCAL_PER_GRAM_FAT).round();

    let remaining = calorie_target - protein_g * KCAL_PER_GRAM_PROTEIN - fat_g * KCAL_PER_GRAM_FAT;
    let carbs_g = (remaining / KCAL_PER_GRAM_CARBS).round().max(0.0);

    let macros = MacroTargets {
        protein_g: protein_g as u32,
        carbs_g: carbs_g as u32,
        fat_g: fat_g as u32,
    };
    debug!(calorie_target, ?goal, ?macros, "allocated macros");
    Ok(macros)
}
