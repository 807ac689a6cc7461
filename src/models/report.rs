use serde::{Deserialize, Serialize};

use crate::models::{
    BmiResult, EnergyEstimate, MacroTargets, MealPlanTemplate, UserProfile, WorkoutPlanTemplate,
};

/// Everything derived from one profile snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    pub profile: UserProfile,
    pub energy: EnergyEstimate,
    pub macros: MacroTargets,
    pub bmi: BmiResult,
    pub meal_plan: MealPlanTemplate,
    pub workout_plan: WorkoutPlanTemplate,
}

impl FitnessReport {
    /// Per-slot calories for the meal plan, in plan order.
    pub fn meal_calories(&self) -> Vec<f64> {
        self.meal_plan
            .entries
            .iter()
            .map(|e| e.calories_for(self.energy.calorie_target_kcal))
            .collect()
    }
}
