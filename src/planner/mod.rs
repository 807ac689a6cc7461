pub mod bmi;
pub mod constants;
pub mod energy;
pub mod macros;
pub mod provider;
pub mod report;
pub mod templates;

pub use bmi::{bmi_category, classify_bmi};
pub use constants::*;
pub use energy::{
    calorie_deficit, calorie_surplus, calorie_target, estimate_energy, mifflin_st_jeor_bmr,
};
pub use macros::allocate_macros;
pub use provider::{personalize_meal_plan, MealNameProvider, SeededMealNames, StaticMealNames};
pub use report::build_report;
pub use templates::{
    sample_example_meals, select_meal_plan, select_meal_plan_for_level, select_workout_plan,
};
