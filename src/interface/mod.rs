pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_csv, write_report_json};
pub use prompts::{collect_profile, prompt_age, prompt_goal_weight, prompt_yes_no};
pub use render::{
    display_bmi, display_energy, display_examples, display_macros, display_meal_plan,
    display_profile, display_report, display_workout_plan,
};
