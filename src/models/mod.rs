mod plan;
mod profile;
mod report;
mod targets;

pub(crate) use profile::ensure_positive;

pub use plan::{
    Intensity, MealPlanEntry, MealPlanTemplate, MealSlot, Weekday, WorkoutDay,
    WorkoutPlanTemplate,
};
pub use profile::{ActivityLevel, FitnessLevel, Goal, HealthCondition, Sex, UserProfile};
pub use report::FitnessReport;
pub use targets::{BmiCategory, BmiResult, EnergyEstimate, MacroTargets};
