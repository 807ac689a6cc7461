//! Static meal and workout tables the template selector reads from.

pub mod meals;
pub mod workouts;

pub use meals::{
    example_meals, MealRow, DEFAULT_MEALS, EXAMPLE_MEALS, MEAL_TABLE, MUSCLE_BUILDING_MEALS,
};
pub use workouts::{WorkoutKey, WorkoutRow, GENERIC_WEEK, WORKOUT_TABLE};
