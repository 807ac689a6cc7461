use crate::models::Intensity::{self, High, Low, Medium, None as Rest};
use crate::models::{
    FitnessLevel, Goal, HealthCondition, Weekday, WorkoutDay, WorkoutPlanTemplate,
};

/// What a static week is selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKey {
    /// Low-risk week that overrides the goal for a health condition.
    Condition(HealthCondition),
    /// Goal week; `None` matches any fitness level.
    Goal(Goal, Option<FitnessLevel>),
}

/// A static week: `(activity, minutes, intensity)` for Mon..Sun.
#[derive(Debug)]
pub struct WorkoutRow {
    pub key: WorkoutKey,
    pub name: &'static str,
    pub days: [(&'static str, u32, Intensity); 7],
}

impl WorkoutRow {
    pub fn to_template(&self) -> WorkoutPlanTemplate {
        let days = Weekday::ALL
            .iter()
            .zip(self.days.iter())
            .map(|(day, (activity, minutes, intensity))| WorkoutDay {
                day: *day,
                activity_type: activity.to_string(),
                duration_min: *minutes,
                intensity: *intensity,
            })
            .collect();

        WorkoutPlanTemplate {
            name: self.name.to_string(),
            days,
        }
    }
}

/// Balanced week used when nothing more specific matches.
pub static GENERIC_WEEK: WorkoutRow = WorkoutRow {
    key: WorkoutKey::Goal(Goal::Maintain, None),
    name: "Balanced Week",
    days: [
        ("Full-Body Strength", 45, Medium),
        ("Brisk Walk", 30, Low),
        ("Cycling", 40, Medium),
        ("Rest", 0, Rest),
        ("Full-Body Strength", 45, Medium),
        ("Yoga", 40, Low),
        ("Rest", 0, Rest),
    ],
};

pub static WORKOUT_TABLE: &[WorkoutRow] = &[
    WorkoutRow {
        key: WorkoutKey::Goal(Goal::Lose, None),
        name: "Fat Loss Cardio Focus",
        days: [
            ("Brisk Walk", 45, Medium),
            ("Full-Body Circuit", 35, Medium),
            ("Cycling", 45, Medium),
            ("Rest", 0, Rest),
            ("Jogging", 30, Medium),
            ("Swimming", 40, Medium),
            ("Stretching", 20, Low),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Goal(Goal::Lose, Some(FitnessLevel::Advanced)),
        name: "Fat Loss Intervals",
        days: [
            ("HIIT Sprints", 30, High),
            ("Upper-Body Strength", 45, Medium),
            ("Rowing Intervals", 35, High),
            ("Mobility", 20, Low),
            ("Lower-Body Strength", 45, High),
            ("Long Run", 60, Medium),
            ("Rest", 0, Rest),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Goal(Goal::Gain, None),
        name: "Strength Split",
        days: [
            ("Push (Chest, Shoulders, Triceps)", 60, High),
            ("Pull (Back, Biceps)", 60, High),
            ("Rest", 0, Rest),
            ("Legs", 60, High),
            ("Upper-Body Accessories", 45, Medium),
            ("Light Cardio", 25, Low),
            ("Rest", 0, Rest),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Goal(Goal::Gain, Some(FitnessLevel::Beginner)),
        name: "Beginner Full-Body Strength",
        days: [
            ("Full-Body Strength A", 45, Medium),
            ("Rest", 0, Rest),
            ("Full-Body Strength B", 45, Medium),
            ("Rest", 0, Rest),
            ("Full-Body Strength A", 45, Medium),
            ("Walk", 30, Low),
            ("Rest", 0, Rest),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Condition(HealthCondition::JointPain),
        name: "Low-Impact Week",
        days: [
            ("Swimming", 30, Low),
            ("Stationary Cycling", 30, Low),
            ("Rest", 0, Rest),
            ("Water Aerobics", 30, Low),
            ("Chair Yoga", 25, Low),
            ("Elliptical", 25, Low),
            ("Rest", 0, Rest),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Condition(HealthCondition::HeartDisease),
        name: "Cardiac-Safe Walking Week",
        days: [
            ("Walk", 20, Low),
            ("Gentle Stretching", 15, Low),
            ("Walk", 20, Low),
            ("Rest", 0, Rest),
            ("Walk", 25, Low),
            ("Tai Chi", 20, Low),
            ("Rest", 0, Rest),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Condition(HealthCondition::Hypertension),
        name: "Steady Aerobic Week",
        days: [
            ("Brisk Walk", 30, Medium),
            ("Light Resistance Bands", 25, Low),
            ("Cycling", 30, Medium),
            ("Yoga", 30, Low),
            ("Brisk Walk", 30, Medium),
            ("Swimming", 30, Low),
            ("Rest", 0, Rest),
        ],
    },
    WorkoutRow {
        key: WorkoutKey::Condition(HealthCondition::Diabetes),
        name: "Daily Movement Week",
        days: [
            ("Post-Meal Walk", 30, Low),
            ("Full-Body Strength", 35, Medium),
            ("Post-Meal Walk", 30, Low),
            ("Cycling", 30, Medium),
            ("Full-Body Strength", 35, Medium),
            ("Post-Meal Walk", 30, Low),
            ("Stretching", 20, Low),
        ],
    },
];
