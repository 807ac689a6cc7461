use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Goal, HealthCondition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One meal in a day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub slot: MealSlot,
    pub name: String,

    /// Fraction of the daily calorie target, in (0, 1).
    pub calorie_share: f64,

    /// Calories in one standard serving of the catalog dish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_kcal: Option<u32>,

    /// Protein in one standard serving of the catalog dish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<u32>,
}

impl MealPlanEntry {
    /// Calories this slot gets out of `calorie_target`.
    pub fn calories_for(&self, calorie_target: f64) -> f64 {
        calorie_target * self.calorie_share
    }

    /// Name with serving figures appended when known,
    /// e.g. `Apple with Almond Butter (200 cal, 8g protein)`.
    pub fn display_name(&self) -> String {
        match (self.reference_kcal, self.protein_g) {
            (Some(kcal), Some(protein)) => format!("{} ({kcal} cal, {protein}g protein)", self.name),
            (Some(kcal), None) => format!("{} ({kcal} cal)", self.name),
            (None, Some(protein)) => format!("{} ({protein}g protein)", self.name),
            (None, None) => self.name.clone(),
        }
    }
}

/// A canned day of meals, selected by goal and health condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanTemplate {
    pub name: String,
    pub goal: Goal,
    pub condition: HealthCondition,
    pub entries: Vec<MealPlanEntry>,
}

impl MealPlanTemplate {
    /// Sum of all calorie shares (1.0 for every catalog template).
    pub fn total_share(&self) -> f64 {
        self.entries.iter().map(|e| e.calorie_share).sum()
    }

    pub fn entry(&self, slot: MealSlot) -> Option<&MealPlanEntry> {
        self.entries.iter().find(|e| e.slot == slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered from rest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn label(self) -> &'static str {
        match self {
            Intensity::None => "none",
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: Weekday,
    pub activity_type: String,
    pub duration_min: u32,
    pub intensity: Intensity,
}

impl WorkoutDay {
    pub fn is_rest(&self) -> bool {
        self.intensity == Intensity::None
    }
}

/// A canned week of training, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlanTemplate {
    pub name: String,
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlanTemplate {
    /// Total planned minutes over the week.
    pub fn weekly_minutes(&self) -> u32 {
        self.days.iter().map(|d| d.duration_min).sum()
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|d| !d.is_rest()).count()
    }
}
