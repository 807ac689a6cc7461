use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor BMR coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_COEF: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_COEF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const BMR_AGE_COEF: f64 = 5.0;

/// Sex offset for males.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Sex offset for everyone else.
pub const BMR_OTHER_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustment
// ─────────────────────────────────────────────────────────────────────────────

/// kcal of deficit/surplus per kg between current and goal weight.
pub const KCAL_PER_KG_DELTA: f64 = 100.0;

pub const DEFICIT_MIN: f64 = 500.0;
pub const DEFICIT_MAX: f64 = 1000.0;

pub const SURPLUS_MIN: f64 = 250.0;
pub const SURPLUS_MAX: f64 = 500.0;

/// Lowest calorie target ever recommended when losing weight.
pub const CALORIE_FLOOR: f64 = 1200.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macronutrients
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fraction of calories from each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// BMI category boundaries (left-inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Activity multiplier applied to BMR to get TDEE.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Protein/carbs/fat split for a goal. Each row sums to 1.0.
pub fn macro_ratios(goal: Goal) -> MacroRatios {
    match goal {
        Goal::Lose => MacroRatios {
            protein: 0.35,
            carbs: 0.40,
            fat: 0.25,
        },
        Goal::Gain => MacroRatios {
            protein: 0.30,
            carbs: 0.50,
            fat: 0.20,
        },
        Goal::Maintain => MacroRatios {
            protein: 0.25,
            carbs: 0.50,
            fat: 0.25,
        },
    }
}
