use crate::error::Result;
use crate::models::{ensure_positive, BmiCategory, BmiResult};
use crate::planner::constants::{BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN};

/// Category for a BMI value, using half-open intervals at 18.5, 25 and 30.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute BMI from height and weight and classify it.
pub fn classify_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult> {
    ensure_positive("height", height_cm)?;
    ensure_positive("weight", weight_kg)?;

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    Ok(BmiResult {
        bmi,
        category: bmi_category(bmi),
    })
}
