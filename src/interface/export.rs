use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FitnessReport;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the report as pretty JSON with energy and BMI rounded for reading.
pub fn write_report_json(report: &FitnessReport, path: &Path) -> Result<()> {
    let mut rounded = report.clone();
    rounded.energy.bmr_kcal = truncate(report.energy.bmr_kcal, 2);
    rounded.energy.tdee_kcal = truncate(report.energy.tdee_kcal, 2);
    rounded.energy.calorie_target_kcal = truncate(report.energy.calorie_target_kcal, 2);
    rounded.bmi.bmi = truncate(report.bmi.bmi, 2);

    let json = serde_json::to_string_pretty(&rounded)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write meal and workout plans to one CSV file.
///
/// Meal rows carry the slot's calories; workout rows carry minutes and intensity.
pub fn write_plan_csv(report: &FitnessReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["kind", "when", "item", "kcal", "minutes", "intensity"])?;

    let target = report.energy.calorie_target_kcal;
    for entry in &report.meal_plan.entries {
        wtr.write_record([
            "meal".to_string(),
            entry.slot.label().to_string(),
            entry.name.clone(),
            format!("{:.0}", entry.calories_for(target)),
            String::new(),
            String::new(),
        ])?;
    }

    for day in &report.workout_plan.days {
        wtr.write_record([
            "workout".to_string(),
            day.day.label().to_string(),
            day.activity_type.clone(),
            String::new(),
            day.duration_min.to_string(),
            day.intensity.label().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
