use crate::models::{
    BmiResult, EnergyEstimate, FitnessReport, MacroTargets, MealPlanTemplate, UserProfile,
    WorkoutPlanTemplate,
};

pub fn display_profile(profile: &UserProfile) {
    println!();
    println!("=== Profile ===");
    println!();
    println!("Sex:       {}", profile.sex);
    println!("Age:       {} years", profile.age_years);
    println!("Height:    {:.1} cm", profile.height_cm);
    println!("Weight:    {:.1} kg", profile.weight_kg);
    if let Some(goal_weight) = profile.goal_weight_kg {
        println!("Goal:      {} (target {:.1} kg)", profile.goal, goal_weight);
    } else {
        println!("Goal:      {}", profile.goal);
    }
    println!("Activity:  {}", profile.activity_level);
    if let Some(condition) = profile.health_condition {
        println!("Condition: {}", condition);
    }
    if let Some(level) = profile.fitness_level {
        println!("Fitness:   {}", level);
    }
}

pub fn display_energy(energy: &EnergyEstimate) {
    println!();
    println!("=== Energy ===");
    println!();
    println!("BMR:            {:>6.0} kcal", energy.bmr_kcal);
    println!("TDEE:           {:>6.0} kcal", energy.tdee_kcal);
    println!("Daily target:   {:>6.0} kcal", energy.calorie_target_kcal);
}

pub fn display_macros(macros: &MacroTargets) {
    println!();
    println!("=== Macros ===");
    println!();
    println!("Protein: {:>4} g", macros.protein_g);
    println!("Carbs:   {:>4} g", macros.carbs_g);
    println!("Fat:     {:>4} g", macros.fat_g);
    println!("Total:   {:>4.0} kcal", macros.total_kcal());
}

pub fn display_bmi(bmi: &BmiResult) {
    println!();
    println!("BMI: {:.1} ({})", bmi.bmi, bmi.category);
}

/// Display a meal plan; per-slot calories are shown when a target is given.
pub fn display_meal_plan(plan: &MealPlanTemplate, calorie_target: Option<f64>) {
    println!();
    println!(
        "=== Meal Plan: {} ({}, {}) ===",
        plan.name, plan.goal, plan.condition
    );
    println!();

    let names: Vec<String> = plan.entries.iter().map(|e| e.display_name()).collect();
    let max_name_len = names.iter().map(|n| n.len()).max().unwrap_or(10);

    for (entry, name) in plan.entries.iter().zip(&names) {
        let calories = calorie_target
            .map(|target| format!(" | {:>5.0} kcal", entry.calories_for(target)))
            .unwrap_or_default();

        println!(
            "{:<9} {:<width$} {:>5.1}%{}",
            entry.slot.label(),
            name,
            entry.calorie_share * 100.0,
            calories,
            width = max_name_len
        );
    }
}

pub fn display_workout_plan(plan: &WorkoutPlanTemplate) {
    println!();
    println!("=== Workout Plan: {} ===", plan.name);
    println!();

    let max_name_len = plan
        .days
        .iter()
        .map(|d| d.activity_type.len())
        .max()
        .unwrap_or(10);

    for day in &plan.days {
        if day.is_rest() {
            println!("{}  {}", day.day, day.activity_type);
            continue;
        }
        println!(
            "{}  {:<width$} {:>3} min  {}",
            day.day,
            day.activity_type,
            day.duration_min,
            day.intensity,
            width = max_name_len
        );
    }

    println!();
    println!(
        "{} active days, {} minutes total",
        plan.active_days(),
        plan.weekly_minutes()
    );
}

/// Display a list of example dishes.
pub fn display_examples(examples: &[String]) {
    if examples.is_empty() {
        println!("Examples: (none)");
        return;
    }

    println!();
    println!("=== Example Meals ({} items) ===", examples.len());
    println!();
    for name in examples {
        println!("  {}", name);
    }
}

/// Display every section of a report.
pub fn display_report(report: &FitnessReport) {
    display_profile(&report.profile);
    display_energy(&report.energy);
    display_macros(&report.macros);
    display_bmi(&report.bmi);
    display_meal_plan(&report.meal_plan, Some(report.energy.calorie_target_kcal));
    display_workout_plan(&report.workout_plan);
    println!();
}
