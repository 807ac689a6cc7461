use assert_float_eq::*;

use fit_target_planner_rs::error::FitError;
use fit_target_planner_rs::models::{ActivityLevel, BmiCategory, Goal, Sex, UserProfile};
use fit_target_planner_rs::planner::{
    activity_multiplier, allocate_macros, classify_bmi, estimate_energy, CALORIE_FLOOR,
};

fn make_profile(goal: Goal, activity: ActivityLevel) -> UserProfile {
    UserProfile {
        sex: Sex::Male,
        age_years: 25,
        height_cm: 175.0,
        weight_kg: 70.0,
        goal_weight_kg: None,
        activity_level: activity,
        goal,
        health_condition: None,
        fitness_level: None,
    }
}

/// (age, height_cm, weight_kg)
const BODIES: [(u32, f64, f64); 3] = [(18, 150.0, 45.0), (35, 170.0, 80.0), (70, 190.0, 120.0)];

/// A spread of profiles covering every goal, activity level and sex.
fn profile_grid() -> Vec<UserProfile> {
    let mut profiles = Vec::new();
    for goal in Goal::ALL {
        for activity in ActivityLevel::ALL {
            for sex in Sex::ALL {
                for (age, height, weight) in BODIES {
                    for goal_weight in [None, Some(weight), Some(weight - 3.0), Some(weight + 25.0)]
                    {
                        profiles.push(UserProfile {
                            sex,
                            age_years: age,
                            height_cm: height,
                            weight_kg: weight,
                            goal_weight_kg: goal_weight,
                            activity_level: activity,
                            goal,
                            health_condition: None,
                            fitness_level: None,
                        });
                    }
                }
            }
        }
    }
    profiles
}

#[test]
fn test_end_to_end_example() {
    let energy = estimate_energy(&make_profile(Goal::Lose, ActivityLevel::Moderate)).unwrap();

    // 10*70 + 6.25*175 - 5*25 + 5
    assert_float_absolute_eq!(energy.bmr_kcal, 1673.75, 1e-9);
    assert_float_absolute_eq!(energy.tdee_kcal, 1673.75 * 1.55, 1e-9);
    // No goal weight: minimum 500 kcal deficit
    assert_float_absolute_eq!(energy.calorie_target_kcal, 1673.75 * 1.55 - 500.0, 1e-9);
    assert!(energy.calorie_target_kcal >= CALORIE_FLOOR);
}

#[test]
fn test_tdee_is_bmr_times_multiplier() {
    for profile in profile_grid() {
        let energy = estimate_energy(&profile).unwrap();
        let expected = energy.bmr_kcal * activity_multiplier(profile.activity_level);
        assert_float_absolute_eq!(energy.tdee_kcal, expected, 1e-9);
    }
}

/// Slack for the add-then-subtract round trip in `target - tdee`.
const EPS: f64 = 1e-6;

#[test]
fn test_goal_adjustment_ranges() {
    for profile in profile_grid() {
        let e = estimate_energy(&profile).unwrap();
        let delta = e.calorie_target_kcal - e.tdee_kcal;

        match profile.goal {
            Goal::Lose => {
                assert!(e.calorie_target_kcal >= CALORIE_FLOOR);
                if e.calorie_target_kcal > CALORIE_FLOOR {
                    assert!(
                        (-1000.0 - EPS..=-500.0 + EPS).contains(&delta),
                        "{profile:?}: {delta}"
                    );
                }
            }
            Goal::Gain => assert!(
                (250.0 - EPS..=500.0 + EPS).contains(&delta),
                "{profile:?}: {delta}"
            ),
            Goal::Maintain => assert_eq!(e.calorie_target_kcal, e.tdee_kcal),
        }
    }
}

#[test]
fn test_deficit_scales_with_goal_distance() {
    let mut profile = make_profile(Goal::Lose, ActivityLevel::Active);
    profile.weight_kg = 90.0;

    profile.goal_weight_kg = Some(83.0);
    let e = estimate_energy(&profile).unwrap();
    assert_float_absolute_eq!(e.tdee_kcal - e.calorie_target_kcal, 700.0, 1e-6);

    profile.goal_weight_kg = Some(60.0);
    let e = estimate_energy(&profile).unwrap();
    assert_float_absolute_eq!(e.tdee_kcal - e.calorie_target_kcal, 1000.0, 1e-6);

    // Same weight degenerates to the minimum
    profile.goal_weight_kg = Some(90.0);
    let e = estimate_energy(&profile).unwrap();
    assert_float_absolute_eq!(e.tdee_kcal - e.calorie_target_kcal, 500.0, 1e-6);
}

#[test]
fn test_loss_target_is_floored() {
    let profile = UserProfile {
        sex: Sex::Other,
        age_years: 80,
        height_cm: 150.0,
        weight_kg: 45.0,
        goal_weight_kg: Some(35.0),
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Lose,
        health_condition: None,
        fitness_level: None,
    };
    let e = estimate_energy(&profile).unwrap();
    assert_eq!(e.calorie_target_kcal, CALORIE_FLOOR);
}

#[test]
fn test_invalid_profile_rejected() {
    let mut profile = make_profile(Goal::Maintain, ActivityLevel::Light);
    profile.weight_kg = 0.0;
    assert!(matches!(
        estimate_energy(&profile),
        Err(FitError::InvalidInput(_))
    ));
}

#[test]
fn test_unknown_activity_level_is_invalid_input() {
    assert!(matches!(
        "couch".parse::<ActivityLevel>(),
        Err(FitError::InvalidInput(_))
    ));
}

#[test]
fn test_macro_calories_match_target() {
    for goal in Goal::ALL {
        let mut target = 100.0;
        while target < 6000.0 {
            let m = allocate_macros(target, goal).unwrap();
            assert!(
                (m.total_kcal() - target).abs() <= 3.0,
                "{goal:?} {target}: {}",
                m.total_kcal()
            );
            target += 37.3;
        }
    }
}

#[test]
fn test_macro_ratios_by_goal() {
    let lose = allocate_macros(3000.0, Goal::Lose).unwrap();
    let gain = allocate_macros(3000.0, Goal::Gain).unwrap();
    let maintain = allocate_macros(3000.0, Goal::Maintain).unwrap();

    // 1050/4 rounds half away from zero
    assert_eq!(lose.protein_g, 263);
    assert_eq!(gain.protein_g, 225);
    assert_eq!(maintain.protein_g, 188);

    // 750/9, 600/9
    assert_eq!(lose.fat_g, 83);
    assert_eq!(gain.fat_g, 67);

    assert!(gain.carbs_g > lose.carbs_g);
}

#[test]
fn test_macros_reject_negative_target() {
    assert!(matches!(
        allocate_macros(-100.0, Goal::Gain),
        Err(FitError::InvalidInput(_))
    ));
}

#[test]
fn test_bmi_examples() {
    let normal = classify_bmi(175.0, 70.0).unwrap();
    assert_float_absolute_eq!(normal.bmi, 22.857, 0.001);
    assert_eq!(normal.category, BmiCategory::Normal);

    let under = classify_bmi(175.0, 50.0).unwrap();
    assert_float_absolute_eq!(under.bmi, 16.327, 0.001);
    assert_eq!(under.category, BmiCategory::Underweight);
}

#[test]
fn test_bmi_boundaries_half_open() {
    // 2m tall: bmi = weight / 4
    assert_eq!(classify_bmi(200.0, 100.0).unwrap().category, BmiCategory::Overweight);
    assert_eq!(classify_bmi(200.0, 99.8).unwrap().category, BmiCategory::Normal);
    assert_eq!(classify_bmi(200.0, 120.0).unwrap().category, BmiCategory::Obese);
    assert_eq!(classify_bmi(200.0, 119.8).unwrap().category, BmiCategory::Overweight);
    assert_eq!(classify_bmi(200.0, 74.0).unwrap().category, BmiCategory::Normal);
}

#[test]
fn test_bmi_rejects_bad_input() {
    assert!(classify_bmi(0.0, 70.0).is_err());
    assert!(classify_bmi(175.0, f64::INFINITY).is_err());
}
