use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::catalog::{
    example_meals, MealRow, WorkoutKey, WorkoutRow, DEFAULT_MEALS, GENERIC_WEEK, MEAL_TABLE,
    MUSCLE_BUILDING_MEALS, WORKOUT_TABLE,
};
use crate::models::{FitnessLevel, Goal, HealthCondition, MealPlanTemplate, WorkoutPlanTemplate};

/// Find a meal row: exact `(goal, condition)`, then `(goal, Healthy)`,
/// then `(Maintain, Healthy)`, then `fallback`.
pub(crate) fn lookup_meal_row<'a>(
    table: &'a [MealRow],
    fallback: &'a MealRow,
    goal: Goal,
    condition: HealthCondition,
) -> &'a MealRow {
    let find = |g: Goal, c: HealthCondition| table.iter().find(|r| r.goal == g && r.condition == c);

    find(goal, condition)
        .or_else(|| find(goal, HealthCondition::Healthy))
        .or_else(|| find(Goal::Maintain, HealthCondition::Healthy))
        .unwrap_or(fallback)
}

/// Find a workout row: condition override (for non-healthy conditions),
/// then `(goal, level)`, then `(goal, any level)`, then `fallback`.
pub(crate) fn lookup_workout_row<'a>(
    table: &'a [WorkoutRow],
    fallback: &'a WorkoutRow,
    goal: Goal,
    condition: HealthCondition,
    level: Option<FitnessLevel>,
) -> &'a WorkoutRow {
    let find = |key: WorkoutKey| table.iter().find(|r| r.key == key);

    let by_condition = match condition {
        HealthCondition::Healthy => None,
        other => find(WorkoutKey::Condition(other)),
    };

    by_condition
        .or_else(|| level.and_then(|l| find(WorkoutKey::Goal(goal, Some(l)))))
        .or_else(|| find(WorkoutKey::Goal(goal, None)))
        .unwrap_or(fallback)
}

/// Select the canned meal plan for a goal and optional health condition.
///
/// Never fails: missing combinations fall back to the goal's healthy plan
/// and finally to the maintenance plan.
pub fn select_meal_plan(goal: Goal, condition: Option<HealthCondition>) -> MealPlanTemplate {
    let condition = condition.unwrap_or(HealthCondition::Healthy);
    let row = lookup_meal_row(MEAL_TABLE, &DEFAULT_MEALS, goal, condition);
    debug!(
        ?goal,
        ?condition,
        plan = row.name,
        selected_goal = ?row.goal,
        selected_condition = ?row.condition,
        "selected meal plan"
    );
    row.to_template()
}

/// Like [`select_meal_plan`], but trained lifters who are gaining without a
/// health condition get the high-protein muscle building day.
pub fn select_meal_plan_for_level(
    goal: Goal,
    condition: Option<HealthCondition>,
    level: Option<FitnessLevel>,
) -> MealPlanTemplate {
    let healthy = condition.is_none_or(|c| c == HealthCondition::Healthy);
    let trained = matches!(
        level,
        Some(FitnessLevel::Intermediate | FitnessLevel::Advanced)
    );

    if goal == Goal::Gain && healthy && trained {
        debug!(?level, plan = MUSCLE_BUILDING_MEALS.name, "selected meal plan");
        return MUSCLE_BUILDING_MEALS.to_template();
    }
    select_meal_plan(goal, condition)
}

/// Select the canned 7-day workout plan.
///
/// A health condition with its own low-risk week wins over the goal.
/// Anything unmatched gets the generic balanced week.
pub fn select_workout_plan(
    goal: Goal,
    condition: Option<HealthCondition>,
    level: Option<FitnessLevel>,
) -> WorkoutPlanTemplate {
    let condition = condition.unwrap_or(HealthCondition::Healthy);
    let row = lookup_workout_row(WORKOUT_TABLE, &GENERIC_WEEK, goal, condition, level);
    debug!(?goal, ?condition, ?level, plan = row.name, "selected workout plan");
    row.to_template()
}

/// Pick `count` distinct example dishes for a goal, reproducibly for a seed.
///
/// `count` is capped at the size of the goal's pool.
pub fn sample_example_meals(goal: Goal, count: usize, seed: u64) -> Vec<String> {
    let pool = example_meals(goal, None);
    let mut rng = StdRng::seed_from_u64(seed);
    pool.choose_multiple(&mut rng, count)
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_lookup_empty_table_uses_fallback() {
        let row = lookup_meal_row(&[], &DEFAULT_MEALS, Goal::Gain, HealthCondition::Diabetes);
        assert!(std::ptr::eq(row, &DEFAULT_MEALS));
    }

    #[test]
    fn test_meal_lookup_prefers_maintain_healthy_when_goal_missing() {
        // Table without any Gain rows
        let table: Vec<MealRow> = MEAL_TABLE
            .iter()
            .filter(|r| r.goal != Goal::Gain)
            .cloned()
            .collect();
        let row = lookup_meal_row(&table, &DEFAULT_MEALS, Goal::Gain, HealthCondition::Healthy);
        assert_eq!(row.goal, Goal::Maintain);
        assert_eq!(row.condition, HealthCondition::Healthy);
    }

    #[test]
    fn test_trained_gain_gets_muscle_building() {
        for level in [FitnessLevel::Intermediate, FitnessLevel::Advanced] {
            let plan = select_meal_plan_for_level(Goal::Gain, None, Some(level));
            assert_eq!(plan.name, "Muscle Building");
            assert_eq!(plan.entries[0].name, "Protein Pancakes with Berries");
            assert_eq!(plan.entries[0].reference_kcal, Some(500));
            assert_eq!(plan.entries[0].protein_g, Some(35));
            assert_eq!(plan.total_share(), 1.0);
        }
    }

    #[test]
    fn test_other_profiles_keep_goal_plan() {
        let cases = [
            (Goal::Gain, None, Some(FitnessLevel::Beginner)),
            (Goal::Gain, None, None),
            (Goal::Gain, Some(HealthCondition::Diabetes), Some(FitnessLevel::Advanced)),
            (Goal::Lose, None, Some(FitnessLevel::Advanced)),
        ];
        for (goal, condition, level) in cases {
            assert_eq!(
                select_meal_plan_for_level(goal, condition, level),
                select_meal_plan(goal, condition),
                "{goal:?} {condition:?} {level:?}"
            );
        }
    }

    #[test]
    fn test_loss_plan_carries_serving_figures() {
        let plan = select_meal_plan(Goal::Lose, None);
        assert_eq!(plan.name, "Weight Loss");
        let figures: Vec<_> = plan
            .entries
            .iter()
            .map(|e| (e.reference_kcal, e.protein_g))
            .collect();
        assert_eq!(
            figures,
            [
                (Some(300), Some(25)),
                (Some(400), Some(35)),
                (Some(450), Some(40)),
                (Some(200), Some(8)),
            ]
        );
    }

    #[test]
    fn test_workout_lookup_empty_table_uses_fallback() {
        let row = lookup_workout_row(
            &[],
            &GENERIC_WEEK,
            Goal::Lose,
            HealthCondition::JointPain,
            Some(FitnessLevel::Advanced),
        );
        assert_eq!(row.name, GENERIC_WEEK.name);
    }

    #[test]
    fn test_sample_is_deterministic_and_distinct() {
        let a = sample_example_meals(Goal::Gain, 3, 7);
        let b = sample_example_meals(Goal::Gain, 3, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);

        let mut unique = a.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_sample_caps_at_pool_size() {
        let pool = example_meals(Goal::Maintain, None).len();
        assert_eq!(sample_example_meals(Goal::Maintain, 1000, 1).len(), pool);
        assert!(sample_example_meals(Goal::Maintain, 0, 1).is_empty());
    }
}
