use crate::models::{Goal, HealthCondition, MealPlanEntry, MealPlanTemplate, MealSlot};

/// A static day of meals in slot order.
///
/// Each meal is `(name, calorie_share, reference_kcal, protein_g)`. Shares are
/// dyadic fractions so that they sum to exactly 1.0 in `f64`. The kcal and
/// protein figures describe one standard serving of the dish.
#[derive(Debug, Clone)]
pub struct MealRow {
    pub name: &'static str,
    pub goal: Goal,
    pub condition: HealthCondition,
    pub meals: [(&'static str, f64, u32, u32); 4],
}

impl MealRow {
    pub fn to_template(&self) -> MealPlanTemplate {
        let entries = MealSlot::ALL
            .iter()
            .zip(self.meals.iter())
            .map(|(slot, (name, share, kcal, protein))| MealPlanEntry {
                slot: *slot,
                name: name.to_string(),
                calorie_share: *share,
                reference_kcal: Some(*kcal),
                protein_g: Some(*protein),
            })
            .collect();

        MealPlanTemplate {
            name: self.name.to_string(),
            goal: self.goal,
            condition: self.condition,
            entries,
        }
    }
}

/// Used when nothing in the table matches.
pub static DEFAULT_MEALS: MealRow = MealRow {
    name: "Weight Maintenance",
    goal: Goal::Maintain,
    condition: HealthCondition::Healthy,
    meals: [
        ("Whole Grain Toast with Eggs and Avocado", 0.25, 450, 25),
        ("Turkey and Hummus Wrap with Side Salad", 0.28125, 500, 30),
        ("Fish with Quinoa and Steamed Vegetables", 0.3125, 550, 35),
        ("Greek Yogurt with Nuts", 0.15625, 300, 20),
    ],
};

/// High-protein day for trained lifters who are gaining.
pub static MUSCLE_BUILDING_MEALS: MealRow = MealRow {
    name: "Muscle Building",
    goal: Goal::Gain,
    condition: HealthCondition::Healthy,
    meals: [
        ("Protein Pancakes with Berries", 0.25, 500, 35),
        ("Lean Beef with Brown Rice and Broccoli", 0.3125, 650, 45),
        ("Salmon with Sweet Potato and Asparagus", 0.28125, 600, 40),
        ("Cottage Cheese with Almonds", 0.15625, 350, 30),
    ],
};

pub static MEAL_TABLE: &[MealRow] = &[
    MealRow {
        name: "Weight Loss",
        goal: Goal::Lose,
        condition: HealthCondition::Healthy,
        meals: [
            ("Greek Yogurt with Berries and Chia Seeds", 0.25, 300, 25),
            ("Grilled Chicken Salad with Quinoa", 0.3125, 400, 35),
            ("Baked Salmon with Roasted Vegetables", 0.3125, 450, 40),
            ("Apple with Almond Butter", 0.125, 200, 8),
        ],
    },
    MealRow {
        name: "Weight Gain",
        goal: Goal::Gain,
        condition: HealthCondition::Healthy,
        meals: [
            ("Oatmeal with Banana and Peanut Butter", 0.25, 550, 20),
            ("Beef and Vegetable Stir-fry with Rice", 0.28125, 600, 35),
            ("Chicken with Sweet Potato and Avocado", 0.28125, 650, 45),
            ("Protein Shake with Oats", 0.1875, 350, 30),
        ],
    },
    MealRow {
        name: "Weight Maintenance",
        goal: Goal::Maintain,
        condition: HealthCondition::Healthy,
        meals: [
            ("Whole Grain Toast with Eggs and Avocado", 0.25, 450, 25),
            ("Turkey and Hummus Wrap with Side Salad", 0.28125, 500, 30),
            ("Fish with Quinoa and Steamed Vegetables", 0.3125, 550, 35),
            ("Greek Yogurt with Nuts", 0.15625, 300, 20),
        ],
    },
    // Low glycemic load
    MealRow {
        name: "Diabetic Weight Loss",
        goal: Goal::Lose,
        condition: HealthCondition::Diabetes,
        meals: [
            ("Vegetable Omelette with Whole Grain Toast", 0.25, 320, 22),
            ("Lentil Soup with Mixed Greens", 0.3125, 380, 24),
            ("Grilled Chicken with Cauliflower Rice", 0.3125, 420, 42),
            ("Celery Sticks with Hummus", 0.125, 150, 5),
        ],
    },
    MealRow {
        name: "Diabetic Maintenance",
        goal: Goal::Maintain,
        condition: HealthCondition::Diabetes,
        meals: [
            ("Steel-Cut Oats with Walnuts", 0.25, 420, 14),
            ("Quinoa Bowl with Chickpeas and Vegetables", 0.28125, 480, 20),
            ("Baked Cod with Broccoli and Brown Rice", 0.3125, 520, 38),
            ("Plain Greek Yogurt with Cinnamon", 0.15625, 220, 18),
        ],
    },
    // Low sodium
    MealRow {
        name: "Low-Sodium Weight Loss",
        goal: Goal::Lose,
        condition: HealthCondition::Hypertension,
        meals: [
            ("Unsalted Oatmeal with Banana", 0.25, 310, 9),
            ("Spinach Salad with Grilled Salmon", 0.3125, 410, 34),
            ("Herb-Roasted Chicken with Sweet Potato", 0.3125, 440, 38),
            ("Unsalted Almonds", 0.125, 170, 6),
        ],
    },
    MealRow {
        name: "Low-Sodium Maintenance",
        goal: Goal::Maintain,
        condition: HealthCondition::Hypertension,
        meals: [
            ("Muesli with Low-Fat Milk and Berries", 0.25, 430, 16),
            ("Brown Rice Bowl with Beans and Avocado", 0.28125, 500, 18),
            ("Baked Trout with Potatoes and Green Beans", 0.3125, 540, 36),
            ("Banana with Unsalted Peanuts", 0.15625, 260, 9),
        ],
    },
    MealRow {
        name: "Heart-Healthy Maintenance",
        goal: Goal::Maintain,
        condition: HealthCondition::HeartDisease,
        meals: [
            ("Oatmeal with Flaxseed and Berries", 0.25, 400, 12),
            ("Mediterranean Bean Salad", 0.28125, 480, 19),
            ("Grilled Mackerel with Steamed Vegetables", 0.3125, 530, 37),
            ("Fresh Fruit with Walnuts", 0.15625, 240, 5),
        ],
    },
];

/// Interchangeable dishes per goal and slot, used for example picks.
pub static EXAMPLE_MEALS: &[(Goal, MealSlot, &str)] = &[
    (Goal::Lose, MealSlot::Breakfast, "Greek Yogurt with Berries and Chia Seeds"),
    (Goal::Lose, MealSlot::Breakfast, "Egg White Scramble with Spinach"),
    (Goal::Lose, MealSlot::Breakfast, "Cottage Cheese with Pineapple"),
    (Goal::Lose, MealSlot::Lunch, "Grilled Chicken Salad with Quinoa"),
    (Goal::Lose, MealSlot::Lunch, "Tuna Lettuce Wraps"),
    (Goal::Lose, MealSlot::Lunch, "Turkey and Vegetable Soup"),
    (Goal::Lose, MealSlot::Dinner, "Baked Salmon with Roasted Vegetables"),
    (Goal::Lose, MealSlot::Dinner, "Zucchini Noodles with Turkey Meatballs"),
    (Goal::Lose, MealSlot::Dinner, "Shrimp Stir-fry with Broccoli"),
    (Goal::Lose, MealSlot::Snack, "Apple with Almond Butter"),
    (Goal::Lose, MealSlot::Snack, "Carrot Sticks with Hummus"),
    (Goal::Gain, MealSlot::Breakfast, "Oatmeal with Banana and Peanut Butter"),
    (Goal::Gain, MealSlot::Breakfast, "Protein Pancakes with Berries"),
    (Goal::Gain, MealSlot::Breakfast, "Bagel with Eggs and Cheese"),
    (Goal::Gain, MealSlot::Lunch, "Beef and Vegetable Stir-fry with Rice"),
    (Goal::Gain, MealSlot::Lunch, "Lean Beef with Brown Rice and Broccoli"),
    (Goal::Gain, MealSlot::Lunch, "Chicken Burrito Bowl"),
    (Goal::Gain, MealSlot::Dinner, "Chicken with Sweet Potato and Avocado"),
    (Goal::Gain, MealSlot::Dinner, "Salmon with Sweet Potato and Asparagus"),
    (Goal::Gain, MealSlot::Dinner, "Whole Wheat Pasta with Meat Sauce"),
    (Goal::Gain, MealSlot::Snack, "Protein Shake with Oats"),
    (Goal::Gain, MealSlot::Snack, "Cottage Cheese with Almonds"),
    (Goal::Gain, MealSlot::Snack, "Trail Mix with Dried Fruit"),
    (Goal::Maintain, MealSlot::Breakfast, "Whole Grain Toast with Eggs and Avocado"),
    (Goal::Maintain, MealSlot::Breakfast, "Overnight Oats with Apple"),
    (Goal::Maintain, MealSlot::Lunch, "Turkey and Hummus Wrap with Side Salad"),
    (Goal::Maintain, MealSlot::Lunch, "Chickpea and Feta Salad"),
    (Goal::Maintain, MealSlot::Dinner, "Fish with Quinoa and Steamed Vegetables"),
    (Goal::Maintain, MealSlot::Dinner, "Chicken Fajitas with Peppers"),
    (Goal::Maintain, MealSlot::Snack, "Greek Yogurt with Nuts"),
    (Goal::Maintain, MealSlot::Snack, "Rice Cakes with Peanut Butter"),
];

/// Example dish names for a goal, optionally restricted to one slot.
pub fn example_meals(goal: Goal, slot: Option<MealSlot>) -> Vec<&'static str> {
    EXAMPLE_MEALS
        .iter()
        .filter(|(g, s, _)| *g == goal && slot.is_none_or(|slot| slot == *s))
        .map(|(_, _, name)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rows() -> impl Iterator<Item = &'static MealRow> {
        MEAL_TABLE
            .iter()
            .chain([&DEFAULT_MEALS, &MUSCLE_BUILDING_MEALS])
    }

    #[test]
    fn test_every_row_sums_to_one() {
        for row in all_rows() {
            let total: f64 = row.meals.iter().map(|(_, share, _, _)| share).sum();
            assert_eq!(total, 1.0, "{}", row.name);
            assert!(row.meals.iter().all(|(_, s, _, _)| *s > 0.0 && *s < 1.0));
        }
    }

    #[test]
    fn test_every_meal_has_serving_figures() {
        for row in all_rows() {
            for (name, _, kcal, protein) in row.meals {
                assert!(kcal > 0 && protein > 0, "{}: {name}", row.name);
                // 4 kcal per gram of protein can't exceed the serving
                assert!(protein * 4 < kcal, "{}: {name}", row.name);
            }
        }
    }

    #[test]
    fn test_muscle_building_dishes_are_gain_examples() {
        for (slot, (name, _, _, _)) in MealSlot::ALL.iter().zip(MUSCLE_BUILDING_MEALS.meals) {
            assert!(example_meals(Goal::Gain, Some(*slot)).contains(&name));
        }
    }

    #[test]
    fn test_every_goal_has_healthy_row() {
        for goal in Goal::ALL {
            assert!(
                MEAL_TABLE
                    .iter()
                    .any(|r| r.goal == goal && r.condition == HealthCondition::Healthy)
            );
        }
    }

    #[test]
    fn test_every_goal_slot_has_examples() {
        for goal in Goal::ALL {
            for slot in MealSlot::ALL {
                assert!(!example_meals(goal, Some(slot)).is_empty());
            }
        }
    }
}
