use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::warn;

use crate::catalog::example_meals;
use crate::error::Result;
use crate::models::{Goal, MealPlanTemplate, MealSlot};

/// Source of alternative meal names for a plan slot.
///
/// Returning `Ok(None)` keeps the catalog name. Errors are never fatal:
/// the caller falls back to the catalog name.
pub trait MealNameProvider {
    fn meal_name(&self, goal: Goal, slot: MealSlot, default: &str) -> Result<Option<String>>;

    /// Identifies the names this provider hands out; equal keys mean equal plans.
    fn cache_key(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Keeps every catalog name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMealNames;

impl MealNameProvider for StaticMealNames {
    fn meal_name(&self, _goal: Goal, _slot: MealSlot, _default: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Draws names from the example pool, reproducibly for a seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededMealNames {
    pub seed: u64,
}

impl SeededMealNames {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MealNameProvider for SeededMealNames {
    fn meal_name(&self, goal: Goal, slot: MealSlot, _default: &str) -> Result<Option<String>> {
        // One stream per (goal, slot) so answers don't depend on call order
        let stream = ((goal as u64) << 8) | slot as u64;
        let mut rng = StdRng::seed_from_u64(self.seed ^ stream);
        Ok(example_meals(goal, Some(slot))
            .choose(&mut rng)
            .map(|name| name.to_string()))
    }

    fn cache_key(&self) -> String {
        format!("seeded:{}", self.seed)
    }
}

/// Replace meal names slot by slot using `provider`.
///
/// Slots and calorie shares are left untouched. A replaced dish loses the
/// catalog's serving figures, which described the old dish.
pub fn personalize_meal_plan(
    template: &MealPlanTemplate,
    provider: &dyn MealNameProvider,
) -> MealPlanTemplate {
    let mut plan = template.clone();
    let goal = plan.goal;

    for entry in &mut plan.entries {
        match provider.meal_name(goal, entry.slot, &entry.name) {
            Ok(Some(name)) if !name.trim().is_empty() => {
                if name != entry.name {
                    entry.reference_kcal = None;
                    entry.protein_g = None;
                }
                entry.name = name;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(slot = %entry.slot, error = %e, "meal name provider failed, keeping catalog name")
            }
        }
    }

    plan
}
