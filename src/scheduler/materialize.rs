use tracing::warn;

use crate::models::{DayPlan, PlannedMeal, PortionedMeal};
use crate::scheduler::constants::{
    MEAL_TIMES_FOUR, MEAL_TIMES_ONE, MEAL_TIMES_THREE, MEAL_TIMES_TWO, MEAL_WINDOW_END_MIN,
    MEAL_WINDOW_START_MIN,
};
use crate::state::MealPool;

/// Join portioned-meal payloads with pool metadata into `DayPlan` records.
///
/// One `DayPlan` per entry of `days`, ids `plan{N}-day{i}`. A meal id missing
/// from the pool degrades to blank metadata with a logged warning; the batch
/// never aborts. Calorie/protein totals are summed from the portioned
/// payload, not recomputed.
pub fn materialize_day_plans(
    plan_number: u8,
    days: &[Vec<PortionedMeal>],
    pool: &MealPool,
    assign_times: bool,
) -> Vec<DayPlan> {
    days.iter()
        .enumerate()
        .map(|(i, portioned)| {
            let times = if assign_times {
                default_meal_times(portioned.len())
            } else {
                Vec::new()
            };

            let meals: Vec<PlannedMeal> = portioned
                .iter()
                .enumerate()
                .map(|(slot, pm)| {
                    let mut planned = match pool.get(&pm.meal_id) {
                        Some(meal) => PlannedMeal {
                            meal_id: pm.meal_id.clone(),
                            name: meal.name.clone(),
                            description: meal.description.clone(),
                            best_for: meal.best_for.clone(),
                            image_url: meal.image_url.clone(),
                            color: meal.color.clone(),
                            recipe: meal.recipe.clone(),
                            ingredients: pm.ingredients.clone(),
                            calories: pm.total_calories,
                            protein: pm.total_protein,
                            meal_time: None,
                        },
                        None => {
                            warn!(meal_id = %pm.meal_id, "meal missing from pool, using blank metadata");
                            PlannedMeal {
                                meal_id: pm.meal_id.clone(),
                                name: pm.name.clone(),
                                description: String::new(),
                                best_for: String::new(),
                                image_url: String::new(),
                                color: String::new(),
                                recipe: String::new(),
                                ingredients: pm.ingredients.clone(),
                                calories: pm.total_calories,
                                protein: pm.total_protein,
                                meal_time: None,
                            }
                        }
                    };
                    planned.meal_time = times.get(slot).cloned();
                    planned
                })
                .collect();

            DayPlan {
                id: format!("plan{}-day{}", plan_number, i),
                day_calories: meals.iter().map(|m| m.calories).sum(),
                day_protein: meals.iter().map(|m| m.protein).sum(),
                meals,
                is_cheat_day: false,
            }
        })
        .collect()
}

/// Deterministic default meal times for a day of `count` meals.
///
/// Fixed tables for 1-4 meals; 5 or more spread evenly across the
/// 07:00-19:00 window.
pub fn default_meal_times(count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => MEAL_TIMES_ONE.iter().map(|s| s.to_string()).collect(),
        2 => MEAL_TIMES_TWO.iter().map(|s| s.to_string()).collect(),
        3 => MEAL_TIMES_THREE.iter().map(|s| s.to_string()).collect(),
        4 => MEAL_TIMES_FOUR.iter().map(|s| s.to_string()).collect(),
        n => {
            let span = MEAL_WINDOW_END_MIN - MEAL_WINDOW_START_MIN;
            let step = span / (n as u32 - 1);
            (0..n as u32)
                .map(|i| {
                    let minutes = MEAL_WINDOW_START_MIN + i * step;
                    format!("{:02}:{:02}", minutes / 60, minutes % 60)
                })
                .collect()
        }
    }
}
