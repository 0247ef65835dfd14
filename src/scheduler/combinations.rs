use std::collections::HashSet;

use tracing::warn;

use crate::error::Result;
use crate::models::{DayCombination, Meal, MealCategory};
use crate::scheduler::slots::allowed_slots;

/// Enumerate every legal one-day assignment of meals to slots.
///
/// Flexible meals (versatile/unset) are pinned to one of their allowed slots
/// per Cartesian-product assignment; fixed-category meals are candidates in
/// every slot their allowance covers. Each assignment then expands into every
/// pick-one-meal-per-slot combination without a repeated meal id, and results
/// are de-duplicated by content across assignments.
///
/// The output is capped at `cap` combinations; hitting the cap logs a warning
/// and returns the partial result rather than exhausting memory.
pub fn enumerate_day_combinations(
    pool: &[Meal],
    meals_per_day: u8,
    cap: usize,
) -> Result<Vec<DayCombination>> {
    // Validates meals_per_day through the allowance table before any work.
    allowed_slots(MealCategory::Unset, meals_per_day)?;

    let slot_count = meals_per_day as usize;
    if pool.is_empty() || cap == 0 {
        return Ok(Vec::new());
    }

    let mut fixed: Vec<(&Meal, Vec<usize>)> = Vec::new();
    let mut flexible: Vec<(&Meal, Vec<usize>)> = Vec::new();
    for meal in pool {
        let allow = allowed_slots(meal.category, meals_per_day)?;
        if meal.category.is_flexible() {
            flexible.push((meal, allow));
        } else {
            fixed.push((meal, allow));
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<DayCombination> = Vec::new();

    // Mixed-radix odometer over each flexible meal's allowed slots.
    let mut assignment = vec![0usize; flexible.len()];
    loop {
        let mut per_slot: Vec<Vec<&Meal>> = vec![Vec::new(); slot_count];
        for (meal, allow) in &fixed {
            for &slot in allow {
                per_slot[slot].push(*meal);
            }
        }
        for (i, (meal, allow)) in flexible.iter().enumerate() {
            per_slot[allow[assignment[i]]].push(*meal);
        }

        let mut picked: Vec<&Meal> = Vec::with_capacity(slot_count);
        fill_slots(&per_slot, &mut picked, &mut seen, &mut out, cap);

        if out.len() >= cap {
            warn!(cap, "combination cap reached, enumeration truncated");
            break;
        }

        if !advance(&mut assignment, &flexible) {
            break;
        }
    }

    Ok(out)
}

/// Pick one meal per slot, skipping repeats, recording each full combination.
fn fill_slots<'a>(
    per_slot: &[Vec<&'a Meal>],
    picked: &mut Vec<&'a Meal>,
    seen: &mut HashSet<String>,
    out: &mut Vec<DayCombination>,
    cap: usize,
) {
    if out.len() >= cap {
        return;
    }

    let slot = picked.len();
    if slot == per_slot.len() {
        let combo = DayCombination::new(picked.iter().map(|m| m.id.clone()).collect());
        if seen.insert(combo.content_key()) {
            out.push(combo);
        }
        return;
    }

    for &meal in &per_slot[slot] {
        if picked.iter().any(|p| p.id == meal.id) {
            continue;
        }
        picked.push(meal);
        fill_slots(per_slot, picked, seen, out, cap);
        picked.pop();
    }
}

/// Advance the odometer; false once every assignment has been visited.
fn advance(assignment: &mut [usize], flexible: &[(&Meal, Vec<usize>)]) -> bool {
    for i in (0..assignment.len()).rev() {
        if assignment[i] + 1 < flexible[i].1.len() {
            assignment[i] += 1;
            assignment[i + 1..].fill(0);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;

    fn meal(id: &str, category: MealCategory) -> Meal {
        Meal {
            id: id.to_string(),
            name: id.to_uppercase(),
            category,
            description: String::new(),
            best_for: String::new(),
            image_url: String::new(),
            color: String::new(),
            recipe: String::new(),
        }
    }

    #[test]
    fn test_rejects_invalid_meals_per_day() {
        let pool = vec![meal("a", MealCategory::Breakfast)];
        assert!(matches!(
            enumerate_day_combinations(&pool, 5, 100),
            Err(PlanError::InvalidMealsPerDay(5))
        ));
    }

    #[test]
    fn test_empty_pool_yields_no_combinations() {
        let combos = enumerate_day_combinations(&[], 3, 100).unwrap();
        assert!(combos.is_empty());
    }

    #[test]
    fn test_two_slot_scenario() {
        // A(breakfast), B(lunch), C(dinner), D(versatile) under 2 meals/day:
        // slot 0 from {A,B,D}, slot 1 from {B,C,D}, no meal twice.
        let pool = vec![
            meal("a", MealCategory::Breakfast),
            meal("b", MealCategory::Lunch),
            meal("c", MealCategory::Dinner),
            meal("d", MealCategory::Versatile),
        ];
        let combos = enumerate_day_combinations(&pool, 2, 1_000).unwrap();

        assert!(!combos.is_empty());
        for combo in &combos {
            assert_eq!(combo.len(), 2);
            assert!(["a", "b", "d"].contains(&combo.slots[0].as_str()));
            assert!(["b", "c", "d"].contains(&combo.slots[1].as_str()));
            assert_ne!(combo.slots[0], combo.slots[1]);
        }

        let keys: HashSet<String> = combos.iter().map(|c| c.content_key()).collect();
        assert_eq!(keys.len(), combos.len(), "combinations must be distinct");
        for expected in ["a|b", "a|c", "a|d", "b|c", "d|b", "d|c"] {
            assert!(keys.contains(expected), "missing combination {}", expected);
        }
        assert!(!keys.contains("b|b"));
    }

    #[test]
    fn test_slots_respect_allowances() {
        let pool = vec![
            meal("bf", MealCategory::Breakfast),
            meal("ln", MealCategory::Lunch),
            meal("dn", MealCategory::Dinner),
            meal("vx", MealCategory::Versatile),
            meal("un", MealCategory::Unset),
        ];
        for meals_per_day in 1..=4u8 {
            let combos = enumerate_day_combinations(&pool, meals_per_day, 10_000).unwrap();
            for combo in &combos {
                for (slot, id) in combo.slots.iter().enumerate() {
                    let category = pool.iter().find(|m| &m.id == id).unwrap().category;
                    let allow = allowed_slots(category, meals_per_day).unwrap();
                    assert!(
                        allow.contains(&slot),
                        "meal {} in disallowed slot {} ({} meals/day)",
                        id,
                        slot,
                        meals_per_day
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_meal_within_combination() {
        let pool = vec![
            meal("v1", MealCategory::Versatile),
            meal("v2", MealCategory::Versatile),
            meal("v3", MealCategory::Unset),
        ];
        let combos = enumerate_day_combinations(&pool, 3, 10_000).unwrap();
        assert!(!combos.is_empty());
        for combo in &combos {
            let unique: HashSet<&String> = combo.slots.iter().collect();
            assert_eq!(unique.len(), combo.len());
        }
    }

    #[test]
    fn test_cap_truncates() {
        let pool: Vec<Meal> = (0..6)
            .map(|i| meal(&format!("v{}", i), MealCategory::Versatile))
            .collect();
        let combos = enumerate_day_combinations(&pool, 3, 10).unwrap();
        assert_eq!(combos.len(), 10);
    }

    #[test]
    fn test_too_few_meals_for_slots() {
        // One breakfast meal cannot fill a 3-slot day.
        let pool = vec![meal("bf", MealCategory::Breakfast)];
        let combos = enumerate_day_combinations(&pool, 3, 100).unwrap();
        assert!(combos.is_empty());
    }
}
