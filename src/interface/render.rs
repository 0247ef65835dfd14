use crate::models::{DayCombination, DaySet, Weekday, WeeklySchedule};
use crate::state::MealPool;

fn meal_display_name(pool: &MealPool, meal_id: &str) -> String {
    pool.get(meal_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| meal_id.to_string())
}

/// Display enumerated day combinations with meal names resolved.
pub fn display_combinations(combinations: &[DayCombination], pool: &MealPool) {
    if combinations.is_empty() {
        println!("No valid day combinations (pool too small or too constrained).");
        return;
    }

    println!();
    println!("=== Day Combinations ({}) ===", combinations.len());
    println!();

    for (i, combo) in combinations.iter().enumerate() {
        let names: Vec<String> = combo
            .slots
            .iter()
            .map(|id| meal_display_name(pool, id))
            .collect();
        println!("{:>4}. {}", i + 1, names.join(" | "));
    }

    println!();
}

/// Display candidate day-sets, least slot-0 variety first.
pub fn display_day_sets(sets: &[DaySet], pool: &MealPool) {
    if sets.is_empty() {
        println!("No valid day-sets found.");
        return;
    }

    println!();
    println!("=== Candidate Day-Sets ({}) ===", sets.len());

    for (i, set) in sets.iter().enumerate() {
        println!();
        println!(
            "Set {} - {} days, {} distinct first meals",
            i + 1,
            set.len(),
            set.slot_zero_variety()
        );
        for (d, combo) in set.combinations.iter().enumerate() {
            let names: Vec<String> = combo
                .slots
                .iter()
                .map(|id| meal_display_name(pool, id))
                .collect();
            println!("  Day {}: {}", d + 1, names.join(" | "));
        }
    }

    println!();
}

/// Display a weekly schedule as a Monday-first table.
pub fn display_week(schedule: &WeeklySchedule) {
    println!();
    println!("=== Weekly Schedule ===");
    println!();

    for weekday in Weekday::ALL {
        match schedule.get(weekday) {
            Some(day) => {
                let meals: Vec<String> = day
                    .meals
                    .iter()
                    .map(|m| match &m.meal_time {
                        Some(time) => format!("{} {}", time, m.name),
                        None => m.name.clone(),
                    })
                    .collect();
                println!(
                    "{:<9} {:>5.0} cal | {:>4.0}g protein | {}",
                    weekday.name(),
                    day.day_calories,
                    day.day_protein,
                    meals.join(", ")
                );
            }
            None => println!("{:<9} (unfilled)", weekday.name()),
        }
    }

    println!();
}
