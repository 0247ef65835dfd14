use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{DaySet, Meal, Variety};

/// Prompt for the weekly variety level.
pub fn prompt_variety() -> Result<Variety> {
    let options: Vec<String> = Variety::ALL
        .iter()
        .map(|v| format!("{} ({} distinct days)", v.name(), v.day_target()))
        .collect();

    let selection = Select::new()
        .with_prompt("How much variety across the week?")
        .items(&options)
        .default(2) // some
        .interact()?;

    Ok(Variety::ALL[selection])
}

/// Prompt to pick one of the candidate day-sets.
pub fn prompt_day_set_choice(sets: &[DaySet]) -> Result<usize> {
    let options: Vec<String> = sets
        .iter()
        .enumerate()
        .map(|(i, set)| {
            format!(
                "Set {} - {} days, {} distinct first meals",
                i + 1,
                set.len(),
                set.slot_zero_variety()
            )
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Which day-set should the week use?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(selection)
}

/// Prompt for meal names to restrict the pool to, with fuzzy matching.
///
/// Empty input finishes; an empty result means "use the whole pool".
pub fn prompt_meal_filter(pool_meals: &[&Meal]) -> Result<Vec<String>> {
    let mut picked = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Restrict to a meal by name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Exact match first (case-insensitive)
        let exact = pool_meals
            .iter()
            .find(|m| m.name.to_lowercase() == input.to_lowercase());

        if let Some(meal) = exact {
            picked.push(meal.name.clone());
            println!("Added: {}", meal.name);
            continue;
        }

        // Fuzzy fallback
        let mut candidates: Vec<(&Meal, f64)> = pool_meals
            .iter()
            .map(|m| (*m, jaro_winkler(&m.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching meal found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let meal = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", meal.name))
                .default(true)
                .interact()?;

            if confirm {
                picked.push(meal.name.clone());
                println!("Added: {}", meal.name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(m, _)| m.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                picked.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(picked)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
