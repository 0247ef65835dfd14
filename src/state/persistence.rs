use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{DaySet, Meal, PortionedMeal, WeeklySchedule};

/// Load the approved-meal pool from a JSON file.
///
/// Deduplicates by id (last occurrence wins).
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<Meal> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, Meal> = HashMap::new();
    for meal in meals {
        seen.insert(meal.key(), meal);
    }

    Ok(seen.into_values().collect())
}

/// Save the approved-meal pool to a JSON file.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let mut seen: HashMap<String, &Meal> = HashMap::new();
    for meal in meals {
        seen.insert(meal.key(), meal);
    }

    let deduped: Vec<&Meal> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load per-day portioned meals, as produced by the external optimizer.
///
/// One outer entry per day, one inner entry per slot.
pub fn load_portion_days<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<PortionedMeal>>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a chosen day-set for downstream tooling.
pub fn save_day_set<P: AsRef<Path>>(path: P, set: &DaySet) -> Result<()> {
    let json = serde_json::to_string_pretty(set)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save a weekly schedule.
pub fn save_schedule<P: AsRef<Path>>(path: P, schedule: &WeeklySchedule) -> Result<()> {
    let json = serde_json::to_string_pretty(schedule)?;
    fs::write(path, json)?;
    Ok(())
}
