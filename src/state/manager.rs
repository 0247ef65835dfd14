use std::collections::HashMap;

use crate::models::Meal;

/// The approved-meal pool, keyed by meal id.
///
/// Read-only during a scheduling run; the engine takes it as an explicit
/// parameter instead of reading any ambient store.
pub struct MealPool {
    meals: HashMap<String, Meal>,
}

impl MealPool {
    /// Build a pool from a list of meals. Duplicate ids keep the last
    /// occurrence.
    pub fn new(meals: Vec<Meal>) -> Self {
        let mut map = HashMap::new();
        for meal in meals {
            map.insert(meal.key(), meal);
        }
        Self { meals: map }
    }

    /// Get a meal by id.
    pub fn get(&self, id: &str) -> Option<&Meal> {
        self.meals.get(id)
    }

    /// Get a meal by display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Meal> {
        let lowered = name.to_lowercase();
        self.meals.values().find(|m| m.name.to_lowercase() == lowered)
    }

    /// All meals in the pool.
    pub fn meals(&self) -> Vec<&Meal> {
        self.meals.values().collect()
    }

    /// Meals whose names are in `names` (case-insensitive). An empty filter
    /// returns the whole pool.
    pub fn filter_by_names(&self, names: &[String]) -> Vec<&Meal> {
        if names.is_empty() {
            return self.meals();
        }
        let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        self.meals
            .values()
            .filter(|m| lowered.contains(&m.name.to_lowercase()))
            .collect()
    }

    /// Convert back to a list for JSON serialization.
    pub fn to_meals(&self) -> Vec<Meal> {
        self.meals.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealCategory;

    fn sample_meals() -> Vec<Meal> {
        vec![
            Meal {
                id: "oats".to_string(),
                name: "Oatmeal".to_string(),
                category: MealCategory::Breakfast,
                description: String::new(),
                best_for: String::new(),
                image_url: String::new(),
                color: String::new(),
                recipe: String::new(),
            },
            Meal {
                id: "stew".to_string(),
                name: "Beef Stew".to_string(),
                category: MealCategory::Dinner,
                description: String::new(),
                best_for: String::new(),
                image_url: String::new(),
                color: String::new(),
                recipe: String::new(),
            },
        ]
    }

    #[test]
    fn test_get_by_id() {
        let pool = MealPool::new(sample_meals());
        assert!(pool.get("oats").is_some());
        assert!(pool.get("missing").is_none());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let pool = MealPool::new(sample_meals());
        assert_eq!(pool.find_by_name("beef stew").unwrap().id, "stew");
        assert_eq!(pool.find_by_name("BEEF STEW").unwrap().id, "stew");
        assert!(pool.find_by_name("pizza").is_none());
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let mut meals = sample_meals();
        let mut replacement = meals[0].clone();
        replacement.name = "Overnight Oats".to_string();
        meals.push(replacement);

        let pool = MealPool::new(meals);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get("oats").unwrap().name, "Overnight Oats");
    }

    #[test]
    fn test_filter_by_names() {
        let pool = MealPool::new(sample_meals());

        let filtered = pool.filter_by_names(&["oatmeal".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "oats");

        assert_eq!(pool.filter_by_names(&[]).len(), 2);
    }
}
