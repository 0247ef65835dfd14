use crate::error::{PlanError, Result};
use crate::models::MealCategory;

/// Slot indices a meal of the given category may occupy for a day of
/// `meals_per_day` slots.
///
/// This table is the constraint kernel everything downstream depends on:
/// a breakfast meal never lands in a dinner slot, versatile and unset meals
/// go anywhere. Only 1-4 meals per day are supported.
pub fn allowed_slots(category: MealCategory, meals_per_day: u8) -> Result<Vec<usize>> {
    use MealCategory::*;

    let slots = match meals_per_day {
        1 => vec![0],
        2 => match category {
            Breakfast => vec![0],
            Lunch => vec![0, 1],
            Dinner => vec![1],
            Versatile | Unset => vec![0, 1],
        },
        3 => match category {
            Breakfast => vec![0],
            Lunch => vec![1, 2],
            Dinner => vec![1, 2],
            Versatile | Unset => vec![0, 1, 2],
        },
        4 => match category {
            Breakfast => vec![0, 1],
            Lunch => vec![1, 2],
            Dinner => vec![2, 3],
            Versatile | Unset => vec![0, 1, 2, 3],
        },
        other => return Err(PlanError::InvalidMealsPerDay(other)),
    };

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use MealCategory::*;

    #[test]
    fn test_single_slot_day() {
        for category in [Breakfast, Lunch, Dinner, Versatile, Unset] {
            assert_eq!(allowed_slots(category, 1).unwrap(), vec![0]);
        }
    }

    #[test]
    fn test_two_slot_day() {
        assert_eq!(allowed_slots(Breakfast, 2).unwrap(), vec![0]);
        assert_eq!(allowed_slots(Lunch, 2).unwrap(), vec![0, 1]);
        assert_eq!(allowed_slots(Dinner, 2).unwrap(), vec![1]);
        assert_eq!(allowed_slots(Versatile, 2).unwrap(), vec![0, 1]);
        assert_eq!(allowed_slots(Unset, 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_three_slot_day() {
        assert_eq!(allowed_slots(Breakfast, 3).unwrap(), vec![0]);
        assert_eq!(allowed_slots(Lunch, 3).unwrap(), vec![1, 2]);
        assert_eq!(allowed_slots(Dinner, 3).unwrap(), vec![1, 2]);
        assert_eq!(allowed_slots(Versatile, 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_four_slot_day() {
        assert_eq!(allowed_slots(Breakfast, 4).unwrap(), vec![0, 1]);
        assert_eq!(allowed_slots(Lunch, 4).unwrap(), vec![1, 2]);
        assert_eq!(allowed_slots(Dinner, 4).unwrap(), vec![2, 3]);
        assert_eq!(allowed_slots(Unset, 4).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unsupported_meal_counts() {
        assert!(matches!(
            allowed_slots(Lunch, 0),
            Err(PlanError::InvalidMealsPerDay(0))
        ));
        assert!(matches!(
            allowed_slots(Lunch, 5),
            Err(PlanError::InvalidMealsPerDay(5))
        ));
    }

    #[test]
    fn test_every_category_has_a_slot() {
        for meals_per_day in 1..=4 {
            for category in [Breakfast, Lunch, Dinner, Versatile, Unset] {
                let slots = allowed_slots(category, meals_per_day).unwrap();
                assert!(!slots.is_empty());
                assert!(slots.iter().all(|&s| s < meals_per_day as usize));
            }
        }
    }
}
