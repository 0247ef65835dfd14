use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One candidate way to fill all slots of a single day.
///
/// `slots[i]` is the id of the meal occupying slot `i`. Length equals the
/// configured meals-per-day; produced by the enumerator, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCombination {
    pub slots: Vec<String>,
}

impl DayCombination {
    pub fn new(slots: Vec<String>) -> Self {
        Self { slots }
    }

    /// Slot index of a meal within this combination, if present.
    pub fn slot_of(&self, meal_id: &str) -> Option<usize> {
        self.slots.iter().position(|id| id == meal_id)
    }

    pub fn contains(&self, meal_id: &str) -> bool {
        self.slots.iter().any(|id| id == meal_id)
    }

    /// Stable content key for de-duplication.
    pub fn content_key(&self) -> String {
        self.slots.join("|")
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A mutually slot-consistent collection of day combinations.
///
/// Any meal id appearing in more than one combination occupies the same slot
/// index in all of them, so the set can rotate across days without a meal
/// jumping between slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySet {
    pub combinations: Vec<DayCombination>,
}

impl DaySet {
    pub fn new(combinations: Vec<DayCombination>) -> Self {
        Self { combinations }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Count of distinct meals occupying slot 0 across the set.
    ///
    /// Lower means a steadier first meal of the day; used as the preference
    /// order for presenting candidate sets.
    pub fn slot_zero_variety(&self) -> usize {
        self.combinations
            .iter()
            .filter_map(|c| c.slots.first())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Verify cross-combination slot consistency.
    pub fn is_consistent(&self) -> bool {
        let mut committed: HashMap<&str, usize> = HashMap::new();
        for combo in &self.combinations {
            for (slot, meal_id) in combo.slots.iter().enumerate() {
                match committed.get(meal_id.as_str()) {
                    Some(&seen) if seen != slot => return false,
                    _ => {
                        committed.insert(meal_id, slot);
                    }
                }
            }
        }
        true
    }
}
