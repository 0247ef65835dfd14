use serde::{Deserialize, Serialize};

/// Which part of the day a meal belongs to.
///
/// `Versatile` and `Unset` meals may occupy any slot; the fixed categories
/// are restricted by the slot-allowance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Versatile,
    #[default]
    Unset,
}

impl MealCategory {
    /// True for categories with no fixed slot preference.
    #[inline]
    pub fn is_flexible(&self) -> bool {
        matches!(self, MealCategory::Versatile | MealCategory::Unset)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Versatile => "versatile",
            MealCategory::Unset => "unset",
        }
    }
}

/// An approved meal with display metadata.
///
/// Immutable within a scheduling run; the pool that owns these lives outside
/// the engine. Metadata fields default to empty so older pool files still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub category: MealCategory,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub best_for: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub recipe: String,
}

impl Meal {
    /// Canonical key for pool lookups.
    pub fn key(&self) -> String {
        self.id.clone()
    }

    /// Basic validation: non-empty identity.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{} ({}, {})", self.name, self.id, self.category.name())
    }
}

impl PartialEq for Meal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Meal {}

impl std::hash::Hash for Meal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
