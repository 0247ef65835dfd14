use serde::{Deserialize, Serialize};

/// One ingredient of a portioned meal, with gram amount and macros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionedIngredient {
    pub name: String,

    pub grams: f64,

    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,
}

/// A meal whose ingredient amounts were fixed by the external macro optimizer.
///
/// Carried through as opaque payload: totals are trusted, never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionedMeal {
    pub meal_id: String,

    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<PortionedIngredient>,

    pub total_calories: f64,

    pub total_protein: f64,
}
