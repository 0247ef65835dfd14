use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::portion::PortionedIngredient;

/// A meal inside a materialized day plan: portioned payload plus display
/// metadata looked up from the approved-meal pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub meal_id: String,

    pub name: String,

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

    #[serde(default)]
    pub ingredients: Vec<PortionedIngredient>,

    pub calories: f64,

    pub protein: f64,

    /// "HH:MM" when default times were assigned.
    #[serde(default)]
    pub meal_time: Option<String>,
}

/// A fully materialized day. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// `plan{N}-day{i}`.
    pub id: String,

    pub meals: Vec<PlannedMeal>,

    pub day_calories: f64,

    pub day_protein: f64,

    #[serde(default)]
    pub is_cheat_day: bool,
}

/// How many distinct days repeat across a seven-day week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variety {
    None,
    Less,
    Some,
    Lots,
}

impl Variety {
    /// Target number of distinct days, before capping by availability.
    pub fn day_target(&self) -> usize {
        match self {
            Variety::None => 1,
            Variety::Less => 2,
            Variety::Some => 4,
            Variety::Lots => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variety::None => "none",
            Variety::Less => "less",
            Variety::Some => "some",
            Variety::Lots => "lots",
        }
    }

    pub const ALL: [Variety; 4] = [Variety::None, Variety::Less, Variety::Some, Variety::Lots];
}

/// Named weekdays in fixed Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// A seven-day schedule. Every weekday key is always present; `None` means
/// the day is unfilled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: BTreeMap<Weekday, Option<DayPlan>>,
}

impl WeeklySchedule {
    /// All seven days unfilled.
    pub fn empty() -> Self {
        let days = Weekday::ALL.iter().map(|&wd| (wd, None)).collect();
        Self { days }
    }

    pub fn set(&mut self, weekday: Weekday, plan: Option<DayPlan>) {
        self.days.insert(weekday, plan);
    }

    pub fn get(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.get(&weekday).and_then(|p| p.as_ref())
    }

    /// Monday-first iteration over all seven entries.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Option<&DayPlan>)> {
        Weekday::ALL
            .into_iter()
            .map(move |wd| (wd, self.get(wd)))
    }

    pub fn filled_count(&self) -> usize {
        self.days.values().filter(|p| p.is_some()).count()
    }

    /// Count of distinct day-plan ids across filled days.
    pub fn distinct_day_count(&self) -> usize {
        let mut ids: Vec<&str> = self
            .days
            .values()
            .filter_map(|p| p.as_ref().map(|d| d.id.as_str()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::empty()
    }
}
