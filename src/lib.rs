pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scheduler;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{DayCombination, DayPlan, DaySet, Meal, MealCategory, Variety, Weekday, WeeklySchedule};
