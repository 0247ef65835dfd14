pub mod combination;
pub mod meal;
pub mod plan;
pub mod portion;

pub use combination::{DayCombination, DaySet};
pub use meal::{Meal, MealCategory};
pub use plan::{DayPlan, PlannedMeal, Variety, Weekday, WeeklySchedule};
pub use portion::{PortionedIngredient, PortionedMeal};
