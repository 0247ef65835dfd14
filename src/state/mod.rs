mod manager;
mod persistence;

pub use manager::MealPool;
pub use persistence::{load_meals, load_portion_days, save_day_set, save_meals, save_schedule};
