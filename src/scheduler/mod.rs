pub mod combinations;
pub mod constants;
pub mod day_sets;
pub mod materialize;
pub mod orderings;
pub mod slots;
pub mod weekly;

pub use combinations::enumerate_day_combinations;
pub use constants::*;
pub use day_sets::{find_valid_day_sets, DaySetSearchResult};
pub use materialize::{default_meal_times, materialize_day_plans};
pub use orderings::random_orderings;
pub use slots::allowed_slots;
pub use weekly::{assign_plans, assign_week, AssignmentPolicy};
