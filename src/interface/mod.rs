pub mod prompts;
pub mod render;

pub use prompts::{prompt_day_set_choice, prompt_meal_filter, prompt_variety, prompt_yes_no};
pub use render::{display_combinations, display_day_sets, display_week};
