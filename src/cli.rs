use clap::{Parser, Subcommand};

use crate::models::Variety;
use crate::scheduler::constants::{DEFAULT_COMBINATION_CAP, DEFAULT_NODE_BUDGET};

/// MealWeekScheduler — fills daily meal slots and assembles seven-day plans.
#[derive(Parser, Debug)]
#[command(name = "meal_week_scheduler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the approved-meal pool JSON file.
    #[arg(short, long, default_value = "meal_pool.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enumerate every valid day combination for the pool.
    Combos {
        /// Meal slots per day (1-4).
        #[arg(short = 'n', long, default_value_t = 3)]
        meals_per_day: u8,

        /// Stop enumerating past this many combinations.
        #[arg(long, default_value_t = DEFAULT_COMBINATION_CAP)]
        max_combinations: usize,
    },

    /// Search for maximal slot-consistent day-sets and optionally save one.
    Sets {
        /// Meal slots per day (1-4).
        #[arg(short = 'n', long, default_value_t = 3)]
        meals_per_day: u8,

        /// Stop enumerating past this many combinations.
        #[arg(long, default_value_t = DEFAULT_COMBINATION_CAP)]
        max_combinations: usize,

        /// Search node budget before failing closed.
        #[arg(long, default_value_t = DEFAULT_NODE_BUDGET)]
        node_budget: usize,

        /// Seed for tie sampling and orderings; random (and printed) when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Also show this many shuffled orderings of the chosen set.
        #[arg(long, default_value_t = 0)]
        orderings: usize,

        /// Where to save the chosen day-set.
        #[arg(short, long, default_value = "day_set.json")]
        out: String,
    },

    /// Materialize day plans from portioned meals and assign the week.
    Week {
        /// Portioned-meal JSON produced by the external optimizer.
        #[arg(short, long)]
        portions: String,

        /// Weekly variety level; prompted interactively when omitted.
        #[arg(long, value_enum)]
        variety: Option<Variety>,

        /// Candidate plan number (1-3), used in day-plan ids.
        #[arg(long, default_value_t = 1)]
        plan: u8,

        /// Deterministic policy: pick this enumerated day combination.
        #[arg(long, conflicts_with = "seed")]
        shuffle_index: Option<usize>,

        /// Randomized policy seed; random (and printed) when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Skip default meal-time assignment.
        #[arg(long)]
        no_times: bool,

        /// Where to save the weekly schedule.
        #[arg(short, long, default_value = "weekly_schedule.json")]
        out: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Sets {
            meals_per_day: 3,
            max_combinations: DEFAULT_COMBINATION_CAP,
            node_budget: DEFAULT_NODE_BUDGET,
            seed: None,
            orderings: 0,
            out: "day_set.json".to_string(),
        }
    }
}
