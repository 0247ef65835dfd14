use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use meal_week_scheduler_rs::cli::{Cli, Command};
use meal_week_scheduler_rs::error::{PlanError, Result};
use meal_week_scheduler_rs::interface::{
    display_combinations, display_day_sets, display_week, prompt_day_set_choice,
    prompt_meal_filter, prompt_variety, prompt_yes_no,
};
use meal_week_scheduler_rs::models::{Meal, Variety};
use meal_week_scheduler_rs::scheduler::{
    assign_week, enumerate_day_combinations, find_valid_day_sets, materialize_day_plans,
    random_orderings, AssignmentPolicy,
};
use meal_week_scheduler_rs::state::{
    load_meals, load_portion_days, save_day_set, save_schedule, MealPool,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Combos {
            meals_per_day,
            max_combinations,
        } => cmd_combos(&cli.file, meals_per_day, max_combinations),
        Command::Sets {
            meals_per_day,
            max_combinations,
            node_budget,
            seed,
            orderings,
            out,
        } => cmd_sets(
            &cli.file,
            meals_per_day,
            max_combinations,
            node_budget,
            seed,
            orderings,
            &out,
        ),
        Command::Week {
            portions,
            variety,
            plan,
            shuffle_index,
            seed,
            no_times,
            out,
        } => cmd_week(
            &cli.file,
            &portions,
            variety,
            plan,
            shuffle_index,
            seed,
            no_times,
            &out,
        ),
    }
}

fn load_pool(file_path: &str) -> Result<Option<MealPool>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Meal pool file not found: {}", file_path);
        eprintln!("Please ensure the approved-meal pool JSON exists.");
        return Ok(None);
    }

    let meals = load_meals(path)?;
    let pool = MealPool::new(meals);
    println!("Loaded {} approved meals", pool.len());
    Ok(Some(pool))
}

/// Resolve a seed, generating and printing one so the run can be replayed.
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => {
            let s: u64 = rand::random();
            println!("Using seed {} (pass --seed {} to replay)", s, s);
            s
        }
    }
}

/// Enumerate and display day combinations.
fn cmd_combos(file_path: &str, meals_per_day: u8, max_combinations: usize) -> Result<()> {
    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    if pool.is_empty() {
        println!("The meal pool is empty; nothing to enumerate.");
        return Ok(());
    }

    let meals: Vec<Meal> = pool.to_meals();
    let combos = enumerate_day_combinations(&meals, meals_per_day, max_combinations)?;

    display_combinations(&combos, &pool);
    Ok(())
}

/// Enumerate combinations, search day-sets, let the user pick and save one.
fn cmd_sets(
    file_path: &str,
    meals_per_day: u8,
    max_combinations: usize,
    node_budget: usize,
    seed: Option<u64>,
    orderings: usize,
    out: &str,
) -> Result<()> {
    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    if pool.is_empty() {
        println!("The meal pool is empty; nothing to schedule.");
        return Ok(());
    }

    // Optional narrowing of the pool by name before the search.
    let filter = prompt_meal_filter(&pool.meals())?;
    let meals: Vec<Meal> = pool
        .filter_by_names(&filter)
        .into_iter()
        .cloned()
        .collect();
    if meals.len() < pool.len() {
        println!("Restricted pool to {} meals", meals.len());
    }

    let combos = enumerate_day_combinations(&meals, meals_per_day, max_combinations)?;
    println!("{} valid day combinations", combos.len());

    if combos.is_empty() {
        println!("No day-set search possible without combinations.");
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(resolve_seed(seed));
    let result = find_valid_day_sets(&combos, node_budget, &mut rng);

    if result.budget_exhausted {
        println!("Search budget exhausted; showing the sets found so far.");
    }

    display_day_sets(&result.sets, &pool);

    if result.sets.is_empty() {
        return Ok(());
    }

    let choice = prompt_day_set_choice(&result.sets)?;
    let chosen = &result.sets[choice];

    if orderings > 0 {
        let shuffled = random_orderings(&chosen.combinations, orderings, &mut rng);
        println!("{} distinct orderings:", shuffled.len());
        for (i, ordering) in shuffled.iter().enumerate() {
            let days: Vec<String> = ordering.iter().map(|c| c.slots.join("/")).collect();
            println!("  {}. {}", i + 1, days.join("  "));
        }
    }

    if prompt_yes_no("Save the chosen day-set?", true)? {
        save_day_set(out, chosen)?;
        println!("Day-set saved to {}.", out);
    }

    Ok(())
}

/// Materialize day plans from portioned meals and assign the week.
#[allow(clippy::too_many_arguments)]
fn cmd_week(
    file_path: &str,
    portions_path: &str,
    variety: Option<Variety>,
    plan: u8,
    shuffle_index: Option<usize>,
    seed: Option<u64>,
    no_times: bool,
    out: &str,
) -> Result<()> {
    if !(1..=3).contains(&plan) {
        return Err(PlanError::InvalidInput(format!(
            "plan must be 1-3, got {}",
            plan
        )));
    }

    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    let portions = Path::new(portions_path);
    if !portions.exists() {
        eprintln!("Portions file not found: {}", portions_path);
        return Ok(());
    }

    let portion_days = load_portion_days(portions)?;
    println!("Loaded {} portioned days", portion_days.len());

    let day_plans = materialize_day_plans(plan, &portion_days, &pool, !no_times);

    let variety = match variety {
        Some(v) => v,
        None => prompt_variety()?,
    };

    let policy = match shuffle_index {
        Some(index) => AssignmentPolicy::Deterministic {
            shuffle_index: index,
        },
        None => AssignmentPolicy::Randomized {
            seed: resolve_seed(seed),
        },
    };

    let schedule = assign_week(&day_plans, variety, &policy);
    display_week(&schedule);

    if schedule.filled_count() == 0 {
        println!("No days available; the schedule is empty.");
        return Ok(());
    }

    if prompt_yes_no("Save the weekly schedule?", true)? {
        save_schedule(out, &schedule)?;
        println!("Weekly schedule saved to {}.", out);
    }

    Ok(())
}
