use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::models::{DayCombination, DaySet};
use crate::scheduler::constants::MAX_DAY_SETS;

/// Outcome of a day-set search.
///
/// `budget_exhausted` marks a truncated search: the sets found up to that
/// point are still valid, there may just be longer ones left unexplored.
#[derive(Debug, Clone)]
pub struct DaySetSearchResult {
    pub sets: Vec<DaySet>,
    pub budget_exhausted: bool,
}

/// Find maximal slot-consistent subsets of the given combinations.
///
/// Depth-first extension: walk the combination list left to right, keeping a
/// committed meal-to-slot map; a combination joins the current set only if
/// every meal in it is unseen or already committed to the same slot. A branch
/// with no further extension records its accumulated set.
///
/// Only sets of the maximum observed length are kept. If more than
/// `MAX_DAY_SETS` tie for longest, that many are sampled at random from the
/// supplied `rng`. Results are sorted ascending by slot-0 variety so the
/// steadiest first-meal set comes first.
///
/// `node_budget` bounds the number of extension attempts; once spent, the
/// search fails closed with whatever it has found.
pub fn find_valid_day_sets(
    combinations: &[DayCombination],
    node_budget: usize,
    rng: &mut impl Rng,
) -> DaySetSearchResult {
    if combinations.is_empty() {
        return DaySetSearchResult {
            sets: Vec::new(),
            budget_exhausted: false,
        };
    }

    let mut search = Search {
        combinations,
        found: Vec::new(),
        nodes: 0,
        budget: node_budget,
        exhausted: false,
    };
    search.extend(0, &HashMap::new(), &Vec::new());

    if search.exhausted {
        warn!(
            budget = node_budget,
            "day-set search budget exhausted, returning partial results"
        );
    }

    let max_len = search.found.iter().map(Vec::len).max().unwrap_or(0);
    let mut maximal: Vec<Vec<usize>> = search
        .found
        .into_iter()
        .filter(|set| set.len() == max_len)
        .collect();

    if maximal.len() > MAX_DAY_SETS {
        maximal = maximal
            .choose_multiple(rng, MAX_DAY_SETS)
            .cloned()
            .collect();
    }

    let mut sets: Vec<DaySet> = maximal
        .into_iter()
        .map(|indices| {
            DaySet::new(
                indices
                    .into_iter()
                    .map(|i| combinations[i].clone())
                    .collect(),
            )
        })
        .collect();

    sets.sort_by_key(DaySet::slot_zero_variety);

    DaySetSearchResult {
        sets,
        budget_exhausted: search.exhausted,
    }
}

struct Search<'a> {
    combinations: &'a [DayCombination],
    /// Accumulated sets as indices into `combinations`.
    found: Vec<Vec<usize>>,
    nodes: usize,
    budget: usize,
    exhausted: bool,
}

impl Search<'_> {
    fn extend(&mut self, start: usize, committed: &HashMap<String, usize>, acc: &Vec<usize>) {
        let mut extended = false;

        for i in start..self.combinations.len() {
            self.nodes += 1;
            if self.nodes > self.budget {
                self.exhausted = true;
                if !acc.is_empty() {
                    self.found.push(acc.clone());
                }
                return;
            }

            if let Some(next_committed) = try_commit(&self.combinations[i], committed) {
                extended = true;
                let mut next_acc = acc.clone();
                next_acc.push(i);
                self.extend(i + 1, &next_committed, &next_acc);
                if self.exhausted {
                    return;
                }
            }
        }

        if !extended && !acc.is_empty() {
            self.found.push(acc.clone());
        }
    }
}

/// Copy-on-extend commit of a combination against the slot map.
///
/// None when any meal already sits in a different slot.
fn try_commit(
    combination: &DayCombination,
    committed: &HashMap<String, usize>,
) -> Option<HashMap<String, usize>> {
    for (slot, meal_id) in combination.slots.iter().enumerate() {
        if let Some(&seen) = committed.get(meal_id) {
            if seen != slot {
                return None;
            }
        }
    }

    let mut next = committed.clone();
    for (slot, meal_id) in combination.slots.iter().enumerate() {
        next.insert(meal_id.clone(), slot);
    }
    Some(next)
}
