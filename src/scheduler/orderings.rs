use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::DayCombination;
use crate::scheduler::constants::ORDERING_ATTEMPTS_PER_RESULT;

/// Produce up to `num_orderings` distinct shuffled orderings of the list.
///
/// Orderings are de-duplicated by content and capped at factorial(len)
/// distinct possibilities, so small inputs degrade to fewer results rather
/// than looping forever. Determinism comes from the caller's `rng`.
pub fn random_orderings(
    combinations: &[DayCombination],
    num_orderings: usize,
    rng: &mut impl Rng,
) -> Vec<Vec<DayCombination>> {
    let target = num_orderings.min(permutation_count(combinations.len()));
    if target == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<Vec<DayCombination>> = Vec::new();

    let max_attempts = target.saturating_mul(ORDERING_ATTEMPTS_PER_RESULT);
    let mut attempts = 0;
    while out.len() < target && attempts < max_attempts {
        attempts += 1;

        let mut ordering = combinations.to_vec();
        ordering.shuffle(rng);

        let key = ordering
            .iter()
            .map(DayCombination::content_key)
            .collect::<Vec<_>>()
            .join(";");
        if seen.insert(key) {
            out.push(ordering);
        }
    }

    out
}

/// factorial(n), saturating well above any requested ordering count.
fn permutation_count(n: usize) -> usize {
    let mut total: usize = 1;
    for i in 2..=n {
        total = total.saturating_mul(i);
    }
    total
}
