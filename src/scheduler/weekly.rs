use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{DayPlan, Variety, Weekday, WeeklySchedule};

/// How chosen days are picked from the available pool.
///
/// Two historically distinct behaviors, kept as explicit strategies rather
/// than merged: they disagree on details such as what `Variety::None` means
/// (first enumerated combination vs. always the first day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentPolicy {
    /// Pick the `shuffle_index % C(n, k)`-th lexicographic combination of
    /// days, then page it across the week with modulo wraparound.
    Deterministic { shuffle_index: usize },
    /// Seeded uniform sample without replacement.
    Randomized { seed: u64 },
}

/// Lay a chosen group of days across the seven weekdays.
///
/// Group size is `min(7, variety target, available days)`. The output always
/// carries all seven weekday keys; with no available days every value is
/// null.
pub fn assign_week(days: &[DayPlan], variety: Variety, policy: &AssignmentPolicy) -> WeeklySchedule {
    if days.is_empty() {
        return WeeklySchedule::empty();
    }

    let group_size = variety.day_target().min(7).min(days.len());
    match policy {
        AssignmentPolicy::Deterministic { shuffle_index } => {
            assign_deterministic(days, group_size, *shuffle_index)
        }
        AssignmentPolicy::Randomized { seed } => assign_randomized(days, variety, group_size, *seed),
    }
}

/// Assign one schedule per candidate plan (plans are indexed 1-3 upstream).
pub fn assign_plans(
    plans: &[(Vec<DayPlan>, AssignmentPolicy)],
    variety: Variety,
) -> Vec<WeeklySchedule> {
    plans
        .iter()
        .map(|(days, policy)| assign_week(days, variety, policy))
        .collect()
}

fn assign_deterministic(days: &[DayPlan], group_size: usize, shuffle_index: usize) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::empty();

    let count = binomial(days.len(), group_size);
    if count == 0 {
        return schedule;
    }

    let index = shuffle_index as u128 % count;
    let chosen: Vec<&DayPlan> = combination_at(days.len(), group_size, index)
        .into_iter()
        .map(|i| &days[i])
        .collect();
    if chosen.is_empty() {
        return schedule;
    }

    for (i, weekday) in Weekday::ALL.into_iter().enumerate() {
        schedule.set(weekday, Some(chosen[i % chosen.len()].clone()));
    }
    schedule
}

fn assign_randomized(days: &[DayPlan], variety: Variety, group_size: usize, seed: u64) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::empty();
    let mut rng = StdRng::seed_from_u64(seed);

    match variety {
        // No variety skips sampling entirely: the first day fills the week.
        Variety::None => {
            for weekday in Weekday::ALL {
                schedule.set(weekday, Some(days[0].clone()));
            }
        }
        Variety::Lots => {
            let sample: Vec<&DayPlan> = days.choose_multiple(&mut rng, group_size).collect();
            for (i, weekday) in Weekday::ALL.into_iter().enumerate() {
                // Position-for-position; the last sampled day covers any
                // remaining weekdays when fewer than 7 are available.
                let day = sample.get(i).or_else(|| sample.last());
                schedule.set(weekday, day.map(|d| (*d).clone()));
            }
        }
        Variety::Less | Variety::Some => {
            let sample: Vec<&DayPlan> = days.choose_multiple(&mut rng, group_size).collect();
            for (i, weekday) in Weekday::ALL.into_iter().enumerate() {
                schedule.set(weekday, Some(sample[i % sample.len()].clone()));
            }
        }
    }

    schedule
}

fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// Lexicographic unranking: the `index`-th k-combination of `0..n`.
fn combination_at(n: usize, k: usize, mut index: u128) -> Vec<usize> {
    let mut result = Vec::with_capacity(k);
    let mut remaining = k;
    let mut start = 0;

    while remaining > 0 {
        for x in start..n {
            let with_x = binomial(n - x - 1, remaining - 1);
            if index < with_x {
                result.push(x);
                start = x + 1;
                remaining -= 1;
                break;
            }
            index -= with_x;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_days(count: usize) -> Vec<DayPlan> {
        (0..count)
            .map(|i| DayPlan {
                id: format!("plan1-day{}", i),
                meals: Vec::new(),
                day_calories: 1800.0 + i as f64,
                day_protein: 120.0,
                is_cheat_day: false,
            })
            .collect()
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(7, 7), 1);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn test_combination_at_lexicographic_order() {
        // C(4,2) in lexicographic order.
        let expected = [
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(&combination_at(4, 2, i as u128), want);
        }
    }

    #[test]
    fn test_empty_days_all_null() {
        for policy in [
            AssignmentPolicy::Deterministic { shuffle_index: 5 },
            AssignmentPolicy::Randomized { seed: 5 },
        ] {
            let schedule = assign_week(&[], Variety::Lots, &policy);
            assert_eq!(schedule.iter().count(), 7);
            assert_eq!(schedule.filled_count(), 0);
        }
    }

    #[test]
    fn test_randomized_none_repeats_first_day() {
        let days = sample_days(5);
        let schedule = assign_week(
            &days,
            Variety::None,
            &AssignmentPolicy::Randomized { seed: 99 },
        );

        assert_eq!(schedule.filled_count(), 7);
        for (_, plan) in schedule.iter() {
            assert_eq!(plan.unwrap().id, "plan1-day0");
        }
    }

    #[test]
    fn test_randomized_lots_all_distinct() {
        let days = sample_days(7);
        let schedule = assign_week(
            &days,
            Variety::Lots,
            &AssignmentPolicy::Randomized { seed: 3 },
        );

        assert_eq!(schedule.filled_count(), 7);
        assert_eq!(schedule.distinct_day_count(), 7);
    }

    #[test]
    fn test_randomized_lots_short_pool_repeats_last() {
        let days = sample_days(3);
        let schedule = assign_week(
            &days,
            Variety::Lots,
            &AssignmentPolicy::Randomized { seed: 3 },
        );

        assert_eq!(schedule.filled_count(), 7);
        assert_eq!(schedule.distinct_day_count(), 3);

        // Thursday onward all repeat the last sampled day.
        let friday = schedule.get(Weekday::Friday).unwrap().id.clone();
        assert_eq!(schedule.get(Weekday::Saturday).unwrap().id, friday);
        assert_eq!(schedule.get(Weekday::Sunday).unwrap().id, friday);
    }

    #[test]
    fn test_randomized_less_alternates_two_days() {
        let days = sample_days(5);
        let schedule = assign_week(
            &days,
            Variety::Less,
            &AssignmentPolicy::Randomized { seed: 11 },
        );

        assert_eq!(schedule.filled_count(), 7);
        assert_eq!(schedule.distinct_day_count(), 2);

        // Modulo wraparound: Monday/Wednesday/Friday/Sunday share a day.
        let monday = schedule.get(Weekday::Monday).unwrap().id.clone();
        assert_eq!(schedule.get(Weekday::Wednesday).unwrap().id, monday);
        assert_eq!(schedule.get(Weekday::Sunday).unwrap().id, monday);
        assert_ne!(schedule.get(Weekday::Tuesday).unwrap().id, monday);
    }

    #[test]
    fn test_randomized_is_reproducible() {
        let days = sample_days(6);
        let policy = AssignmentPolicy::Randomized { seed: 1234 };

        let a = assign_week(&days, Variety::Some, &policy);
        let b = assign_week(&days, Variety::Some, &policy);
        for weekday in Weekday::ALL {
            assert_eq!(
                a.get(weekday).map(|d| &d.id),
                b.get(weekday).map(|d| &d.id)
            );
        }
    }

    #[test]
    fn test_deterministic_pages_through_index_space() {
        let days = sample_days(4);

        // C(4,2)=6 combinations; index 0 picks days {0,1}.
        let schedule = assign_week(
            &days,
            Variety::Less,
            &AssignmentPolicy::Deterministic { shuffle_index: 0 },
        );
        assert_eq!(schedule.get(Weekday::Monday).unwrap().id, "plan1-day0");
        assert_eq!(schedule.get(Weekday::Tuesday).unwrap().id, "plan1-day1");
        assert_eq!(schedule.get(Weekday::Wednesday).unwrap().id, "plan1-day0");

        // Index 6 wraps back to combination 0.
        let wrapped = assign_week(
            &days,
            Variety::Less,
            &AssignmentPolicy::Deterministic { shuffle_index: 6 },
        );
        for weekday in Weekday::ALL {
            assert_eq!(
                schedule.get(weekday).map(|d| &d.id),
                wrapped.get(weekday).map(|d| &d.id)
            );
        }

        // Index 5 picks the last combination {2,3}.
        let last = assign_week(
            &days,
            Variety::Less,
            &AssignmentPolicy::Deterministic { shuffle_index: 5 },
        );
        assert_eq!(last.get(Weekday::Monday).unwrap().id, "plan1-day2");
        assert_eq!(last.get(Weekday::Tuesday).unwrap().id, "plan1-day3");
    }

    #[test]
    fn test_group_size_capped_by_available_days() {
        let days = sample_days(2);
        let schedule = assign_week(
            &days,
            Variety::Some,
            &AssignmentPolicy::Randomized { seed: 8 },
        );

        // Variety wants 4 distinct days but only 2 exist.
        assert_eq!(schedule.filled_count(), 7);
        assert_eq!(schedule.distinct_day_count(), 2);
    }

    #[test]
    fn test_assign_plans_one_schedule_per_plan() {
        let plans = vec![
            (sample_days(3), AssignmentPolicy::Randomized { seed: 1 }),
            (sample_days(5), AssignmentPolicy::Deterministic { shuffle_index: 2 }),
            (Vec::new(), AssignmentPolicy::Randomized { seed: 1 }),
        ];
        let schedules = assign_plans(&plans, Variety::Less);

        assert_eq!(schedules.len(), 3);
        assert_eq!(schedules[0].filled_count(), 7);
        assert_eq!(schedules[1].filled_count(), 7);
        assert_eq!(schedules[2].filled_count(), 0);
    }
}
