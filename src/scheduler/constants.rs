/// Hard cap on materialized day combinations per enumeration run.
pub const DEFAULT_COMBINATION_CAP: usize = 5_000;

/// Node budget for the day-set search before it fails closed.
pub const DEFAULT_NODE_BUDGET: usize = 200_000;

/// At most this many maximal day-sets are returned to the caller.
pub const MAX_DAY_SETS: usize = 3;

/// Shuffle attempts per requested ordering before the generator gives up
/// finding new distinct permutations.
pub const ORDERING_ATTEMPTS_PER_RESULT: usize = 20;

/// Default meal times for 1 to 4 meals per day.
pub const MEAL_TIMES_ONE: [&str; 1] = ["15:00"];
pub const MEAL_TIMES_TWO: [&str; 2] = ["11:00", "17:00"];
pub const MEAL_TIMES_THREE: [&str; 3] = ["07:00", "12:00", "18:00"];
pub const MEAL_TIMES_FOUR: [&str; 4] = ["07:00", "11:30", "15:00", "19:00"];

/// Even-spacing window for 5+ meals, in minutes from midnight.
pub const MEAL_WINDOW_START_MIN: u32 = 7 * 60;
pub const MEAL_WINDOW_END_MIN: u32 = 19 * 60;
