//! The acceptance rules behind the standard validators.
//!
//! Every rule is a pure function over a complete [ScoreSet].

use crate::score::ScoreSet;

/// Accepts any set.
pub fn straight(_: &ScoreSet) -> bool {
    true
}

/// True if at least `count` scores are `value` or higher.
pub fn at_least_scores_of_value(set: &ScoreSet, count: usize, value: i32) -> bool {
    set.totals().filter(|total| *total >= value).count() >= count
}

/// True if at least `count` scores are strictly below `value`.
pub fn at_least_scores_below(set: &ScoreSet, count: usize, value: i32) -> bool {
    set.totals().filter(|total| *total < value).count() >= count
}

/// True if the modifiers of all six scores add up to at least `value`.
pub fn net_modifier_at_least(set: &ScoreSet, value: i32) -> bool {
    set.modifier_sum() >= value
}

/// At least two scores of 15 or higher.
pub fn colville_orig(set: &ScoreSet) -> bool {
    at_least_scores_of_value(set, 2, 15)
}

/// At least one score of 15 or higher.
pub fn colville_lite(set: &ScoreSet) -> bool {
    at_least_scores_of_value(set, 1, 15)
}

/// Net modifier of at least +2.
pub fn colville_neo(set: &ScoreSet) -> bool {
    net_modifier_at_least(set, 2)
}

pub fn nonnegative_net_mod(set: &ScoreSet) -> bool {
    net_modifier_at_least(set, 0)
}

/// The scores themselves add up to 70 or more.
pub fn mercer(set: &ScoreSet) -> bool {
    set.total_sum() >= 70
}

/// At least two scores of 13 or higher.
pub fn sfc_hard(set: &ScoreSet) -> bool {
    at_least_scores_of_value(set, 2, 13)
}

pub fn one_at_least_13(set: &ScoreSet) -> bool {
    at_least_scores_of_value(set, 1, 13)
}

pub fn none_under_six(set: &ScoreSet) -> bool {
    set.totals().all(|total| total >= 6)
}

/// [sfc_hard] and [none_under_six].
pub fn strict_filthy_casual(set: &ScoreSet) -> bool {
    sfc_hard(set) && none_under_six(set)
}

/// At least two scores of 15 or higher and at least one below 10.
pub fn gill_one(set: &ScoreSet) -> bool {
    at_least_scores_of_value(set, 2, 15) && at_least_scores_below(set, 1, 10)
}

/// At least two scores of 13 or higher, the best of them 15 or higher.
pub fn gill_two(set: &ScoreSet) -> bool {
    let mut count = 0;
    let mut best = i32::MIN;
    for total in set.totals().filter(|total| *total >= 13) {
        count += 1;
        best = best.max(total);
    }
    count >= 2 && best >= 15
}
