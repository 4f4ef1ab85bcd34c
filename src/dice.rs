use std::{fmt::Display, str::FromStr};

use rand::{thread_rng, Rng};

use crate::error::Error;
use crate::score::Rollout;

/// Number of faces on every die the strategies roll.
pub const DIE_SIDES: i32 = 6;

/// The flat bonus the heroic method lists in front of its two dice.
const HEROIC_BONUS: i32 = 6;

/// A way of rolling a single ability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// `3d6`\
    /// Sum of three dice, nothing discarded.
    Classic,
    /// `4d6k3`\
    /// Roll four dice and discard one of the lowest.
    #[default]
    Modern,
    /// `2d6+6`\
    /// Six plus the sum of two dice.
    Heroic,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Classic, Strategy::Modern, Strategy::Heroic];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Classic => "classic",
            Strategy::Modern => "modern",
            Strategy::Heroic => "heroic",
        }
    }

    pub fn notation(self) -> &'static str {
        match self {
            Strategy::Classic => "3d6",
            Strategy::Modern => "4d6k3",
            Strategy::Heroic => "2d6+6",
        }
    }

    /// Roll one score using `rand::thread_rng()`.
    /// If you want to choose the rng yourself use `roll_with()`.
    pub fn roll(self) -> Rollout {
        self.roll_with(&mut thread_rng())
    }

    /// Roll one score with the rng specified, one `1..=6` draw per die.
    pub fn roll_with(self, rng: &mut impl Rng) -> Rollout {
        self.roll_from(|| rng.gen_range(1..=DIE_SIDES))
    }

    /// Roll one score taking every die from `d6`, in roll order.
    pub fn roll_from(self, mut d6: impl FnMut() -> i32) -> Rollout {
        match self {
            Strategy::Classic => Rollout::from_parts(vec![d6(), d6(), d6()], vec![]),
            Strategy::Modern => {
                let mut dice = vec![d6(), d6(), d6(), d6()];
                let lowest = lowest_index(&dice);
                let discarded = dice.remove(lowest);
                Rollout::from_parts(dice, vec![discarded])
            }
            Strategy::Heroic => Rollout::from_parts(vec![HEROIC_BONUS, d6(), d6()], vec![]),
        }
    }
}

/// Index of the first occurrence of the smallest value.
/// `min_by_key` would keep the last one on ties.
fn lowest_index(dice: &[i32]) -> usize {
    let mut lowest = 0;
    for (i, die) in dice.iter().enumerate().skip(1) {
        if *die < dice[lowest] {
            lowest = i;
        }
    }
    lowest
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "3d6" => Ok(Strategy::Classic),
            "modern" | "4d6k3" | "4d6dl1" => Ok(Strategy::Modern),
            "heroic" | "2d6p6" | "2d6+6" => Ok(Strategy::Heroic),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
