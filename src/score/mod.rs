mod attribute;
mod rollout;

pub use attribute::Attribute;
pub use rollout::{modifier, Rollout};

use crate::error::{Error, Result};

/// Number of rollouts in a full character.
pub const SCORE_COUNT: usize = 6;

/// The six rollouts of one character, in roll order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreSet {
    rollouts: [Rollout; SCORE_COUNT],
}

impl ScoreSet {
    pub fn new(rollouts: [Rollout; SCORE_COUNT]) -> Self {
        Self { rollouts }
    }

    pub fn rollouts(&self) -> &[Rollout; SCORE_COUNT] {
        &self.rollouts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rollout> {
        self.rollouts.iter()
    }

    pub fn totals(&self) -> impl Iterator<Item = i32> + '_ {
        self.rollouts.iter().map(Rollout::total)
    }

    pub fn modifiers(&self) -> impl Iterator<Item = i32> + '_ {
        self.rollouts.iter().map(Rollout::modifier)
    }

    pub fn total_sum(&self) -> i32 {
        self.totals().sum()
    }

    pub fn modifier_sum(&self) -> i32 {
        self.modifiers().sum()
    }

    /// Pairs each rollout with the attribute at the same position.
    pub fn with_attributes(&self) -> impl Iterator<Item = (Attribute, &Rollout)> {
        Attribute::ALL.into_iter().zip(self.rollouts.iter())
    }

    pub fn into_inner(self) -> [Rollout; SCORE_COUNT] {
        self.rollouts
    }
}

impl TryFrom<Vec<Rollout>> for ScoreSet {
    type Error = Error;

    fn try_from(rollouts: Vec<Rollout>) -> Result<Self> {
        let found = rollouts.len();
        let rollouts: [Rollout; SCORE_COUNT] =
            rollouts.try_into().map_err(|_| Error::ScoreSetSize {
                expected: SCORE_COUNT,
                found,
            })?;
        Ok(Self::new(rollouts))
    }
}

impl<'a> IntoIterator for &'a ScoreSet {
    type Item = &'a Rollout;
    type IntoIter = std::slice::Iter<'a, Rollout>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::set_of;
    use super::*;

    #[test]
    fn test_sums() {
        let set = set_of([18, 15, 10, 9, 7, 3]);

        assert_eq!(set.total_sum(), 62);
        // 4 + 2 + 0 - 1 - 2 - 4
        assert_eq!(set.modifier_sum(), -1);
    }

    #[test]
    fn test_with_attributes() {
        let set = set_of([8, 9, 10, 11, 12, 13]);
        let pairs: Vec<_> = set
            .with_attributes()
            .map(|(attr, rollout)| (attr, rollout.total()))
            .collect();

        assert_eq!(pairs[0], (Attribute::Str, 8));
        assert_eq!(pairs[5], (Attribute::Cha, 13));
    }

    #[test]
    fn test_wrong_size_rejected() {
        let rollouts = vec![Rollout::new(vec![3, 3, 3], vec![]).unwrap(); 5];

        assert_eq!(
            ScoreSet::try_from(rollouts),
            Err(Error::ScoreSetSize {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn test_exact_size_accepted() {
        let rollouts = vec![Rollout::new(vec![3, 3, 3], vec![]).unwrap(); 6];
        let set = ScoreSet::try_from(rollouts).unwrap();

        assert!(set.totals().all(|t| t == 9));
    }
}
