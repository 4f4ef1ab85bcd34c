use crate::error::{Error, Result};

/// The dice behind one ability score.
///
/// `component_dice` are summed into the score, `discarded_dice` were rolled
/// but never count towards the total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rollout {
    pub(crate) component_dice: Vec<i32>,
    pub(crate) discarded_dice: Vec<i32>,
}

impl Rollout {
    /// Creates a rollout from its kept and discarded dice.
    /// Fails if there isn't at least one component die.
    pub fn new(component_dice: Vec<i32>, discarded_dice: Vec<i32>) -> Result<Self> {
        if component_dice.is_empty() {
            return Err(Error::EmptyRollout);
        }
        Ok(Self::from_parts(component_dice, discarded_dice))
    }

    /// Strategies always produce at least one component die.
    pub(crate) fn from_parts(component_dice: Vec<i32>, discarded_dice: Vec<i32>) -> Self {
        debug_assert!(!component_dice.is_empty());
        Self {
            component_dice,
            discarded_dice,
        }
    }

    pub fn component_dice(&self) -> &[i32] {
        &self.component_dice
    }
    pub fn discarded_dice(&self) -> &[i32] {
        &self.discarded_dice
    }

    /// Sum of the component dice, the ability score itself.
    pub fn total(&self) -> i32 {
        self.component_dice.iter().sum()
    }

    pub fn modifier(&self) -> i32 {
        modifier(self.total())
    }
}

/// The standard ability modifier for a score: `floor((total - 10) / 2)`.
///
/// Rounds towards negative infinity, so a 7 is -2 and not -1.
pub fn modifier(total: i32) -> i32 {
    (total - 10).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_boundaries() {
        #[rustfmt::skip]
        let cases = [
            (18, 4), (17, 3), (16, 3), (15, 2), (11, 0),
            (10, 0), (9, -1), (8, -1), (7, -2), (3, -4),
        ];

        for (total, expected) in cases {
            assert_eq!(modifier(total), expected, "modifier of {total}");
        }
    }

    #[test]
    fn test_total_ignores_discarded() {
        let rollout = Rollout::new(vec![6, 5, 2], vec![2]).unwrap();

        assert_eq!(rollout.total(), 13);
        assert_eq!(rollout.modifier(), 1);
        assert_eq!(rollout.discarded_dice(), &[2]);
    }

    #[test]
    fn test_empty_rollout_rejected() {
        assert_eq!(Rollout::new(vec![], vec![3]), Err(Error::EmptyRollout));
    }
}
