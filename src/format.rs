use std::fmt::Display;

use crate::score::{Attribute, Rollout, ScoreSet};

/// How a [Rollout] is rendered, built with [Rollout::display].
///
/// `STR: 15 (+2) [4,5,6 (2)]`: the label and the bracketed dice are optional,
/// the discarded dice only show up when there are any.
#[derive(Debug, Clone, Copy)]
pub struct RolloutDisplay<'a> {
    rollout: &'a Rollout,
    attribute: Option<Attribute>,
    show_dice: bool,
}

impl Rollout {
    pub fn display(&self, attribute: Option<Attribute>, show_dice: bool) -> RolloutDisplay<'_> {
        RolloutDisplay {
            rollout: self,
            attribute,
            show_dice,
        }
    }
}

pub(crate) fn join_dice(dice: &[i32]) -> String {
    dice.iter()
        .map(|die| die.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Display for RolloutDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(attribute) = self.attribute {
            write!(f, "{attribute}: ")?;
        }

        write!(f, "{} ({:+})", self.rollout.total(), self.rollout.modifier())?;

        if self.show_dice {
            write!(f, " [{}", join_dice(self.rollout.component_dice()))?;
            if !self.rollout.discarded_dice().is_empty() {
                write!(f, " ({})", join_dice(self.rollout.discarded_dice()))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Shows the total, modifier and dice, without a label.
impl Display for Rollout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(None, true))
    }
}

pub fn format_rollout(rollout: &Rollout, attribute: Option<Attribute>, show_dice: bool) -> String {
    rollout.display(attribute, show_dice).to_string()
}

/// One line per rollout, labelled in attribute order when `show_order` is set.
pub fn format_score_set(set: &ScoreSet, show_order: bool, show_dice: bool) -> Vec<String> {
    set.with_attributes()
        .map(|(attribute, rollout)| {
            let attribute = show_order.then_some(attribute);
            format_rollout(rollout, attribute, show_dice)
        })
        .collect()
}
