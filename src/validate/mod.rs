mod expression;
mod registry;
pub mod rules;

pub use expression::ValidatorExpr;
pub use registry::Registry;

use std::{fmt::Debug, sync::Arc};

use crate::score::ScoreSet;

type Predicate = dyn Fn(&ScoreSet) -> bool + Send + Sync;

/// A named acceptance test over a complete [ScoreSet].
///
/// Cloning is cheap, the predicate is shared.
#[derive(Clone)]
pub struct Validator {
    name: String,
    predicate: Arc<Predicate>,
}

impl Validator {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&ScoreSet) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepts(&self, set: &ScoreSet) -> bool {
        (self.predicate)(set)
    }

    /// A validator that accepts a set only if every one of `validators` does.
    /// With no validators it accepts everything.
    pub fn all(validators: impl IntoIterator<Item = Validator>) -> Self {
        let validators: Vec<Validator> = validators.into_iter().collect();
        let name = format!(
            "all({})",
            validators
                .iter()
                .map(Validator::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self::new(name, move |set| {
            validators.iter().all(|validator| validator.accepts(set))
        })
    }

    /// At least `count` scores of `value` or higher.
    pub fn at_least(count: usize, value: i32) -> Self {
        Self::new(format!("at-least({count}, {value})"), move |set| {
            rules::at_least_scores_of_value(set, count, value)
        })
    }
}

impl Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
