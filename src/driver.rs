use rand::Rng;
use tracing::{debug, trace, warn};

use crate::dice::Strategy;
use crate::error::{Error, Result};
use crate::score::ScoreSet;
use crate::validate::Validator;

/// An accepted score set and how many candidates it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub scores: ScoreSet,
    pub attempts: u64,
}

/// Rolls six scores in order.
fn draw(strategy: Strategy, rng: &mut impl Rng) -> ScoreSet {
    ScoreSet::new(std::array::from_fn(|_| strategy.roll_with(rng)))
}

/// Rolls candidate sets until `validator` accepts one.
///
/// Never returns if the validator can't be satisfied with `strategy`, use
/// [generate_within] when that's a possibility.
pub fn generate(strategy: Strategy, validator: &Validator, rng: &mut impl Rng) -> ScoreSet {
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let candidate = draw(strategy, rng);
        if validator.accepts(&candidate) {
            debug!(%strategy, validator = validator.name(), attempts, "accepted score set");
            return candidate;
        }
        trace!(attempt = attempts, totals = ?candidate.totals().collect::<Vec<_>>(), "rejected score set");
    }
}

/// Same as [generate] but gives up after `max_attempts` rejected candidates.
pub fn generate_within(
    strategy: Strategy,
    validator: &Validator,
    rng: &mut impl Rng,
    max_attempts: u64,
) -> Result<Generated> {
    for attempts in 1..=max_attempts {
        let candidate = draw(strategy, rng);
        if validator.accepts(&candidate) {
            debug!(%strategy, validator = validator.name(), attempts, "accepted score set");
            return Ok(Generated {
                scores: candidate,
                attempts,
            });
        }
        trace!(attempt = attempts, totals = ?candidate.totals().collect::<Vec<_>>(), "rejected score set");
    }

    warn!(%strategy, validator = validator.name(), max_attempts, "no score set accepted");
    Err(Error::AttemptsExhausted {
        attempts: max_attempts,
        validator: validator.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::validate::{rules, Registry};

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_straight_accepts_first_candidate() {
        let straight = Validator::new("straight", rules::straight);

        for strategy in Strategy::ALL {
            let generated = generate_within(strategy, &straight, &mut test_rng(), 1).unwrap();
            assert_eq!(generated.attempts, 1);
            assert_eq!(generated.scores.rollouts().len(), 6);
        }
    }

    #[test]
    fn test_same_seed_same_scores() {
        let validator = Registry::standard().resolve("colville-orig").unwrap();

        let first = generate(Strategy::Classic, &validator, &mut test_rng());
        let second = generate(Strategy::Classic, &validator, &mut test_rng());
        assert_eq!(first, second);
    }

    #[test]
    fn test_accepted_set_passes_validator() {
        let registry = Registry::standard();
        let mut rng = test_rng();

        for name in registry.names() {
            let validator = registry.get(name).unwrap();
            for strategy in Strategy::ALL {
                let scores = generate(strategy, validator, &mut rng);
                assert!(validator.accepts(&scores), "{name} with {strategy}");
            }
        }
    }

    #[test]
    fn test_first_candidate_matches_draw() {
        let straight = Validator::new("straight", rules::straight);

        let expected = draw(Strategy::Modern, &mut test_rng());
        let scores = generate(Strategy::Modern, &straight, &mut test_rng());
        assert_eq!(scores, expected);
    }

    #[test]
    fn test_unsatisfiable_rule_exhausts_budget() {
        // 3d6 never rolls above 18
        let impossible = Validator::at_least(1, 19);

        let result = generate_within(Strategy::Classic, &impossible, &mut test_rng(), 250);
        assert_eq!(
            result,
            Err(Error::AttemptsExhausted {
                attempts: 250,
                validator: "at-least(1, 19)".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_budget() {
        let straight = Validator::new("straight", rules::straight);

        let result = generate_within(Strategy::Heroic, &straight, &mut test_rng(), 0);
        assert!(matches!(result, Err(Error::AttemptsExhausted { attempts: 0, .. })));
    }

    #[test]
    fn test_heroic_always_meets_none_under_six() {
        let validator = Validator::new("none-under-six", rules::none_under_six);

        let generated = generate_within(Strategy::Heroic, &validator, &mut test_rng(), 1).unwrap();
        assert!(generated.scores.totals().all(|t| (8..=18).contains(&t)));
    }
}
