//! Roll tabletop RPG ability scores until the set passes an acceptance rule.
//!
//! ```rust
//! # use ability_score_roller::{format, generate_with, roll, validator, Strategy};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), ability_score_roller::Error> {
//! // Roll a single 4d6 drop lowest score.
//! let rollout = roll("4d6k3")?;
//! println!("{rollout}"); // 14 (+2) [6,3,5 (2)]
//!
//! // Keep rolling 3d6 until two scores are 15 or higher and none is under six.
//! let rule = validator("all(colville-orig, none-under-six)")?;
//! let mut rng = StdRng::seed_from_u64(1);
//! let scores = generate_with(Strategy::Classic, &rule, &mut rng);
//! assert!(rule.accepts(&scores));
//!
//! for (attribute, rollout) in scores.with_attributes() {
//!     println!("{}", format(rollout, Some(attribute), true)); // STR: 15 (+2) [6,4,5]
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod dice;
mod driver;
mod error;
mod format;
mod score;
mod validate;

pub use config::{roll_scores, Config, DEFAULT_MAX_ATTEMPTS};
pub use dice::{Strategy, DIE_SIDES};
pub use driver::{generate_within, Generated};
pub use error::{Error, Result};
pub use format::{format_rollout, format_score_set, RolloutDisplay};
pub use score::{modifier, Attribute, Rollout, ScoreSet, SCORE_COUNT};
pub use validate::{rules, Registry, Validator, ValidatorExpr};

/// Rolls one score with the named dice method, e.g. `classic` or `4d6k3`.
pub fn roll(strategy: &str) -> Result<Rollout> {
    let strategy: Strategy = strategy.parse()?;
    Ok(strategy.roll())
}

/// Looks up a validator expression in [Registry::standard].
pub fn validator(expression: &str) -> Result<Validator> {
    Registry::standard().resolve(expression)
}

/// Rolls sets of six scores until `validator` accepts one.
/// Uses rand::thread_rng(), if you want to choose the rng yourself use `generate_with()`.
///
/// Never returns when the validator can't be satisfied by the strategy.
pub fn generate(strategy: Strategy, validator: &Validator) -> ScoreSet {
    driver::generate(strategy, validator, &mut rand::thread_rng())
}

/// Same as `generate()` but allows you to choose the rng you prefer to use.
pub fn generate_with(strategy: Strategy, validator: &Validator, rng: &mut impl rand::Rng) -> ScoreSet {
    driver::generate(strategy, validator, rng)
}

/// Renders one score, see [RolloutDisplay] for the layout.
pub fn format(rollout: &Rollout, attribute: Option<Attribute>, show_dice: bool) -> String {
    format_rollout(rollout, attribute, show_dice)
}
