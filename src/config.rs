use rand::Rng;
use tracing::info;

use crate::dice::Strategy;
use crate::driver::{generate, generate_within};
use crate::error::Result;
use crate::format::format_score_set;
use crate::validate::Registry;

/// Attempts allowed by [Config::default] before giving up on a validator.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Everything the caller chooses for one rollout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    /// A validator expression, resolved against a [Registry].
    pub validator: String,
    /// Label the scores STR through CHA.
    pub show_order: bool,
    /// Show the dice behind each score.
    pub show_dice: bool,
    /// `None` keeps rolling until something is accepted.
    pub max_attempts: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Modern,
            validator: "straight".to_string(),
            show_order: true,
            show_dice: true,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// Rolls one character and returns its six formatted scores.
pub fn roll_scores(config: &Config, registry: &Registry, rng: &mut impl Rng) -> Result<Vec<String>> {
    let validator = registry.resolve(&config.validator)?;

    let scores = match config.max_attempts {
        Some(max_attempts) => {
            let generated = generate_within(config.strategy, &validator, rng, max_attempts)?;
            info!(attempts = generated.attempts, "rolled scores");
            generated.scores
        }
        None => generate(config.strategy, &validator, rng),
    };

    Ok(format_score_set(&scores, config.show_order, config.show_dice))
}
