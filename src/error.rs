//! Errors returned by the ability score roller.

/// Everything that can go wrong while configuring or driving a rollout.
///
/// Rolling dice, checking a validator and formatting a score never fail; the
/// variants below cover bad names, malformed input data and an exhausted
/// attempt budget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown dice method: {0}")]
    UnknownStrategy(String),

    #[error("unknown validator: {0}")]
    UnknownValidator(String),

    #[error("invalid validator expression `{input}`: {message}")]
    InvalidExpression { input: String, message: String },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("a rollout needs at least one component die")]
    EmptyRollout,

    #[error("a score set holds exactly {expected} rollouts, found {found}")]
    ScoreSetSize { expected: usize, found: usize },

    /// The validator never accepted a candidate within the caller's budget.
    /// Almost always means the rule cannot be satisfied by the dice method.
    #[error("`{validator}` rejected {attempts} candidate sets in a row")]
    AttemptsExhausted { attempts: u64, validator: String },
}

pub type Result<T> = std::result::Result<T, Error>;
