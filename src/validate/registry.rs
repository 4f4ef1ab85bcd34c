use std::collections::HashMap;

use tracing::debug;

use super::{rules, Validator, ValidatorExpr};
use crate::error::{Error, Result};

/// The standard rules, in the order they're listed to users.
const STANDARD: [(&str, fn(&crate::ScoreSet) -> bool); 12] = [
    ("straight", rules::straight),
    ("colville-orig", rules::colville_orig),
    ("colville-lite", rules::colville_lite),
    ("colville-neo", rules::colville_neo),
    ("nonnegative-net-mod", rules::nonnegative_net_mod),
    ("mercer", rules::mercer),
    ("sfc-hard", rules::sfc_hard),
    ("one-at-least-13", rules::one_at_least_13),
    ("none-under-six", rules::none_under_six),
    ("strict-filthy-casual", rules::strict_filthy_casual),
    ("gill-one", rules::gill_one),
    ("gill-two", rules::gill_two),
];

/// Other spellings for the standard rules.
const ALIASES: [(&str, &str); 9] = [
    ("all-good", "straight"),
    ("colville", "colville-orig"),
    ("nonnegative-mod", "nonnegative-net-mod"),
    ("strict-filthy-casual-hard", "sfc-hard"),
    ("one-13-or-more", "one-at-least-13"),
    ("sfc", "strict-filthy-casual"),
    ("dwgill-one", "gill-one"),
    ("dwgill-two", "gill-two"),
    ("none-under-6", "none-under-six"),
];

/// Maps names to validators.
///
/// Lookups are case-insensitive. Names and aliases share one namespace, so
/// registering a name shadows any alias with the same spelling.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    validators: HashMap<String, Validator>,
    aliases: HashMap<String, String>,
    order: Vec<String>,
}

impl Registry {
    /// An empty registry, not even `straight` is known.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every standard rule plus its aliases.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (name, rule) in STANDARD {
            registry.register(Validator::new(name, rule));
        }
        for (alias, name) in ALIASES {
            registry.alias(alias, name);
        }
        registry
    }

    /// Adds `validator` under its own name, replacing any previous rule.
    pub fn register(&mut self, validator: Validator) {
        let name = validator.name().to_ascii_lowercase();
        self.aliases.remove(&name);
        if !self.validators.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.validators.insert(name, validator);
    }

    /// Makes `alias` resolve to whatever `name` resolves to.
    pub fn alias(&mut self, alias: &str, name: &str) {
        let alias = alias.to_ascii_lowercase();
        if alias == name || self.validators.contains_key(&alias) {
            return;
        }
        self.aliases.insert(alias, name.to_ascii_lowercase());
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        let name = name.trim().to_ascii_lowercase();
        let name = self.aliases.get(&name).unwrap_or(&name);
        self.validators.get(name)
    }

    /// Registered names in registration order, aliases excluded.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Aliases and the names they point to, sorted by alias.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut aliases: Vec<_> = self
            .aliases
            .iter()
            .map(|(alias, name)| (alias.as_str(), name.as_str()))
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Parses a validator expression like `all(sfc-hard, none-under-six)` and
    /// builds the validator it describes.
    pub fn resolve(&self, input: &str) -> Result<Validator> {
        let expr = ValidatorExpr::parse(input)?;
        let validator = self.build(&expr)?;
        debug!(expression = %expr, validator = validator.name(), "resolved validator");
        Ok(validator)
    }

    pub fn build(&self, expr: &ValidatorExpr) -> Result<Validator> {
        match expr {
            ValidatorExpr::Name(name) => self
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnknownValidator(name.clone())),
            ValidatorExpr::All(inner) => {
                let validators = inner
                    .iter()
                    .map(|expr| self.build(expr))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Validator::all(validators))
            }
            ValidatorExpr::AtLeast { count, value } => Ok(Validator::at_least(*count, *value)),
        }
    }
}
