use std::{fmt::Display, str::FromStr};

use crate::error::Error;

/// The six ability score labels. Only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Attribute {
    /// Canonical order, lines up with the rollouts of a [ScoreSet](crate::ScoreSet).
    pub const ALL: [Attribute; 6] = [
        Attribute::Str,
        Attribute::Dex,
        Attribute::Con,
        Attribute::Int,
        Attribute::Wis,
        Attribute::Cha,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Str => "STR",
            Attribute::Dex => "DEX",
            Attribute::Con => "CON",
            Attribute::Int => "INT",
            Attribute::Wis => "WIS",
            Attribute::Cha => "CHA",
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.label() == label)
            .ok_or_else(|| Error::UnknownAttribute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let labels: Vec<_> = Attribute::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["STR", "DEX", "CON", "INT", "WIS", "CHA"]);
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!("wis".parse::<Attribute>(), Ok(Attribute::Wis));
        assert_eq!(" CHA ".parse::<Attribute>(), Ok(Attribute::Cha));
        assert_eq!(
            "LUCK".parse::<Attribute>(),
            Err(Error::UnknownAttribute("LUCK".to_string()))
        );
    }
}
