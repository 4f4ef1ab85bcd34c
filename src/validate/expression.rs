use std::fmt::Display;

use winnow::{
    ascii::{dec_int, dec_uint, multispace0},
    combinator::{alt, cut_err, delimited, preceded, separated, separated_pair, terminated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{CharLiteral, Description},
    },
    token::take_while,
    PResult, Parser,
};

use crate::error::{Error, Result};

/// A parsed validator expression, before names are looked up.
///
/// ```text
/// expr := name
///       | "all(" expr ("," expr)* ")"
///       | "at-least(" count "," value ")"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorExpr {
    /// A rule looked up by name in a [Registry](crate::Registry).
    Name(String),
    /// Accepts only if every inner expression accepts.
    All(Vec<ValidatorExpr>),
    /// At least `count` scores of `value` or higher.
    AtLeast { count: usize, value: i32 },
}

impl ValidatorExpr {
    pub fn parse(input: &str) -> Result<Self> {
        parse_expr
            .parse(input)
            .map_err(|e| Error::InvalidExpression {
                input: input.to_string(),
                message: e.to_string(),
            })
    }
}

fn parse_expr(input: &mut &str) -> PResult<ValidatorExpr> {
    delimited(
        multispace0,
        alt((parse_all, parse_at_least, parse_name)),
        multispace0,
    )
    .parse_next(input)
}

fn parse_name(input: &mut &str) -> PResult<ValidatorExpr> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    })
    .map(|name: &str| ValidatorExpr::Name(name.to_ascii_lowercase()))
    .context(Label("validator name"))
    .context(Expected(Description("a name like `colville-orig`")))
    .parse_next(input)
}

fn parse_all(input: &mut &str) -> PResult<ValidatorExpr> {
    // Only commit once the opening paren is seen, so plain names starting with
    // "all" still parse as names.
    preceded(
        ("all", multispace0, '('),
        cut_err(terminated(
            separated(1.., parse_expr, ','),
            ')'.context(Expected(CharLiteral(')'))),
        )),
    )
    .map(ValidatorExpr::All)
    .parse_next(input)
}

fn parse_at_least(input: &mut &str) -> PResult<ValidatorExpr> {
    preceded(
        ("at-least", multispace0, '('),
        cut_err(terminated(
            separated_pair(
                delimited(multispace0, dec_uint, multispace0),
                ','.context(Expected(CharLiteral(','))),
                delimited(multispace0, dec_int, multispace0),
            ),
            ')'.context(Expected(CharLiteral(')'))),
        )),
    )
    .map(|(count, value): (u32, i32)| ValidatorExpr::AtLeast {
        count: count as usize,
        value,
    })
    .parse_next(input)
}

impl Display for ValidatorExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorExpr::Name(name) => write!(f, "{name}"),
            ValidatorExpr::All(inner) => {
                let inner = inner
                    .iter()
                    .map(|expr| expr.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "all({inner})")
            }
            ValidatorExpr::AtLeast { count, value } => write!(f, "at-least({count}, {value})"),
        }
    }
}
