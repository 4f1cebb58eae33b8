//! # Call Number Comparison
//!
//! Shelf-order comparison between two call numbers, and a range-membership
//! test built on it.
//!
//! Classifications are compared numerically first (`514.123` and
//! `514.1230` are the same number). Only when they are equal do cutters
//! decide: the shorter cutter is right-padded with `0` to the longer one's
//! length and the two are compared as character sequences, ignoring case
//! for every operator except `===`. Prestamps and additional text never
//! take part.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::call_number::CallNumber;
use crate::error::DeweyError;
use crate::parser::parse_call_number;
use crate::range::RangeCalculator;

/// Comparison operator, read as `a <op> b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    /// Equality with case-insensitive cutters.
    #[serde(rename = "==")]
    Eq,
    /// Equality with exact-case cutters.
    #[serde(rename = "===")]
    StrictEq,
}

impl Operator {
    /// All operators, in declaration order.
    pub fn all() -> &'static [Operator] {
        &[
            Self::Gt,
            Self::Gte,
            Self::Lt,
            Self::Lte,
            Self::Eq,
            Self::StrictEq,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Eq => "==",
            Self::StrictEq => "===",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = DeweyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Gte),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Lte),
            "==" => Ok(Self::Eq),
            "===" => Ok(Self::StrictEq),
            other => Err(DeweyError::InvalidOperator(other.to_string())),
        }
    }
}

/// A comparison operand: either raw text or an already parsed value.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Raw(&'a str),
    Parsed(&'a CallNumber),
}

impl<'a> Input<'a> {
    /// Parse raw text; borrow parsed values as-is.
    pub fn normalize(self) -> Result<Cow<'a, CallNumber>, DeweyError> {
        match self {
            Self::Raw(raw) => parse_call_number(raw).map(Cow::Owned),
            Self::Parsed(cn) => Ok(Cow::Borrowed(cn)),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Raw(raw)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(raw: &'a String) -> Self {
        Self::Raw(raw.as_str())
    }
}

impl<'a> From<&'a CallNumber> for Input<'a> {
    fn from(cn: &'a CallNumber) -> Self {
        Self::Parsed(cn)
    }
}

/// Evaluate `a <op> b`.
///
/// # Errors
///
/// [`DeweyError::MalformedInput`] if a raw operand does not parse or a
/// classification is not numeric.
pub fn compare<'a, 'b>(
    a: impl Into<Input<'a>>,
    b: impl Into<Input<'b>>,
    op: Operator,
) -> Result<bool, DeweyError> {
    let a: Input<'a> = a.into();
    let b: Input<'b> = b.into();
    let (a, b) = (a.normalize()?, b.normalize()?);
    compare_parsed(&a, &b, op)
}

/// [`compare`] with the operator given as text (`">="`, `"==="`, ...).
///
/// The operator is checked before either operand is parsed.
pub fn compare_str<'a, 'b>(
    a: impl Into<Input<'a>>,
    b: impl Into<Input<'b>>,
    op: &str,
) -> Result<bool, DeweyError> {
    let op = op.parse::<Operator>()?;
    compare(a, b, op)
}

/// Whether `input` lies in the range `pattern` denotes, with the default
/// `x`/`X` placeholders.
///
/// True when `input >= min` and `input <= max` (or `< max` when
/// `inclusive_max` is false).
pub fn in_range<'a>(
    input: impl Into<Input<'a>>,
    pattern: &str,
    inclusive_max: bool,
) -> Result<bool, DeweyError> {
    RangeCalculator::default().contains(input, pattern, inclusive_max)
}

impl RangeCalculator {
    /// [`in_range`] using this calculator's placeholders.
    pub fn contains<'a>(
        &self,
        input: impl Into<Input<'a>>,
        pattern: &str,
        inclusive_max: bool,
    ) -> Result<bool, DeweyError> {
        let input: Input<'a> = input.into();
        let input = input.normalize()?;
        let (min, max) = self.bounds(pattern)?;
        let upper = if inclusive_max { Operator::Lte } else { Operator::Lt };
        Ok(compare_parsed(&input, &min, Operator::Gte)? && compare_parsed(&input, &max, upper)?)
    }
}

fn compare_parsed(a: &CallNumber, b: &CallNumber, op: Operator) -> Result<bool, DeweyError> {
    let a_value = a.classification_value()?;
    let b_value = b.classification_value()?;

    if a_value != b_value {
        return Ok(match op {
            Operator::Gt | Operator::Gte => a_value > b_value,
            Operator::Lt | Operator::Lte => a_value < b_value,
            Operator::Eq | Operator::StrictEq => false,
        });
    }

    let width = a.cutter_len().max(b.cutter_len());
    let a_cutter = pad_cutter(a.cutter(), width);
    let b_cutter = pad_cutter(b.cutter(), width);

    let result = if op == Operator::StrictEq {
        a_cutter == b_cutter
    } else {
        let a_cutter = a_cutter.to_lowercase();
        let b_cutter = b_cutter.to_lowercase();
        match op {
            Operator::Gt => a_cutter > b_cutter,
            Operator::Gte => a_cutter >= b_cutter,
            Operator::Lt => a_cutter < b_cutter,
            Operator::Lte => a_cutter <= b_cutter,
            Operator::Eq | Operator::StrictEq => a_cutter == b_cutter,
        }
    };

    tracing::trace!(
        a = %a,
        b = %b,
        op = op.as_str(),
        result,
        "compared cutters"
    );
    Ok(result)
}

/// Right-pad `cutter` with `'0'` to `width` characters.
fn pad_cutter(cutter: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width);
    padded.push_str(cutter);
    padded.extend(std::iter::repeat('0').take(width.saturating_sub(cutter.chars().count())));
    padded
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Filling the placeholders with any digits lands inside the range.
        #[test]
        fn filled_pattern_is_in_range(
            prefix in "[1-9]{1,2}",
            fill in "[0-9]{1,2}",
        ) {
            prop_assume!(prefix.len() + fill.len() <= 3);
            let pattern = format!("{prefix}{}", "x".repeat(fill.len()));
            let concrete = format!("{prefix}{fill}");
            prop_assert!(in_range(concrete.as_str(), &pattern, false).unwrap());
        }

        /// Exactly one of <, ==, > holds for any pair of plain call numbers.
        #[test]
        fn trichotomy(
            a in "[0-9]{3}(\\.[0-9]{1,4})?( [A-Z][0-9]{1,3}[a-z]?)?",
            b in "[0-9]{3}(\\.[0-9]{1,4})?( [A-Z][0-9]{1,3}[a-z]?)?",
        ) {
            let lt = cmp_ok(&a, &b, Operator::Lt);
            let eq = cmp_ok(&a, &b, Operator::Eq);
            let gt = cmp_ok(&a, &b, Operator::Gt);
            prop_assert_eq!([lt, eq, gt].iter().filter(|x| **x).count(), 1);
            prop_assert_eq!(cmp_ok(&a, &b, Operator::Lte), lt || eq);
            prop_assert_eq!(cmp_ok(&a, &b, Operator::Gte), gt || eq);
        }

        /// Swapping operands swaps the strict orderings.
        #[test]
        fn antisymmetry(
            a in "[0-9]{1,3}\\.[0-9]{0,3}( [A-Za-z][0-9]{0,3})?",
            b in "[0-9]{1,3}\\.[0-9]{0,3}( [A-Za-z][0-9]{0,3})?",
        ) {
            prop_assert_eq!(cmp_ok(&a, &b, Operator::Lt), cmp_ok(&b, &a, Operator::Gt));
        }
    }

    fn cmp_ok(a: &str, b: &str, op: Operator) -> bool {
        compare(a, b, op).unwrap()
    }
}
