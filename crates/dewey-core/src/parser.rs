//! # Call Number Parser
//!
//! Splits a raw call-number string into its fields. Leading tokens that do
//! not start with a digit are the prestamp; the rest is matched against a
//! fixed grammar of four ordered groups:
//!
//! | # | Group      | Shape                                         |
//! |---|------------|-----------------------------------------------|
//! | 1 | major      | 1-3 digits                                    |
//! | 2 | minor      | non-space run after an optional `.`           |
//! | 3 | cutter     | next whitespace-delimited token               |
//! | 4 | additional | everything after the cutter                   |
//!
//! The minor part is not validated here. Text such as `514.12a` parses,
//! and only fails later if a numeric reading is requested.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::call_number::CallNumber;
use crate::error::DeweyError;

/// Classification grammar, applied after the prestamp has been removed.
static DDC_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^([0-9]{1,3})\.?(\S*)\s*(\S*)\s*(.*)$")
        .expect("call number grammar is a valid regex")
});

/// Parse a raw call number.
///
/// # Errors
///
/// Returns [`DeweyError::MalformedInput`] when no token starts with a
/// digit, i.e. there is no classification number to anchor on.
pub fn parse_call_number(raw: &str) -> Result<CallNumber, DeweyError> {
    let trimmed = raw.trim();
    let (prestamp, rest) = split_prestamp(trimmed);

    let caps = DDC_GRAMMAR
        .captures(rest)
        .ok_or_else(|| DeweyError::malformed(raw, "no leading classification digits"))?;

    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let major = group(1);
    let minor = group(2);

    let call_number = CallNumber::from_parts(
        prestamp,
        format!("{major}.{minor}"),
        group(3).to_string(),
        group(4).trim_end().to_string(),
    );

    tracing::trace!(
        raw,
        prestamp = call_number.prestamp(),
        classification = call_number.classification(),
        cutter = call_number.cutter(),
        "parsed call number"
    );

    Ok(call_number)
}

/// Peel off leading tokens that do not start with an ASCII digit.
///
/// Returns the prestamp (tokens joined by one space) and the remainder,
/// which is either empty or starts with a digit.
fn split_prestamp(input: &str) -> (String, &str) {
    let mut tokens = Vec::new();
    let mut rest = input;
    while let Some(token) = rest.split_whitespace().next() {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            break;
        }
        tokens.push(token);
        rest = rest[token.len()..].trim_start();
    }
    (tokens.join(" "), rest)
}
