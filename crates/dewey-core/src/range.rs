//! # Wildcard Range Calculation
//!
//! Expands a placeholder-bearing pattern such as `74x`, `7xx.2x` or
//! `813 K587x` into a half-open pair `[min, max)` of strings.
//!
//! The scan is character-positional. The first `.` is lifted out, the
//! remaining characters are walked left to right, and the point is put back
//! at its original offset afterwards. Each character is handled like this:
//!
//! - digits and any other non-wildcard text are copied to both bounds;
//! - the first wildcard of a run that follows a digit writes `0` to both
//!   bounds and adds one to the digit run to its left on the max side,
//!   carrying through `9`s (`79x -> 800`, `99x -> 1000`);
//! - later wildcards in the same run write `0` to both bounds;
//! - a wildcard with no digit to its left (start of pattern, after a letter
//!   or a space) writes `0` to min and `1` to max.
//!
//! When a carry rolls over a `9` in the classification and everything after
//! the decimal point is wildcards, both bounds drop to integer precision:
//! `709.x` gives `("709", "710")`, while `740.x` keeps `("740.0", "741.0")`.

use crate::call_number::CallNumber;
use crate::config::RangeConfig;
use crate::error::DeweyError;

/// Expands wildcard patterns using a validated [`RangeConfig`].
#[derive(Debug, Clone, Default)]
pub struct RangeCalculator {
    config: RangeConfig,
}

/// Outcome of adding one to the digit run at the end of a bound.
struct Carry {
    rolled_over: bool,
    grew_at: Option<usize>,
}

impl RangeCalculator {
    /// Build a calculator, validating `config` first.
    pub fn new(config: RangeConfig) -> Result<Self, DeweyError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Expand `pattern` into `(min, max)`.
    ///
    /// Surrounding whitespace is ignored. A pattern without wildcards yields
    /// itself for both bounds.
    pub fn calculate(&self, pattern: &str) -> (String, String) {
        let chars: Vec<char> = pattern.trim().chars().collect();
        let decimal_at = chars.iter().position(|&c| c == '.');
        let body: Vec<char> = match decimal_at {
            Some(at) => chars[..at].iter().chain(&chars[at + 1..]).copied().collect(),
            None => chars,
        };
        let class_end = body
            .iter()
            .position(|c| c.is_whitespace())
            .unwrap_or(body.len());

        let mut min: Vec<char> = Vec::with_capacity(body.len() + 1);
        let mut max: Vec<char> = Vec::with_capacity(body.len() + 2);
        let mut max_decimal_at = decimal_at;
        let mut rolled_over = false;

        for (i, &c) in body.iter().enumerate() {
            if !self.config.is_wildcard(c) {
                min.push(c);
                max.push(c);
                continue;
            }

            match i.checked_sub(1).map(|p| body[p]) {
                Some(prev) if self.config.is_wildcard(prev) => {}
                Some(prev) if prev.is_ascii_digit() => {
                    let carry = increment_digit_run(&mut max);
                    rolled_over |= carry.rolled_over && i < class_end;
                    if let (Some(at), Some(grew_at)) = (max_decimal_at.as_mut(), carry.grew_at) {
                        if grew_at < *at {
                            *at += 1;
                        }
                    }
                }
                _ => {
                    min.push('0');
                    max.push('1');
                    continue;
                }
            }
            min.push('0');
            max.push('0');
        }

        if let (Some(at), Some(max_at)) = (decimal_at, max_decimal_at) {
            let frac_end = body[at..]
                .iter()
                .position(|c| c.is_whitespace())
                .map_or(body.len(), |p| at + p);
            let fraction = &body[at..frac_end];
            let integer_precision = rolled_over
                && at <= class_end
                && !fraction.is_empty()
                && fraction.iter().all(|&c| self.config.is_wildcard(c));

            if integer_precision {
                let len = frac_end - at;
                min.drain(at..at + len);
                max.drain(max_at..max_at + len);
            } else {
                min.insert(at, '.');
                max.insert(max_at, '.');
            }
        }

        let min: String = min.into_iter().collect();
        let max: String = max.into_iter().collect();
        tracing::debug!(pattern, %min, %max, "calculated wildcard range");
        (min, max)
    }

    /// Range bounds used for membership tests, as call numbers.
    ///
    /// Only the classification token is expanded. Any prestamp before it is
    /// dropped and the text after it is carried verbatim into both bounds, so
    /// an `x` inside a cutter stays a letter here. The bounds are built
    /// directly rather than re-parsed, which keeps four-digit maxima such as
    /// `1000` intact.
    ///
    /// # Errors
    ///
    /// Returns [`DeweyError::MalformedInput`] if no token looks like a
    /// classification (starts with a digit, or is made only of digits,
    /// wildcards and a point).
    pub fn bounds(&self, pattern: &str) -> Result<(CallNumber, CallNumber), DeweyError> {
        let tokens: Vec<&str> = pattern.split_whitespace().collect();
        let at = tokens
            .iter()
            .position(|t| self.is_classification_token(t))
            .ok_or_else(|| DeweyError::malformed(pattern, "no classification in range pattern"))?;

        let (min, max) = self.calculate(tokens[at]);
        let cutter = tokens.get(at + 1).copied().unwrap_or("");
        let additional = tokens
            .get(at + 2..)
            .map(|rest| rest.join(" "))
            .unwrap_or_default();

        let bound = |classification: String| {
            CallNumber::from_parts(
                String::new(),
                classification,
                cutter.to_string(),
                additional.clone(),
            )
        };
        Ok((bound(min), bound(max)))
    }

    fn is_classification_token(&self, token: &str) -> bool {
        match token.chars().next() {
            Some(first) if first.is_ascii_digit() => true,
            Some(first) if self.config.is_wildcard(first) => token
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || self.config.is_wildcard(c)),
            _ => false,
        }
    }
}

/// Expand `pattern` with the default `x`/`X` placeholders.
pub fn calculate_range(pattern: &str) -> (String, String) {
    RangeCalculator::default().calculate(pattern)
}

/// Add one to the run of ASCII digits at the end of `digits`.
///
/// `9`s roll over to `0` and carry left. If the run is all `9`s a `1` is
/// inserted where the run starts.
fn increment_digit_run(digits: &mut Vec<char>) -> Carry {
    let mut rolled_over = false;
    let mut idx = digits.len();
    while idx > 0 {
        idx -= 1;
        match digits[idx] {
            '9' => {
                digits[idx] = '0';
                rolled_over = true;
            }
            d @ '0'..='8' => {
                digits[idx] = char::from(d as u8 + 1);
                return Carry {
                    rolled_over,
                    grew_at: None,
                };
            }
            _ => {
                digits.insert(idx + 1, '1');
                return Carry {
                    rolled_over,
                    grew_at: Some(idx + 1),
                };
            }
        }
    }
    digits.insert(0, '1');
    Carry {
        rolled_over,
        grew_at: Some(0),
    }
}
