//! # Call Number Value Type
//!
//! A parsed Dewey Decimal call number: an optional prestamp, the
//! classification number, an optional cutter, and any trailing text.
//!
//! Values are produced by [`crate::parser::parse_call_number`] (or the
//! range calculator when it builds bounds) and are immutable afterwards.
//! Every field is independently empty-or-present; an empty string means
//! the field was absent.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeweyError;

/// One parsed call number, e.g. `DVD 791.4372` or `514.123 A997x v.2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallNumber {
    prestamp: String,
    classification: String,
    cutter: String,
    additional: String,
}

impl CallNumber {
    pub(crate) fn from_parts(
        prestamp: String,
        classification: String,
        cutter: String,
        additional: String,
    ) -> Self {
        Self {
            prestamp,
            classification,
            cutter,
            additional,
        }
    }

    /// Free-text label before the classification (`DVD`, `REF`), or `""`.
    pub fn prestamp(&self) -> &str {
        &self.prestamp
    }

    /// The classification as written, `"<major>.<minor>"`.
    ///
    /// When the input had no minor part this ends in a lone dot
    /// (`"510."`). Use [`CallNumber::classification_value`] for the
    /// numeric reading.
    pub fn classification(&self) -> &str {
        &self.classification
    }

    /// Author/work code following the classification, or `""`.
    pub fn cutter(&self) -> &str {
        &self.cutter
    }

    /// Everything after the cutter (volume, copy, year), or `""`.
    pub fn additional(&self) -> &str {
        &self.additional
    }

    pub fn has_prestamp(&self) -> bool {
        !self.prestamp.is_empty()
    }

    pub fn has_cutter(&self) -> bool {
        !self.cutter.is_empty()
    }

    /// Cutter length in characters, used to pad cutters before comparison.
    pub fn cutter_len(&self) -> usize {
        self.cutter.chars().count()
    }

    /// The classification with a lone trailing dot removed.
    pub fn normalized_classification(&self) -> &str {
        self.classification
            .strip_suffix('.')
            .unwrap_or(&self.classification)
    }

    /// Numeric value of the classification.
    ///
    /// Only ASCII digits and a single decimal point are accepted, so forms a
    /// float parser would otherwise admit (`1.e5`, `inf`) are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DeweyError::MalformedInput`] when the minor part carried
    /// non-numeric text through the parser, e.g. `514.12a`.
    pub fn classification_value(&self) -> Result<f64, DeweyError> {
        let digits = self.normalized_classification();
        let well_formed = !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.matches('.').count() <= 1;
        if !well_formed {
            return Err(DeweyError::malformed(
                &self.classification,
                "classification is not a decimal number",
            ));
        }
        digits.parse::<f64>().map_err(|e| {
            DeweyError::malformed(&self.classification, format!("numeric parse failed: {e}"))
        })
    }

    /// Whether this call number falls inside the range a wildcard pattern
    /// denotes. See [`crate::compare::in_range`].
    pub fn in_range(&self, pattern: &str, inclusive_max: bool) -> Result<bool, DeweyError> {
        crate::compare::in_range(self, pattern, inclusive_max)
    }
}

impl std::fmt::Display for CallNumber {
    /// Normalized single-spaced form: prestamp, classification, cutter,
    /// additional, skipping absent fields.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [
            self.prestamp.as_str(),
            self.normalized_classification(),
            self.cutter.as_str(),
            self.additional.as_str(),
        ];
        let mut first = true;
        for part in parts.iter().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for CallNumber {
    type Err = DeweyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_call_number(s)
    }
}
