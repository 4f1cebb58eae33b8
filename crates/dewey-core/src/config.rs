//! # Range Configuration
//!
//! Controls which characters the range calculator treats as wildcard
//! placeholders. The default is `x` in either case; catalogues that write
//! ranges as `74*` add `*` to the set.
//!
//! A config can be built in code or decoded from a YAML or JSON document:
//!
//! ```yaml
//! wildcards: ["x", "X", "*"]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DeweyError;

/// Wildcard settings for [`crate::range::RangeCalculator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Characters that stand for "any digit" in a range pattern.
    pub wildcards: Vec<char>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            wildcards: vec!['x', 'X'],
        }
    }
}

impl RangeConfig {
    /// Default wildcards plus `*`.
    pub fn with_asterisk() -> Self {
        let mut config = Self::default();
        config.wildcards.push('*');
        config
    }

    /// Whether `c` is one of the configured placeholders.
    pub fn is_wildcard(&self, c: char) -> bool {
        self.wildcards.contains(&c)
    }

    /// Check that the placeholder set is usable.
    ///
    /// A placeholder must not collide with the characters the calculator
    /// copies or relocates: digits, the decimal point, and whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DeweyError::Config`] for an empty set or a colliding
    /// character.
    pub fn validate(&self) -> Result<(), DeweyError> {
        if self.wildcards.is_empty() {
            return Err(DeweyError::Config(
                "at least one wildcard character is required".to_string(),
            ));
        }
        if let Some(bad) = self
            .wildcards
            .iter()
            .find(|c| c.is_ascii_digit() || **c == '.' || c.is_whitespace())
        {
            return Err(DeweyError::Config(format!(
                "wildcard {bad:?} collides with a digit, the decimal point, or whitespace"
            )));
        }
        Ok(())
    }

    /// Decode and validate a YAML config document.
    pub fn from_yaml_str(s: &str) -> Result<Self, DeweyError> {
        let config: Self = serde_yaml::from_str(s)
            .map_err(|e| DeweyError::Config(format!("YAML decode failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Decode and validate a JSON config document.
    pub fn from_json_str(s: &str) -> Result<Self, DeweyError> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| DeweyError::Config(format!("JSON decode failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_case_insensitive_x() {
        let config = RangeConfig::default();
        assert!(config.is_wildcard('x'));
        assert!(config.is_wildcard('X'));
        assert!(!config.is_wildcard('*'));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_asterisk() {
        let config = RangeConfig::with_asterisk();
        assert!(config.is_wildcard('*'));
        assert!(config.is_wildcard('x'));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let config = RangeConfig { wildcards: vec![] };
        assert!(matches!(config.validate(), Err(DeweyError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_colliding_characters() {
        for bad in ['5', '.', ' '] {
            let config = RangeConfig {
                wildcards: vec!['x', bad],
            };
            assert!(config.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_from_yaml() {
        let config = RangeConfig::from_yaml_str("wildcards: ['*', '?']\n").unwrap();
        assert_eq!(config.wildcards, vec!['*', '?']);
    }

    #[test]
    fn test_from_yaml_missing_field_uses_default() {
        let config = RangeConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, RangeConfig::default());
    }

    #[test]
    fn test_from_yaml_rejects_digit_wildcard() {
        assert!(RangeConfig::from_yaml_str("wildcards: ['0']").is_err());
    }

    #[test]
    fn test_from_json() {
        let config = RangeConfig::from_json_str(r#"{"wildcards": ["x", "*"]}"#).unwrap();
        assert!(config.is_wildcard('*'));
        assert!(!config.is_wildcard('X'));
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(matches!(
            RangeConfig::from_json_str("not json"),
            Err(DeweyError::Config(_))
        ));
    }
}
