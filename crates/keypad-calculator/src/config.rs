//! Calculator configuration
//!
//! Loaded from an optional YAML file; every field has a default, so an
//! empty file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{DisplayFormat, DivisionPolicy};
use crate::error::{AppError, AppResult};

/// Runtime settings for a calculator instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// What division by zero produces
    pub division_by_zero: DivisionPolicy,
    /// Display length above which the value is shown in exponent form
    pub exponent_threshold: usize,
    /// Fraction digits in exponent form
    pub exponent_digits: usize,
    /// Default tracing filter when neither `RUST_LOG` nor `-v` is given
    pub log_level: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_by_zero: DivisionPolicy::ZeroResult,
            exponent_threshold: DisplayFormat::DEFAULT_EXPONENT_THRESHOLD,
            exponent_digits: DisplayFormat::DEFAULT_EXPONENT_DIGITS,
            log_level: "warn".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from YAML text
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is within range
    pub fn validate(&self) -> AppResult<()> {
        if self.exponent_digits > DisplayFormat::MAX_EXPONENT_DIGITS {
            return Err(AppError::invalid_config(format!(
                "exponent_digits must be at most {}, got {}",
                DisplayFormat::MAX_EXPONENT_DIGITS,
                self.exponent_digits
            )));
        }
        Ok(())
    }

    /// Reads and parses a YAML configuration file
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        // An empty document deserializes as null rather than an empty map
        let config = if text.trim().is_empty() {
            Self::default()
        } else {
            Self::from_yaml_str(&text)?
        };
        info!(path = %path.display(), policy = ?config.division_by_zero, "configuration loaded");
        Ok(config)
    }

    /// Set division policy
    #[must_use]
    pub const fn with_division_policy(mut self, policy: DivisionPolicy) -> Self {
        self.division_by_zero = policy;
        self
    }

    /// Set exponent threshold
    #[must_use]
    pub const fn with_exponent_threshold(mut self, threshold: usize) -> Self {
        self.exponent_threshold = threshold;
        self
    }

    /// Set exponent fraction digits
    #[must_use]
    pub const fn with_exponent_digits(mut self, digits: usize) -> Self {
        self.exponent_digits = digits;
        self
    }

    /// Set default log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Returns the display format these settings describe
    #[must_use]
    pub const fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            exponent_threshold: self.exponent_threshold,
            exponent_digits: self.exponent_digits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.division_by_zero, DivisionPolicy::ZeroResult);
        assert_eq!(config.exponent_threshold, 12);
        assert_eq!(config.exponent_digits, 6);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_builders() {
        let config = CalculatorConfig::new()
            .with_division_policy(DivisionPolicy::Error)
            .with_exponent_threshold(8)
            .with_exponent_digits(3)
            .with_log_level("debug");
        assert_eq!(config.division_by_zero, DivisionPolicy::Error);
        assert_eq!(config.display_format().exponent_threshold, 8);
        assert_eq!(config.display_format().exponent_digits, 3);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = CalculatorConfig::from_yaml_str("division_by_zero: error\n").unwrap();
        assert_eq!(config.division_by_zero, DivisionPolicy::Error);
        assert_eq!(config.exponent_threshold, 12);
    }

    #[test]
    fn test_yaml_full() {
        let yaml = "division_by_zero: zero\nexponent_threshold: 10\nexponent_digits: 4\nlog_level: info\n";
        let config = CalculatorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            CalculatorConfig::new()
                .with_exponent_threshold(10)
                .with_exponent_digits(4)
                .with_log_level("info")
        );
    }

    #[test]
    fn test_yaml_invalid_policy() {
        let err = CalculatorConfig::from_yaml_str("division_by_zero: panic\n").unwrap_err();
        assert!(err.to_string().contains("Configuration"));
    }

    #[test]
    fn test_yaml_exponent_digits_out_of_range() {
        let err = CalculatorConfig::from_yaml_str("exponent_digits: 70000\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { .. }));
        assert!(err.to_string().contains("exponent_digits must be at most 100"));
    }

    #[test]
    fn test_yaml_exponent_digits_at_limit() {
        let config = CalculatorConfig::from_yaml_str("exponent_digits: 100\n").unwrap();
        assert_eq!(config.exponent_digits, 100);
        assert!(CalculatorConfig::new().with_exponent_digits(101).validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "exponent_threshold: 20").unwrap();
        let config = CalculatorConfig::load(file.path()).unwrap();
        assert_eq!(config.exponent_threshold, 20);
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CalculatorConfig::load(file.path()).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = CalculatorConfig::load(Path::new("/nonexistent/keypad.yaml")).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
