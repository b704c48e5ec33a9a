//! Error types for the binary and configuration loading

use thiserror::Error;

use crate::core::CalcError;

/// Result type for application-level operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by `keypad-calc`
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Configuration value out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// Rejected key press
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Output serialization failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Feature not compiled in
    #[error("Unsupported: {message}")]
    Unsupported {
        /// Error message
        message: String,
    },
}

impl AppError {
    /// Create an invalid-configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported-feature error
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_is_transparent() {
        let err = AppError::from(CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_io_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(AppError::from(io).to_string(), "I/O error: missing");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = AppError::invalid_config("exponent_digits must be at most 100");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: exponent_digits must be at most 100"
        );
    }

    #[test]
    fn test_unsupported_message() {
        let err = AppError::unsupported("terminal UI not compiled in");
        assert_eq!(err.to_string(), "Unsupported: terminal UI not compiled in");
    }
}
